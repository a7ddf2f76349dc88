use crate::view_models::QuestionCard;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

/// Barra inferior: progreso del intento a la izquierda, cambio de tema a la derecha.
pub fn status_bar(ctx: &Context, status: &str) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.small(status);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let label = if dark { "☀ Light mode" } else { "🌙 Dark mode" };
                if ui.button(label).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Columna de ancho acotado y centrada, con scroll si la pregunta no cabe.
pub fn quiz_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let width = ui.available_width().min(max_width);
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
                    ui.set_width(width);
                    inner(ui);
                });
            });
        });
    });
}

/// Tarjeta de pregunta con un radio button por opción.
/// Devuelve la opción pulsada en este frame, si hay alguna.
pub fn question_card(ui: &mut Ui, card: &QuestionCard) -> Option<String> {
    let mut clicked = None;
    Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.weak(card.heading());
            ui.add_space(4.0);
            ui.label(&card.prompt);
            ui.add_space(8.0);

            for option in &card.options {
                if ui.radio(option.selected, option.label.as_str()).clicked() {
                    clicked = Some(option.label.clone());
                }
                ui.add_space(4.0);
            }
        });
    clicked
}

pub fn wide_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    ui.add_sized([width, 36.0], Button::new(label)).clicked()
}
