use crate::QuizApp;
use crate::ui::layout::{question_card, quiz_panel, wide_button};
use egui::Context;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let card = app.question_card();
    let next_label = app.next_button_label();

    quiz_panel(ctx, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            if let Some(option) = question_card(ui, &card) {
                app.choose_option(&option);
            }

            ui.add_space(12.0);
            let width = ui.available_width() * 0.6;
            if wide_button(ui, next_label, width) {
                app.next_or_submit();
                ctx.request_repaint();
            }

            ui.add_space(8.0);
            if !app.message.is_empty() {
                ui.label(&app.message);
            }
        });
    });
}
