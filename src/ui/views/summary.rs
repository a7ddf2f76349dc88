use crate::QuizApp;
use crate::ui::layout::{question_card, quiz_panel, wide_button};
use egui::Context;

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let card = app.question_card();
    let score = app.score_label();

    quiz_panel(ctx, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            // Última pregunta atenuada pero activa: cambiarla recalcula la nota
            let picked = ui
                .scope(|ui| {
                    ui.multiply_opacity(0.5);
                    question_card(ui, &card)
                })
                .inner;
            if let Some(option) = picked {
                app.choose_option(&option);
            }

            ui.add_space(16.0);
            ui.heading(score);
            ui.add_space(16.0);

            let width = ui.available_width() * 0.6;
            if wide_button(ui, "Restart Quiz", width) {
                app.restart_quiz();
                ctx.request_repaint();
            }
        });
    });
}
