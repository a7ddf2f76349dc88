pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::QuizPhase;
use eframe::{App, Frame};
use egui::Context;
use layout::status_bar;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BARRA INFERIOR: PROGRESO Y TEMA
        status_bar(ctx, &self.status_line());

        // Dispatch por fase a las vistas
        match self.phase() {
            QuizPhase::InProgress => views::quiz::ui_quiz(self, ctx),
            QuizPhase::Completed => views::summary::ui_summary_view(self, ctx),
        }
    }
}
