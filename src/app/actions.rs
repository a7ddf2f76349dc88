use super::*;

pub const MSG_CORRECT: &str = "Correct answer.";
pub const MSG_WRONG: &str = "Wrong answer.";
pub const MSG_RESTARTED: &str = "Quiz Restarted";

impl QuizApp {
    pub fn choose_option(&mut self, option: &str) {
        self.engine.select_answer(option);
        self.message.clear();
    }

    /// Botón "Next Question" / "Submit and View Score".
    /// Devuelve `true` si quedan preguntas.
    pub fn next_or_submit(&mut self) -> bool {
        let was_correct = self.engine.is_current_correct();
        let more = self.engine.advance();

        if more {
            self.message = (if was_correct { MSG_CORRECT } else { MSG_WRONG }).to_string();
        } else {
            let score = self.engine.compute_score();
            log::info!("final score {score}");
            self.message.clear();
        }
        more
    }

    pub fn restart_quiz(&mut self) {
        self.engine.restart();
        self.message = MSG_RESTARTED.into();
    }
}
