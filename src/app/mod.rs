use crate::data::read_questions_embedded;
use crate::engine::QuizEngine;
use crate::model::{Question, QuizPhase};

// Submódulos
pub mod actions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionRow, QuestionCard};

pub struct QuizApp {
    pub engine: QuizEngine,
    /// Último aviso para el usuario (equivalente a un toast).
    pub message: String,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_questions(read_questions_embedded())
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            engine: QuizEngine::new(questions),
            message: String::new(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.engine.phase()
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
