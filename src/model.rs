use serde::Deserialize;
use std::fmt;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>, // orden de presentación
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, options: &[&str], correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Fase de un intento de quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
