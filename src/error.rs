use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Question bank is empty")]
    EmptyBank,

    #[error("Question {index} has {count} option(s), at least 2 are required")]
    TooFewOptions { index: usize, count: usize },

    #[error("Question {index} lists option '{option}' more than once")]
    DuplicateOption { index: usize, option: String },

    #[error("Question {index}: correct answer '{answer}' is not one of its options")]
    CorrectAnswerNotAnOption { index: usize, answer: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;
