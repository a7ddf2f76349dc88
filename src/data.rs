// src/data.rs

use crate::error::{QuizError, Result};
use crate::model::Question;
use std::collections::HashSet;

/// Parsea y valida un banco de preguntas en YAML.
pub fn parse_question_bank(yaml: &str) -> Result<Vec<Question>> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    validate_questions(&questions)?;
    Ok(questions)
}

pub fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(QuizError::EmptyBank);
    }

    for (index, q) in questions.iter().enumerate() {
        if q.options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                index,
                count: q.options.len(),
            });
        }

        let mut seen = HashSet::new();
        if let Some(dup) = q.options.iter().find(|o| !seen.insert(o.as_str())) {
            return Err(QuizError::DuplicateOption {
                index,
                option: dup.clone(),
            });
        }

        if !q.options.contains(&q.correct_answer) {
            return Err(QuizError::CorrectAnswerNotAnOption {
                index,
                answer: q.correct_answer.clone(),
            });
        }
    }
    Ok(())
}

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/quiz_questions.yaml");
    let questions = parse_question_bank(file_content)
        .unwrap_or_else(|e| panic!("embedded question bank is invalid: {e}"));
    log::debug!("loaded {} embedded questions", questions.len());
    questions
}
