// src/engine.rs

use crate::model::{Question, QuizPhase, Score};

/// Estado de un intento de quiz: preguntas fijas, posición actual y
/// respuestas elegidas (una ranura por pregunta).
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    current_index: usize,
    selected_answers: Vec<Option<String>>,
    phase: QuizPhase,
}

impl QuizEngine {
    /// Entra en pánico si `questions` está vacío.
    pub fn new(questions: Vec<Question>) -> Self {
        assert!(!questions.is_empty(), "a quiz needs at least one question");
        let selected_answers = vec![None; questions.len()];
        Self {
            questions,
            current_index: 0,
            selected_answers,
            phase: QuizPhase::InProgress,
        }
    }

    pub fn selected_answers(&self) -> &[Option<String>] {
        &self.selected_answers
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn selected_answer_for_current(&self) -> Option<&str> {
        self.selected_answers[self.current_index].as_deref()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index == self.questions.len() - 1
    }

    /// Si la selección de la pregunta actual coincide con su respuesta correcta.
    pub fn is_current_correct(&self) -> bool {
        self.selected_answer_for_current()
            .is_some_and(|a| self.current_question().is_correct(a))
    }

    /// Sobrescribe la respuesta de la pregunta actual, en cualquier fase.
    pub fn select_answer(&mut self, option: impl Into<String>) {
        let option = option.into();
        log::debug!("question {}: selected '{}'", self.current_index, option);
        self.selected_answers[self.current_index] = Some(option);
    }

    /// Avanza a la siguiente pregunta. Devuelve `false` cuando no quedan
    /// más: en ese caso el quiz pasa a `Completed` y el índice no cambia.
    pub fn advance(&mut self) -> bool {
        if self.is_completed() {
            log::debug!("advance ignored: quiz already completed");
            return false;
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Completed;
            log::info!("quiz completed");
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Puntuación alineada por índice: cada respuesta se compara sólo con
    /// la respuesta correcta de su propia pregunta.
    pub fn compute_score(&self) -> Score {
        let correct = self
            .selected_answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, q)| answer.as_deref().is_some_and(|a| q.is_correct(a)))
            .count();
        Score {
            correct,
            total: self.questions.len(),
        }
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected_answers.iter_mut().for_each(|slot| *slot = None);
        self.phase = QuizPhase::InProgress;
        log::debug!("quiz restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("1 + 1?", &["1", "2"], "2"),
            Question::new("2 + 2?", &["2", "4"], "4"),
        ]
    }

    #[test]
    #[should_panic(expected = "at least one question")]
    fn empty_question_set_is_a_contract_violation() {
        QuizEngine::new(Vec::new());
    }

    #[test]
    fn answer_matching_another_question_does_not_score() {
        let mut engine = QuizEngine::new(two_questions());
        // "2" es la respuesta correcta de la pregunta 0, no de la 1
        engine.advance();
        engine.select_answer("2");
        assert_eq!(engine.compute_score(), Score { correct: 0, total: 2 });
    }

    #[test]
    fn completed_quiz_records_selection_but_does_not_advance() {
        let mut engine = QuizEngine::new(two_questions());
        engine.select_answer("2");
        assert!(engine.advance());
        assert!(!engine.advance());
        assert!(engine.is_completed());
        assert_eq!(engine.compute_score(), Score { correct: 1, total: 2 });

        engine.select_answer("4");
        assert_eq!(engine.selected_answer_for_current(), Some("4"));
        assert_eq!(engine.compute_score(), Score { correct: 2, total: 2 });

        assert!(!engine.advance());
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_completed());
    }

    #[test]
    fn single_question_selection_after_completion_is_kept() {
        let mut engine = QuizEngine::new(vec![Question::new("only?", &["a", "b"], "b")]);
        assert!(!engine.advance());
        engine.select_answer("b");
        assert_eq!(engine.selected_answers(), &[Some("b".to_string())]);
        assert_eq!(engine.compute_score(), Score { correct: 1, total: 1 });
    }

    #[test]
    fn is_current_correct_follows_selection() {
        let mut engine = QuizEngine::new(two_questions());
        assert!(!engine.is_current_correct());
        engine.select_answer("1");
        assert!(!engine.is_current_correct());
        engine.select_answer("2");
        assert!(engine.is_current_correct());
    }
}
