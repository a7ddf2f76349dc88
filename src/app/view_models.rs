use super::*;

impl QuizApp {
    pub fn question_card(&self) -> QuestionCard {
        let q = self.engine.current_question();
        let selected = self.engine.selected_answer_for_current();
        QuestionCard {
            number: self.engine.current_index() + 1,
            total: self.engine.question_count(),
            prompt: q.text.clone(),
            options: q
                .options
                .iter()
                .map(|o| OptionRow {
                    label: o.clone(),
                    selected: selected == Some(o.as_str()),
                })
                .collect(),
        }
    }

    pub fn next_button_label(&self) -> &'static str {
        if self.engine.is_last_question() {
            "Submit and View Score"
        } else {
            "Next Question"
        }
    }

    pub fn score_label(&self) -> String {
        format!("Total Score: {}", self.engine.compute_score())
    }

    /// Texto de la barra inferior.
    pub fn status_line(&self) -> String {
        match self.phase() {
            QuizPhase::InProgress => self.question_card().heading(),
            QuizPhase::Completed => "Quiz complete".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn card_marks_only_the_selected_option() {
        let mut app = QuizApp::new();
        app.next_or_submit();
        app.choose_option("Drawable");

        let card = app.question_card();
        assert_eq!(card.heading(), "Question 2 of 4");
        assert_eq!(
            card.options,
            vec![
                OptionRow { label: "Layout".into(), selected: false },
                OptionRow { label: "Resources".into(), selected: false },
                OptionRow { label: "Drawable".into(), selected: true },
                OptionRow { label: "Java".into(), selected: false },
            ]
        );
    }

    #[test]
    fn labels_follow_position_and_score() {
        let mut app = QuizApp::new();
        assert_eq!(app.next_button_label(), "Next Question");
        app.next_or_submit();
        app.choose_option("Drawable");
        app.next_or_submit();
        app.next_or_submit();
        assert_eq!(app.next_button_label(), "Submit and View Score");

        app.next_or_submit();
        assert_eq!(app.score_label(), "Total Score: 1/4");
    }

    #[test]
    fn status_line_tracks_position_then_completion() {
        let mut app = QuizApp::new();
        assert_eq!(app.status_line(), "Question 1 of 4");
        while app.next_or_submit() {}
        assert_eq!(app.status_line(), "Quiz complete");
    }
}
