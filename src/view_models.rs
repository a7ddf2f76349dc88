// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    pub number: usize, // base 1
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionRow>,
}

impl QuestionCard {
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }
}
