use crate::remote::QuizData;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum QuizIntent {
    Loaded { quiz: QuizData },
    /// Pick an answer for the current question. Ignored once answered.
    Select { answer: usize },
    /// Move past an answered question.
    Advance,
    Reset,
}

impl Intent for QuizIntent {}
