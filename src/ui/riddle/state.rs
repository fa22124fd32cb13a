use crate::remote::{QuizData, Question};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizState {
    #[default]
    Loading,
    Active {
        quiz: QuizData,
        current: usize,
        /// Answer picked for the current question, if any.
        selected: Option<usize>,
        score: usize,
    },
    Complete {
        score: usize,
        total: usize,
    },
}

impl UiState for QuizState {}

impl QuizState {
    pub fn score(&self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Active { score, .. } | Self::Complete { score, .. } => *score,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            Self::Loading => 0,
            Self::Active { quiz, .. } => quiz.questions.len(),
            Self::Complete { total, .. } => *total,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self {
            Self::Active { quiz, current, .. } => quiz.questions.get(*current),
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Active { selected: Some(_), .. })
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}
