use std::collections::BTreeSet;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReflectionState {
    pub endearments: Vec<String>,
    pub card_count: usize,
    pub revealed: BTreeSet<usize>,
}

impl UiState for ReflectionState {}

impl ReflectionState {
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn endearment(&self, index: usize) -> Option<&str> {
        self.endearments.get(index).map(String::as_str)
    }
}
