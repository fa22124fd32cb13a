use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ReflectionIntent {
    /// Replace the card set. `card_count` is used when `endearments` is empty.
    Load {
        endearments: Vec<String>,
        card_count: usize,
    },
    /// Flip a card face up. Cards never flip back.
    Reveal { index: usize },
}

impl Intent for ReflectionIntent {}
