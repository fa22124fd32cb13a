use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeliveryEditorState {
    #[default]
    Viewing,
    Editing {
        /// Raw text as typed; validated only on save.
        draft: String,
    },
}

impl UiState for DeliveryEditorState {}

impl DeliveryEditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Editing { draft } => Some(draft),
            Self::Viewing => None,
        }
    }
}
