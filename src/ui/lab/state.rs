use crate::remote::{LabRequest, StylePreset};
use crate::ui::lab::languages::{search_languages, Language};
use crate::ui::mvi::UiState;

pub const MAX_CATALYSTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct LabState {
    pub style: StylePreset,
    pub language: String,
    pub language_search: String,
    pub catalysts: Vec<String>,
    pub keyword_input: String,
    pub vibe: String,
    pub generating: bool,
}

impl Default for LabState {
    fn default() -> Self {
        Self {
            style: StylePreset::default(),
            language: "en".to_string(),
            language_search: String::new(),
            catalysts: Vec::new(),
            keyword_input: String::new(),
            vibe: String::new(),
            generating: false,
        }
    }
}

impl UiState for LabState {}

impl LabState {
    pub fn can_add_keyword(&self) -> bool {
        !self.keyword_input.trim().is_empty() && self.catalysts.len() < MAX_CATALYSTS
    }

    pub fn filtered_languages(&self) -> Vec<Language> {
        search_languages(&self.language_search)
    }

    pub fn request(&self) -> LabRequest {
        LabRequest {
            style: self.style,
            language: self.language.clone(),
            catalysts: self.catalysts.clone(),
            vibe: self.vibe.clone(),
        }
    }
}
