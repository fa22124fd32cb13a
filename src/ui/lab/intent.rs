use crate::remote::StylePreset;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LabIntent {
    SelectStyle { style: StylePreset },
    /// Ignored unless `code` is a known language.
    SelectLanguage { code: String },
    SearchLanguage { query: String },
    EditKeyword { input: String },
    /// Move the keyword input into the catalyst list.
    AddKeyword,
    RemoveKeyword { index: usize },
    EditVibe { vibe: String },
    GenerationStarted,
    GenerationFinished,
}

impl Intent for LabIntent {}
