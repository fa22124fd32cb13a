use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    DisplayName,
    Chemistry,
    Art,
    Music,
    Astrology,
    Notes,
}

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Edit { field: ProfileField, value: String },
    Submitting,
    Succeeded { chemistry: String },
    Failed { message: String },
}

impl Intent for ProfileIntent {}
