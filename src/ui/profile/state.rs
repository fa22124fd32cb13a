use crate::remote::ProfileForm;
use crate::ui::mvi::UiState;
use crate::ui::profile::intent::ProfileField;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Pending,
    Succeeded {
        chemistry: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub phase: SubmitPhase,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn is_pending(&self) -> bool {
        self.phase == SubmitPhase::Pending
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::DisplayName => &self.form.display_name,
            ProfileField::Chemistry => &self.form.chemistry,
            ProfileField::Art => &self.form.art,
            ProfileField::Music => &self.form.music,
            ProfileField::Astrology => &self.form.astrology,
            ProfileField::Notes => &self.form.notes,
        }
    }
}
