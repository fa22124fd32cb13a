use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::{ProfileField, ProfileIntent};
use crate::ui::profile::state::{ProfileState, SubmitPhase};

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Edit { field, value } => {
                // The form is frozen while a submission is out.
                if state.is_pending() {
                    return state;
                }
                let slot = match field {
                    ProfileField::DisplayName => &mut state.form.display_name,
                    ProfileField::Chemistry => &mut state.form.chemistry,
                    ProfileField::Art => &mut state.form.art,
                    ProfileField::Music => &mut state.form.music,
                    ProfileField::Astrology => &mut state.form.astrology,
                    ProfileField::Notes => &mut state.form.notes,
                };
                *slot = value;
                state.phase = SubmitPhase::Editing;
            }
            ProfileIntent::Submitting => state.phase = SubmitPhase::Pending,
            ProfileIntent::Succeeded { chemistry } => {
                state.phase = SubmitPhase::Succeeded { chemistry }
            }
            ProfileIntent::Failed { message } => state.phase = SubmitPhase::Failed { message },
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(field: ProfileField, value: &str) -> ProfileIntent {
        ProfileIntent::Edit {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn edits_fill_the_form() {
        let state = [
            edit(ProfileField::DisplayName, "Ana"),
            edit(ProfileField::Music, "fado"),
        ]
        .into_iter()
        .fold(ProfileState::default(), ProfileReducer::reduce);

        assert_eq!(state.form.display_name, "Ana");
        assert_eq!(state.field(ProfileField::Music), "fado");
        assert_eq!(state.phase, SubmitPhase::Editing);
    }

    #[test]
    fn edits_are_ignored_while_pending() {
        let state = [
            edit(ProfileField::Art, "Klimt"),
            ProfileIntent::Submitting,
            edit(ProfileField::Art, "Schiele"),
        ]
        .into_iter()
        .fold(ProfileState::default(), ProfileReducer::reduce);

        assert_eq!(state.form.art, "Klimt");
        assert!(state.is_pending());
    }

    #[test]
    fn editing_after_success_clears_it() {
        let state = [
            ProfileIntent::Submitting,
            ProfileIntent::Succeeded {
                chemistry: "Copper".to_string(),
            },
        ]
        .into_iter()
        .fold(ProfileState::default(), ProfileReducer::reduce);
        assert_eq!(
            state.phase,
            SubmitPhase::Succeeded {
                chemistry: "Copper".to_string()
            }
        );

        let state = ProfileReducer::reduce(state, edit(ProfileField::Notes, "again"));
        assert_eq!(state.phase, SubmitPhase::Editing);
    }
}
