use crate::ui::mvi::Reducer;
use crate::ui::streak::intent::DeliveryEditorIntent;
use crate::ui::streak::state::DeliveryEditorState;

pub struct DeliveryEditorReducer;

impl Reducer for DeliveryEditorReducer {
    type State = DeliveryEditorState;
    type Intent = DeliveryEditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeliveryEditorIntent::StartEdit { current } => match state {
                // Already editing: keep what the user typed
                editing @ DeliveryEditorState::Editing { .. } => editing,
                DeliveryEditorState::Viewing => DeliveryEditorState::Editing {
                    draft: current.to_string(),
                },
            },
            DeliveryEditorIntent::EditDraft { draft } => match state {
                DeliveryEditorState::Editing { .. } => DeliveryEditorState::Editing { draft },
                other => other,
            },
            DeliveryEditorIntent::Cancel | DeliveryEditorIntent::Submitted => {
                DeliveryEditorState::Viewing
            }
        }
    }
}
