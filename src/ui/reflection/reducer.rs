use crate::ui::mvi::Reducer;
use crate::ui::reflection::intent::ReflectionIntent;
use crate::ui::reflection::state::ReflectionState;

pub struct ReflectionReducer;

impl Reducer for ReflectionReducer {
    type State = ReflectionState;
    type Intent = ReflectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReflectionIntent::Load {
                endearments,
                card_count,
            } => {
                let card_count = if endearments.is_empty() {
                    card_count
                } else {
                    endearments.len()
                };
                ReflectionState {
                    endearments,
                    card_count,
                    revealed: Default::default(),
                }
            }
            ReflectionIntent::Reveal { index } => {
                if index >= state.card_count {
                    return state;
                }
                let mut state = state;
                state.revealed.insert(index);
                state
            }
        }
    }
}
