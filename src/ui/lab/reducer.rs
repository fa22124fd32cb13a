use crate::ui::lab::intent::LabIntent;
use crate::ui::lab::languages::find_language;
use crate::ui::lab::state::LabState;
use crate::ui::mvi::Reducer;

pub struct LabReducer;

impl Reducer for LabReducer {
    type State = LabState;
    type Intent = LabIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LabIntent::SelectStyle { style } => state.style = style,
            LabIntent::SelectLanguage { code } => {
                if find_language(&code).is_some() {
                    state.language = code;
                    state.language_search.clear();
                }
            }
            LabIntent::SearchLanguage { query } => state.language_search = query,
            LabIntent::EditKeyword { input } => state.keyword_input = input,
            LabIntent::AddKeyword => {
                if state.can_add_keyword() {
                    let keyword = state.keyword_input.trim().to_string();
                    state.catalysts.push(keyword);
                    state.keyword_input.clear();
                }
            }
            LabIntent::RemoveKeyword { index } => {
                if index < state.catalysts.len() {
                    state.catalysts.remove(index);
                }
            }
            LabIntent::EditVibe { vibe } => state.vibe = vibe,
            LabIntent::GenerationStarted => state.generating = true,
            LabIntent::GenerationFinished => state.generating = false,
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::StylePreset;

    fn run(intents: Vec<LabIntent>) -> LabState {
        intents
            .into_iter()
            .fold(LabState::default(), LabReducer::reduce)
    }

    fn add(keyword: &str) -> [LabIntent; 2] {
        [
            LabIntent::EditKeyword {
                input: keyword.to_string(),
            },
            LabIntent::AddKeyword,
        ]
    }

    #[test]
    fn defaults_to_deep_english() {
        let request = LabState::default().request();
        assert_eq!(request.style, StylePreset::Deep);
        assert_eq!(request.language, "en");
        assert!(request.catalysts.is_empty());
    }

    #[test]
    fn keywords_are_trimmed_and_capped() {
        let intents = ["  moon ", "", "salt", "ash", "rain", "iron", "smoke"]
            .into_iter()
            .flat_map(add)
            .collect();
        let state = run(intents);

        assert_eq!(state.catalysts, vec!["moon", "salt", "ash", "rain", "iron"]);
        // The sixth keyword stays in the input.
        assert_eq!(state.keyword_input, "smoke");
        assert!(!state.can_add_keyword());
    }

    #[test]
    fn keywords_remove_by_index() {
        let mut intents: Vec<LabIntent> = ["a", "b", "c"].into_iter().flat_map(add).collect();
        intents.push(LabIntent::RemoveKeyword { index: 1 });
        intents.push(LabIntent::RemoveKeyword { index: 9 });

        assert_eq!(run(intents).catalysts, vec!["a", "c"]);
    }

    #[test]
    fn unknown_language_is_ignored() {
        let state = run(vec![
            LabIntent::SearchLanguage {
                query: "lat".to_string(),
            },
            LabIntent::SelectLanguage {
                code: "tlh".to_string(),
            },
        ]);
        assert_eq!(state.language, "en");
        assert_eq!(state.filtered_languages().len(), 1);

        let state = LabReducer::reduce(
            state,
            LabIntent::SelectLanguage {
                code: "la".to_string(),
            },
        );
        assert_eq!(state.language, "la");
        assert!(state.language_search.is_empty());
    }
}
