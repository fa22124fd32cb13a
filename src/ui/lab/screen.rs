use crate::remote::{GeneratedAlint, RemoteError, RitualClient, StylePreset};
use crate::ui::lab::intent::LabIntent;
use crate::ui::lab::reducer::LabReducer;
use crate::ui::lab::state::LabState;
use crate::ui::mvi::Reducer;

/// Generation panel. Not optimistic: the alint appears once the API returns it.
pub struct LabScreen {
    client: RitualClient,
    state: LabState,
    last: Option<GeneratedAlint>,
}

impl LabScreen {
    pub fn new(client: RitualClient) -> Self {
        Self {
            client,
            state: LabState::default(),
            last: None,
        }
    }

    pub fn select_style(&mut self, style: StylePreset) {
        self.dispatch(LabIntent::SelectStyle { style });
    }

    pub fn select_language(&mut self, code: impl Into<String>) {
        self.dispatch(LabIntent::SelectLanguage { code: code.into() });
    }

    pub fn search_language(&mut self, query: impl Into<String>) {
        self.dispatch(LabIntent::SearchLanguage {
            query: query.into(),
        });
    }

    pub fn edit_keyword(&mut self, input: impl Into<String>) {
        self.dispatch(LabIntent::EditKeyword {
            input: input.into(),
        });
    }

    /// Add the typed keyword. Returns false when it was blank or the list is full.
    pub fn add_keyword(&mut self) -> bool {
        let added = self.state.can_add_keyword();
        self.dispatch(LabIntent::AddKeyword);
        added
    }

    pub fn remove_keyword(&mut self, index: usize) {
        self.dispatch(LabIntent::RemoveKeyword { index });
    }

    pub fn edit_vibe(&mut self, vibe: impl Into<String>) {
        self.dispatch(LabIntent::EditVibe { vibe: vibe.into() });
    }

    /// Send the current settings to the generator.
    pub async fn generate(&mut self) -> Result<GeneratedAlint, RemoteError> {
        let request = self.state.request();
        tracing::info!(
            style = request.style.id(),
            language = %request.language,
            catalysts = request.catalysts.len(),
            "Generating alint"
        );

        self.dispatch(LabIntent::GenerationStarted);
        let result = self.client.generate_alint(&request).await;
        self.dispatch(LabIntent::GenerationFinished);

        match &result {
            Ok(alint) => self.last = Some(alint.clone()),
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Alint generation failed");
            }
        }
        result
    }

    pub fn state(&self) -> &LabState {
        &self.state
    }

    /// Most recent successful generation.
    pub fn last_generated(&self) -> Option<&GeneratedAlint> {
        self.last.as_ref()
    }

    fn dispatch(&mut self, intent: LabIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = LabReducer::reduce(state, intent);
    }
}
