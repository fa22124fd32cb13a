use std::collections::BTreeMap;

use crate::context::{RitualContext, RitualResult};
use crate::remote::{RemoteError, RitualClient};
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::{ProfileField, ProfileIntent};
use crate::ui::profile::reducer::ProfileReducer;
use crate::ui::profile::state::ProfileState;

/// Category the ritual's chemistry reading is saved under.
pub const CHEMISTRY_CATEGORY: &str = "chemistry";

/// Profile editor.
///
/// Submitting runs the ritual with the form and the muse context, then saves
/// the reading into the shared context, hidden until revealed.
pub struct ProfileScreen {
    client: RitualClient,
    context: RitualContext,
    state: ProfileState,
    muse_context: Option<serde_json::Value>,
}

impl ProfileScreen {
    pub fn new(client: RitualClient, context: RitualContext) -> Self {
        Self {
            client,
            context,
            state: ProfileState::default(),
            muse_context: None,
        }
    }

    /// Load the muse context. On failure the ritual is sent without one.
    pub async fn mount(&mut self) {
        self.muse_context = match self.client.muse_context().await {
            Ok(serde_json::Value::Null) => None,
            Ok(context) => Some(context),
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Failed to load muse context");
                None
            }
        };
    }

    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) {
        self.dispatch(ProfileIntent::Edit {
            field,
            value: value.into(),
        });
    }

    /// Run the ritual and store the chemistry reading. Returns the reading,
    /// empty when the API sent none.
    pub async fn submit(&mut self) -> Result<String, RemoteError> {
        self.dispatch(ProfileIntent::Submitting);

        let result = self
            .client
            .submit_ritual(&self.state.form, self.muse_context.as_ref())
            .await;

        match result {
            Ok(reading) => {
                let chemistry = reading.unwrap_or_default();
                self.context
                    .save_category(CHEMISTRY_CATEGORY, chemistry.clone());
                tracing::info!(has_reading = !chemistry.is_empty(), "Ritual completed");
                self.dispatch(ProfileIntent::Succeeded {
                    chemistry: chemistry.clone(),
                });
                Ok(chemistry)
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Ritual failed");
                self.dispatch(ProfileIntent::Failed {
                    message: err.reason(),
                });
                Err(err)
            }
        }
    }

    /// Reveal a saved reading and return it. `None` if nothing is saved for `category`.
    pub fn reveal(&self, category: &str) -> Option<RitualResult> {
        if self.context.reveal_category(category) {
            self.context.ritual_result(category)
        } else {
            None
        }
    }

    pub fn results(&self) -> BTreeMap<String, RitualResult> {
        self.context.ritual_results()
    }

    /// Note for the night before the next delivery; blank clears it.
    pub fn set_night_before(&self, note: &str) {
        let note = note.trim();
        self.context
            .set_night_before((!note.is_empty()).then(|| note.to_string()));
    }

    pub fn night_before(&self) -> Option<String> {
        self.context.night_before()
    }

    pub fn muse_context(&self) -> Option<&serde_json::Value> {
        self.muse_context.as_ref()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    fn dispatch(&mut self, intent: ProfileIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ProfileReducer::reduce(state, intent);
    }
}
