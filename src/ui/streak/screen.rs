use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::context::RitualContext;
use crate::optimistic::{ApplyHandle, ConfirmationOutcome, OptimisticController, Rejection};
use crate::remote::{Alint, RemoteError, RitualClient, StreakData};
use crate::ui::mvi::Reducer;
use crate::ui::streak::delivery::DeliveryTime;
use crate::ui::streak::heatmap::{heatmap_grid, HeatmapCell};
use crate::ui::streak::intent::DeliveryEditorIntent;
use crate::ui::streak::milestone::Milestone;
use crate::ui::streak::reducer::DeliveryEditorReducer;
use crate::ui::streak::state::DeliveryEditorState;

#[derive(Debug, Error)]
pub enum StreakError {
    #[error("No bond linked")]
    NoBond,

    #[error("Delivery time editor is not open")]
    NotEditing,

    #[error("'{input}' is not a valid HH:MM time")]
    InvalidTime { input: String },

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Streak screen: counters, heatmap, partner echoes and the delivery-time editor.
pub struct StreakScreen {
    client: RitualClient,
    context: RitualContext,
    streak: StreakData,
    partner_alints: Vec<Alint>,
    delivery_time: OptimisticController<DeliveryTime>,
    editor: DeliveryEditorState,
}

impl StreakScreen {
    pub fn new(client: RitualClient, context: RitualContext, default_time: DeliveryTime) -> Self {
        Self {
            client,
            context,
            streak: StreakData::default(),
            partner_alints: Vec::new(),
            delivery_time: OptimisticController::new("delivery_time", default_time),
            editor: DeliveryEditorState::default(),
        }
    }

    /// Load streak data and partner echoes.
    ///
    /// Each load is independent; a failure is logged and leaves that part at
    /// its defaults. Only a missing bond is an error.
    pub async fn mount(&mut self) -> Result<(), StreakError> {
        let bond_id = self.bond_id()?;

        let (streak, echoes) = tokio::join!(
            self.client.streak(&bond_id),
            self.client.partner_echoes(&bond_id)
        );

        match streak {
            Ok(data) => {
                match data.delivery_time.as_deref().map(DeliveryTime::parse) {
                    Some(Some(time)) => self.delivery_time.reset(time),
                    Some(None) => tracing::warn!(
                        delivery_time = ?data.delivery_time,
                        "Ignoring unparseable delivery time from streak data"
                    ),
                    None => {}
                }
                self.streak = data;
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Failed to load streak data");
            }
        }

        match echoes {
            Ok(alints) => self.partner_alints = alints,
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Failed to load partner echoes");
            }
        }

        Ok(())
    }

    pub fn start_edit(&mut self) {
        let current = self.delivery_time.displayed();
        self.dispatch(DeliveryEditorIntent::StartEdit { current });
    }

    pub fn edit_draft(&mut self, draft: impl Into<String>) {
        self.dispatch(DeliveryEditorIntent::EditDraft {
            draft: draft.into(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(DeliveryEditorIntent::Cancel);
    }

    /// Validate the draft, close the editor and confirm the new time remotely.
    ///
    /// An invalid draft leaves the editor open.
    pub fn save_delivery_time(&mut self) -> Result<ApplyHandle, StreakError> {
        let draft = self.editor.draft().ok_or(StreakError::NotEditing)?;
        let time = DeliveryTime::parse(draft).ok_or_else(|| StreakError::InvalidTime {
            input: draft.to_string(),
        })?;
        let bond_id = self.bond_id()?;

        self.dispatch(DeliveryEditorIntent::Submitted);

        let client = self.client.clone();
        Ok(self.delivery_time.apply(time, move || async move {
            ConfirmationOutcome::from(
                client
                    .set_delivery_time(&bond_id, &time.to_string())
                    .await,
            )
        }))
    }

    pub fn delivery_time(&self) -> DeliveryTime {
        self.delivery_time.displayed()
    }

    pub fn delivery_controller(&self) -> &OptimisticController<DeliveryTime> {
        &self.delivery_time
    }

    pub fn editor(&self) -> &DeliveryEditorState {
        &self.editor
    }

    /// Streak data as loaded, with the delivery time the remote side last confirmed.
    pub fn streak(&self) -> StreakData {
        StreakData {
            delivery_time: Some(self.delivery_time.confirmed().to_string()),
            ..self.streak.clone()
        }
    }

    pub fn milestone(&self) -> Milestone {
        Milestone::for_count(self.streak.count)
    }

    pub fn heatmap(&self, today: NaiveDate) -> Vec<Vec<HeatmapCell>> {
        heatmap_grid(today, &self.streak.heatmap_data)
    }

    pub fn partner_alints(&self) -> &[Alint] {
        &self.partner_alints
    }

    pub fn subscribe_errors(&self) -> broadcast::Receiver<Rejection> {
        self.delivery_time.subscribe_rejections()
    }

    fn dispatch(&mut self, intent: DeliveryEditorIntent) {
        let state = std::mem::take(&mut self.editor);
        self.editor = DeliveryEditorReducer::reduce(state, intent);
    }

    fn bond_id(&self) -> Result<String, StreakError> {
        self.context.bond_id().ok_or(StreakError::NoBond)
    }
}
