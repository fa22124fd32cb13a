use std::collections::BTreeSet;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::context::RitualContext;
use crate::optimistic::{
    ApplyHandle, ConfirmationOutcome, OptimisticController, Phase, Rejection,
};
use crate::remote::{RemoteError, RitualClient};
use crate::ui::mvi::Reducer;
use crate::ui::reflection::intent::ReflectionIntent;
use crate::ui::reflection::reducer::ReflectionReducer;
use crate::ui::reflection::state::ReflectionState;

const ERROR_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum ReflectionError {
    #[error("No bond linked")]
    NoBond,

    #[error("Card {index} does not exist ({count} cards)")]
    NoSuchCard { index: usize, count: usize },

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Everything a view needs to draw one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub endearment: Option<String>,
    pub revealed: bool,
    pub reflected: bool,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub reflected: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.reflected as f64 / self.total as f64 * 100.0
    }
}

/// Reflection tracker screen.
///
/// Each card's "reflected" flag has its own controller, so toggling one card
/// never supersedes a pending toggle on another. All controllers report into
/// one error channel.
pub struct ReflectionScreen {
    client: RitualClient,
    context: RitualContext,
    state: ReflectionState,
    reflected: Vec<OptimisticController<bool>>,
    errors: broadcast::Sender<Rejection>,
}

impl ReflectionScreen {
    pub fn new(
        client: RitualClient,
        context: RitualContext,
        endearments: Vec<String>,
        card_count: usize,
    ) -> Self {
        let state = ReflectionReducer::reduce(
            ReflectionState::default(),
            ReflectionIntent::Load {
                endearments,
                card_count,
            },
        );
        let (errors, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);
        let reflected = (0..state.card_count)
            .map(|index| {
                OptimisticController::with_error_channel(
                    format!("reflection[{}]", index),
                    false,
                    errors.clone(),
                )
            })
            .collect();

        Self {
            client,
            context,
            state,
            reflected,
            errors,
        }
    }

    /// Load which cards the bond has already reflected on.
    ///
    /// On failure every card stays unreflected.
    pub async fn mount(&self) -> Result<(), ReflectionError> {
        let bond_id = self.bond_id()?;
        let indices: BTreeSet<usize> = self
            .client
            .reflected_indices(&bond_id)
            .await?
            .into_iter()
            .collect();

        if let Some(max) = indices.iter().next_back() {
            if *max >= self.reflected.len() {
                tracing::debug!(
                    index = *max,
                    cards = self.reflected.len(),
                    "Ignoring reflected indices beyond the card set"
                );
            }
        }

        for (index, controller) in self.reflected.iter().enumerate() {
            controller.reset(indices.contains(&index));
        }
        Ok(())
    }

    pub fn reveal(&mut self, index: usize) {
        let state = std::mem::take(&mut self.state);
        self.state = ReflectionReducer::reduce(state, ReflectionIntent::Reveal { index });
    }

    /// Flip a card's reflected flag and confirm it remotely.
    pub fn toggle(&self, index: usize) -> Result<ApplyHandle, ReflectionError> {
        let controller = self
            .reflected
            .get(index)
            .ok_or(ReflectionError::NoSuchCard {
                index,
                count: self.reflected.len(),
            })?;
        let bond_id = self.bond_id()?;

        let reflected = !controller.displayed();
        let client = self.client.clone();
        Ok(controller.apply(reflected, move || async move {
            ConfirmationOutcome::from(client.reflect(&bond_id, index, reflected).await)
        }))
    }

    pub fn is_reflected(&self, index: usize) -> bool {
        self.reflected
            .get(index)
            .map(|c| c.displayed())
            .unwrap_or(false)
    }

    pub fn cards(&self) -> Vec<CardView> {
        self.reflected
            .iter()
            .enumerate()
            .map(|(index, controller)| {
                let snapshot = controller.snapshot();
                CardView {
                    index,
                    endearment: self.state.endearment(index).map(str::to_string),
                    revealed: self.state.is_revealed(index),
                    reflected: *snapshot.value.displayed(),
                    in_flight: snapshot.value.phase() == Phase::InFlight,
                }
            })
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            reflected: self.reflected.iter().filter(|c| c.displayed()).count(),
            total: self.reflected.len(),
        }
    }

    pub fn state(&self) -> &ReflectionState {
        &self.state
    }

    pub fn controller(&self, index: usize) -> Option<&OptimisticController<bool>> {
        self.reflected.get(index)
    }

    /// Rejections from every card on this screen.
    pub fn subscribe_errors(&self) -> broadcast::Receiver<Rejection> {
        self.errors.subscribe()
    }

    fn bond_id(&self) -> Result<String, ReflectionError> {
        self.context.bond_id().ok_or(ReflectionError::NoBond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn screen(context: RitualContext) -> ReflectionScreen {
        let client = RitualClient::new(&ApiConfig::default()).unwrap();
        ReflectionScreen::new(client, context, Vec::new(), 19)
    }

    #[test]
    fn progress_percent_handles_empty() {
        let progress = Progress {
            reflected: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 0.0);
        let half = Progress {
            reflected: 2,
            total: 4,
        };
        assert_eq!(half.percent(), 50.0);
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let screen = screen(RitualContext::with_bond("b"));
        assert!(matches!(
            screen.toggle(19),
            Err(ReflectionError::NoSuchCard { index: 19, count: 19 })
        ));
    }

    #[test]
    fn toggle_without_bond_is_an_error() {
        let screen = screen(RitualContext::new());
        assert!(matches!(screen.toggle(0), Err(ReflectionError::NoBond)));
        assert!(!screen.is_reflected(0));
    }

    #[test]
    fn cards_reflect_reveal_state() {
        let mut screen = screen(RitualContext::new());
        screen.reveal(4);
        let cards = screen.cards();
        assert_eq!(cards.len(), 19);
        assert!(cards[4].revealed);
        assert!(!cards[4].reflected);
        assert_eq!(cards[4].endearment, None);
    }
}
