use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::context::RitualContext;
use crate::optimistic::{ApplyHandle, ConfirmationOutcome, OptimisticController, Rejection};
use crate::remote::{Badge, RemoteError, RitualClient};
use crate::ui::mvi::Reducer;
use crate::ui::riddle::badges::next_badge;
use crate::ui::riddle::intent::QuizIntent;
use crate::ui::riddle::reducer::QuizReducer;
use crate::ui::riddle::state::QuizState;

const ERROR_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum RiddleError {
    #[error("No bond linked")]
    NoBond,

    #[error("No question is waiting for an answer")]
    NotAnswerable,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result of answering one question.
#[derive(Debug)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Badge earned by this answer and the handle of its unlock confirmation.
    pub unlocked: Option<(Badge, ApplyHandle)>,
}

/// A known badge and whether it is unlocked.
struct BadgeSlot {
    badge: Badge,
    unlocked: OptimisticController<bool>,
}

impl BadgeSlot {
    fn new(badge: Badge, unlocked: bool, errors: &broadcast::Sender<Rejection>) -> Self {
        let unlocked = OptimisticController::with_error_channel(
            format!("badge[{}]", badge.id),
            unlocked,
            errors.clone(),
        );
        Self { badge, unlocked }
    }
}

/// Quiz screen with optimistically unlocked badges.
///
/// Every badge has its own controller, so an unlock confirming late never
/// overwrites another badge's unlock. All of them report into one error
/// channel.
pub struct RiddleScreen {
    client: RitualClient,
    context: RitualContext,
    state: QuizState,
    slots: Vec<BadgeSlot>,
    errors: broadcast::Sender<Rejection>,
    celebrating: Option<Badge>,
}

impl RiddleScreen {
    pub fn new(client: RitualClient, context: RitualContext) -> Self {
        let (errors, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);
        Self {
            client,
            context,
            state: QuizState::default(),
            slots: Vec::new(),
            errors,
            celebrating: None,
        }
    }

    /// Load the quiz and the bond's unlocked badges.
    ///
    /// The quiz is required; a badge load failure is logged and leaves the
    /// set empty.
    pub async fn mount(&mut self) -> Result<(), RiddleError> {
        let bond_id = self.bond_id()?;

        let (quiz, badges) = tokio::join!(
            self.client.quiz(&bond_id),
            self.client.badges(&bond_id)
        );

        match badges {
            Ok(badges) => self.load_badges(badges),
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Failed to load badges");
            }
        }

        self.dispatch(QuizIntent::Loaded { quiz: quiz? });
        Ok(())
    }

    /// Answer the current question.
    ///
    /// A correct answer may earn a badge, which is shown immediately and
    /// confirmed remotely.
    pub fn select_answer(&mut self, answer: usize) -> Result<AnswerOutcome, RiddleError> {
        if self.state.current_question().is_none() || self.state.is_answered() {
            return Err(RiddleError::NotAnswerable);
        }
        let bond_id = self.bond_id()?;

        let before = self.state.score();
        self.dispatch(QuizIntent::Select { answer });
        let correct = self.state.score() > before;

        let mut unlocked = None;
        if correct {
            let displayed = self.badges();
            if let Some(badge) = next_badge(self.state.score(), self.state.total(), &displayed) {
                tracing::info!(badge = %badge.id, "Badge unlocked");
                self.celebrating = Some(badge.clone());

                let client = self.client.clone();
                let confirmed_badge = badge.clone();
                let slot = self.slot_for(&badge);
                let handle = slot.unlocked.apply(true, move || async move {
                    ConfirmationOutcome::from(client.unlock_badge(&bond_id, &confirmed_badge).await)
                });
                unlocked = Some((badge, handle));
            }
        }

        Ok(AnswerOutcome { correct, unlocked })
    }

    /// Move past an answered question.
    ///
    /// Finishing the quiz saves the result in the background; a failed save
    /// is only logged. Returns the save task when one was started.
    pub fn advance(&mut self) -> Option<JoinHandle<Result<(), RemoteError>>> {
        let was_complete = self.state.is_complete();
        self.dispatch(QuizIntent::Advance);
        if was_complete || !self.state.is_complete() {
            return None;
        }

        let (score, total) = (self.state.score(), self.state.total());
        let Some(bond_id) = self.context.bond_id() else {
            tracing::warn!(score, total, "Quiz finished without a bond, results not saved");
            return None;
        };

        let client = self.client.clone();
        Some(tokio::spawn(async move {
            let result = client.save_quiz_results(&bond_id, score, total).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, score, total, "Failed to save quiz results");
            }
            result
        }))
    }

    /// Start over with a freshly generated quiz.
    pub async fn reset(&mut self) -> Result<(), RiddleError> {
        self.dispatch(QuizIntent::Reset);
        self.celebrating = None;

        let bond_id = self.bond_id()?;
        let quiz = self.client.quiz(&bond_id).await?;
        self.dispatch(QuizIntent::Loaded { quiz });
        Ok(())
    }

    pub fn dismiss_celebration(&mut self) {
        self.celebrating = None;
    }

    /// The badge being celebrated, as long as its unlock still stands.
    pub fn celebrating(&self) -> Option<&Badge> {
        self.celebrating
            .as_ref()
            .filter(|badge| self.is_unlocked(&badge.id))
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Badges as currently displayed, including unconfirmed ones.
    pub fn badges(&self) -> Vec<Badge> {
        self.slots
            .iter()
            .filter(|slot| slot.unlocked.displayed())
            .map(|slot| slot.badge.clone())
            .collect()
    }

    /// Badges the remote side has acknowledged.
    pub fn confirmed_badges(&self) -> Vec<Badge> {
        self.slots
            .iter()
            .filter(|slot| slot.unlocked.confirmed())
            .map(|slot| slot.badge.clone())
            .collect()
    }

    pub fn is_unlocked(&self, badge_id: &str) -> bool {
        self.badge_controller(badge_id)
            .map(|c| c.displayed())
            .unwrap_or(false)
    }

    pub fn badge_controller(&self, badge_id: &str) -> Option<&OptimisticController<bool>> {
        self.slots
            .iter()
            .find(|slot| slot.badge.id == badge_id)
            .map(|slot| &slot.unlocked)
    }

    /// Rejections from every badge on this screen.
    pub fn subscribe_errors(&self) -> broadcast::Receiver<Rejection> {
        self.errors.subscribe()
    }

    /// Take the remote badge set as authoritative.
    fn load_badges(&mut self, badges: Vec<Badge>) {
        for slot in &self.slots {
            slot.unlocked
                .reset(badges.iter().any(|b| b.id == slot.badge.id));
        }
        for badge in badges {
            if self.badge_controller(&badge.id).is_none() {
                self.slots.push(BadgeSlot::new(badge, true, &self.errors));
            }
        }
    }

    fn slot_for(&mut self, badge: &Badge) -> &BadgeSlot {
        let index = match self.slots.iter().position(|slot| slot.badge.id == badge.id) {
            Some(index) => index,
            None => {
                self.slots
                    .push(BadgeSlot::new(badge.clone(), false, &self.errors));
                self.slots.len() - 1
            }
        };
        &self.slots[index]
    }

    fn dispatch(&mut self, intent: QuizIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = QuizReducer::reduce(state, intent);
    }

    fn bond_id(&self) -> Result<String, RiddleError> {
        self.context.bond_id().ok_or(RiddleError::NoBond)
    }
}
