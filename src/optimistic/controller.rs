use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use super::outcome::{ConfirmationOutcome, Rejection, Resolution};
use super::tracked::{Phase, TrackedValue};

/// Capacity of a controller's own rejection channel.
const REJECTION_CAPACITY: usize = 32;

/// What observers of a controller receive on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub value: TrackedValue<T>,
    /// Generation of the most recently started operation (0 before any).
    pub generation: u64,
}

/// Applies local changes immediately and reconciles them with a remote
/// confirmation.
///
/// Only the most recently started operation may commit or revert; outcomes
/// of older operations are discarded, so state always reflects the last
/// `apply` issued regardless of the order confirmations complete in.
pub struct OptimisticController<T> {
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    label: String,
    state: Mutex<ControllerState<T>>,
    snapshots: watch::Sender<Snapshot<T>>,
    rejections: broadcast::Sender<Rejection>,
}

struct ControllerState<T> {
    value: TrackedValue<T>,
    generation: u64,
}

impl<T> OptimisticController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a controller with its own rejection channel.
    pub fn new(label: impl Into<String>, initial: T) -> Self {
        let (rejections, _) = broadcast::channel(REJECTION_CAPACITY);
        Self::with_error_channel(label, initial, rejections)
    }

    /// Create a controller that reports rejections into a caller-owned channel.
    ///
    /// Screens with several controllers use this to surface all errors in one place.
    pub fn with_error_channel(
        label: impl Into<String>,
        initial: T,
        rejections: broadcast::Sender<Rejection>,
    ) -> Self {
        let value = TrackedValue::new(initial);
        let (snapshots, _) = watch::channel(Snapshot {
            value: value.clone(),
            generation: 0,
        });

        Self {
            shared: Arc::new(Shared {
                label: label.into(),
                state: Mutex::new(ControllerState {
                    value,
                    generation: 0,
                }),
                snapshots,
                rejections,
            }),
        }
    }

    /// Display `value` immediately and confirm it remotely.
    ///
    /// `confirm` is invoked exactly once; the future it returns runs as a
    /// spawned task, so this call never waits on the network. The returned
    /// handle may be awaited for the outcome or dropped.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn apply<C, Fut>(&self, value: T, confirm: C) -> ApplyHandle
    where
        C: FnOnce() -> Fut,
        Fut: Future<Output = ConfirmationOutcome> + Send + 'static,
    {
        let (generation, rollback) = {
            let mut state = self.shared.state.lock();
            state.generation += 1;
            let rollback = state.value.confirmed().clone();
            state.value.begin(value.clone());
            self.shared.publish(&state);
            (state.generation, rollback)
        };

        tracing::debug!(
            label = %self.shared.label,
            generation,
            "Optimistic value applied"
        );

        let confirmation = confirm();
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            let outcome = confirmation.await;
            shared.settle(generation, value, rollback, outcome)
        });

        ApplyHandle { generation, task }
    }

    /// Replace the confirmed value with authoritative remote state.
    ///
    /// Clears any pending value; operations still in flight are superseded.
    pub fn reset(&self, confirmed: T) {
        let mut state = self.shared.state.lock();
        state.generation += 1;
        state.value = TrackedValue::new(confirmed);
        self.shared.publish(&state);
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        let state = self.shared.state.lock();
        Snapshot {
            value: state.value.clone(),
            generation: state.generation,
        }
    }

    /// The value a view should render right now.
    pub fn displayed(&self) -> T {
        self.shared.state.lock().value.displayed().clone()
    }

    pub fn confirmed(&self) -> T {
        self.shared.state.lock().value.confirmed().clone()
    }

    pub fn pending(&self) -> Option<T> {
        self.shared.state.lock().value.pending().cloned()
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.lock().value.phase()
    }

    pub fn label(&self) -> &str {
        &self.shared.label
    }

    /// Observe every state change, starting from the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.shared.snapshots.subscribe()
    }

    /// Receive a `Rejection` for every operation that reverts from now on.
    pub fn subscribe_rejections(&self) -> broadcast::Receiver<Rejection> {
        self.shared.rejections.subscribe()
    }
}

impl<T: Clone> Shared<T> {
    fn publish(&self, state: &ControllerState<T>) {
        self.snapshots.send_replace(Snapshot {
            value: state.value.clone(),
            generation: state.generation,
        });
    }

    fn settle(
        &self,
        generation: u64,
        value: T,
        rollback: T,
        outcome: ConfirmationOutcome,
    ) -> Resolution {
        let mut state = self.state.lock();

        if state.generation != generation {
            tracing::debug!(
                label = %self.label,
                generation,
                latest = state.generation,
                "Discarding outcome of superseded operation"
            );
            return Resolution::Superseded;
        }

        match outcome {
            ConfirmationOutcome::Accepted => {
                state.value.commit(value);
                self.publish(&state);
                tracing::debug!(label = %self.label, generation, "Optimistic value confirmed");
                Resolution::Committed
            }
            ConfirmationOutcome::Rejected(reason) => {
                state.value.revert_to(rollback);
                self.publish(&state);
                drop(state);

                tracing::warn!(
                    label = %self.label,
                    generation,
                    reason = %reason,
                    "Optimistic value rejected, reverted"
                );
                // No subscribers is fine; the handle still carries the reason.
                let _ = self.rejections.send(Rejection {
                    label: self.label.clone(),
                    generation,
                    reason: reason.clone(),
                });
                Resolution::Reverted { reason }
            }
        }
    }
}

/// Handle to one `apply` call. Awaiting it yields the call's `Resolution`.
///
/// Dropping the handle detaches it; the confirmation still runs and settles.
#[derive(Debug)]
pub struct ApplyHandle {
    generation: u64,
    task: JoinHandle<Resolution>,
}

impl ApplyHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Future for ApplyHandle {
    type Output = Resolution;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| {
            joined.unwrap_or_else(|err| Resolution::Abandoned {
                reason: err.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepted_value_becomes_confirmed() {
        let controller = OptimisticController::new("test", 1u32);

        let handle = controller.apply(2, || async { ConfirmationOutcome::Accepted });
        assert_eq!(handle.generation(), 1);
        assert_eq!(handle.await, Resolution::Committed);

        assert_eq!(controller.confirmed(), 2);
        assert_eq!(controller.pending(), None);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn reset_supersedes_in_flight_operation() {
        let controller = OptimisticController::new("test", "a".to_string());
        let (tx, rx) = tokio::sync::oneshot::channel();

        let handle = controller.apply("b".to_string(), || async move {
            rx.await.unwrap_or_else(|_| ConfirmationOutcome::rejected("dropped"))
        });
        controller.reset("remote".to_string());
        tx.send(ConfirmationOutcome::Accepted).unwrap();

        assert!(handle.await.is_superseded());
        assert_eq!(controller.confirmed(), "remote");
        assert_eq!(controller.pending(), None);
    }

    #[tokio::test]
    async fn panicking_confirmation_is_abandoned() {
        let controller = OptimisticController::new("test", 0u8);

        let explode = true;
        let handle = controller.apply(1, move || async move {
            if explode {
                panic!("boom");
            }
            ConfirmationOutcome::Accepted
        });

        assert!(matches!(handle.await, Resolution::Abandoned { .. }));
        assert_eq!(controller.pending(), Some(1));
    }

    #[tokio::test]
    async fn subscribers_see_every_transition() {
        let controller = OptimisticController::new("test", false);
        let mut rx = controller.subscribe();
        assert_eq!(rx.borrow_and_update().generation, 0);

        let handle = controller.apply(true, || async { ConfirmationOutcome::Accepted });
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().value.pending(), Some(&true));

        handle.await;
        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert!(*snapshot.value.confirmed());
        assert_eq!(snapshot.value.phase(), Phase::Idle);
    }
}
