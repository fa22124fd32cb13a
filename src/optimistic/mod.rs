//! Optimistic updates with remote confirmation.
//!
//! A UI event hands the controller a new value and a `confirm` operation.
//! The value is displayed at once; the confirmation runs as its own task
//! and, when it resolves, either commits the value or reverts to the last
//! confirmed one.
//!
//! ```text
//!            apply                    Accepted
//!   Idle ────────────► InFlight ─────────────────► Idle (confirmed = new)
//!                      │    ▲  │     Rejected
//!                 apply│    │  └─────────────────► Idle (confirmed kept)
//!                      └────┘
//!            (older operation becomes Superseded; its outcome is ignored)
//! ```

mod controller;
mod outcome;
mod tracked;

pub use controller::{ApplyHandle, OptimisticController, Snapshot};
pub use outcome::{ConfirmationOutcome, Rejection, Resolution};
pub use tracked::{Phase, TrackedValue};
