//! Client for the external ritual API.
//!
//! JSON over HTTP. Every mutating call is meant to be wrapped as the
//! `confirm` operation of an `OptimisticController`; `Result<(), RemoteError>`
//! converts straight into a `ConfirmationOutcome`.

mod client;
mod error;
mod types;

pub use client::{RitualClient, BOND_HEADER};
pub use error::RemoteError;
pub use types::{
    Alint, Badge, BondLink, GeneratedAlint, HeatmapEntry, LabRequest, LogEntry, ProfileForm,
    QuizData, Question, ResourceFootprint, StreakData, StylePreset,
};
