//! Model-View-Intent (MVI) primitives for the ritual screens.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers only cover transitions that never leave the process (card
//! reveals, quiz progress, the delivery-time editor). Anything the remote
//! side must confirm goes through an `OptimisticController` instead.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
