//! Profile form that runs the ritual and stores its chemistry reading.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::{ProfileField, ProfileIntent};
pub use reducer::ProfileReducer;
pub use screen::{ProfileScreen, CHEMISTRY_CATEGORY};
pub use state::{ProfileState, SubmitPhase};
