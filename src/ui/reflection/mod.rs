//! Reflection tracker: one card per endearment, each marked "reflected"
//! optimistically and confirmed by the API.

mod intent;
mod reducer;
mod screen;
mod state;

pub use intent::ReflectionIntent;
pub use reducer::ReflectionReducer;
pub use screen::{CardView, Progress, ReflectionError, ReflectionScreen};
pub use state::ReflectionState;
