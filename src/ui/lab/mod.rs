//! Alint generation lab: style preset, language, catalyst keywords and vibe.

mod intent;
mod languages;
mod reducer;
mod screen;
mod state;

pub use intent::LabIntent;
pub use languages::{find_language, search_languages, Language, LANGUAGES};
pub use reducer::LabReducer;
pub use screen::LabScreen;
pub use state::{LabState, MAX_CATALYSTS};
