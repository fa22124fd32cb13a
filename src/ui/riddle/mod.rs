//! Quiz about the bond, with badges unlocked by score.

mod badges;
mod intent;
mod reducer;
mod screen;
mod state;

pub use badges::{next_badge, BadgeRule, BADGE_RULES};
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use screen::{AnswerOutcome, RiddleError, RiddleScreen};
pub use state::QuizState;
