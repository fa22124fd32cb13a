//! Streak tracker and delivery-time editor, plus the partner's echoes.

mod delivery;
mod heatmap;
mod intent;
mod milestone;
mod reducer;
mod screen;
mod state;

pub use delivery::DeliveryTime;
pub use heatmap::{heatmap_grid, HeatLevel, HeatmapCell, DAYS_PER_WEEK, HEATMAP_WEEKS};
pub use intent::DeliveryEditorIntent;
pub use milestone::Milestone;
pub use reducer::DeliveryEditorReducer;
pub use screen::{StreakError, StreakScreen};
pub use state::DeliveryEditorState;
