use crate::ui::mvi::Intent;
use crate::ui::streak::delivery::DeliveryTime;

#[derive(Debug, Clone)]
pub enum DeliveryEditorIntent {
    /// Open the editor seeded with the currently displayed time.
    StartEdit { current: DeliveryTime },
    EditDraft { draft: String },
    /// Discard the draft.
    Cancel,
    /// Draft accepted and handed off for confirmation.
    Submitted,
}

impl Intent for DeliveryEditorIntent {}
