//! Base trait for screen intents.

/// Marker trait for intent objects.
///
/// An intent is a user action on a screen (reveal a card, pick an answer,
/// edit a draft) or a load result arriving from the API.
pub trait Intent: Send + 'static {}
