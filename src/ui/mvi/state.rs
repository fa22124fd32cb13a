/// Marker trait for screen state.
///
/// States are plain values: cloned to produce the next state, compared to
/// detect changes, and defaulted before anything has loaded.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
