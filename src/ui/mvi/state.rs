/// Marker trait for UI state objects.
///
/// `Default` is the state a reset returns to; `PartialEq` lets tests and the
/// render loop compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
