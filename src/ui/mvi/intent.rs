/// Marker trait for intent objects.
///
/// Intents are either user edits (typing, reset) or the already computed
/// result of a side effect, such as a finished roll. Reducers never perform
/// side effects themselves.
pub trait Intent: Send + 'static {}
