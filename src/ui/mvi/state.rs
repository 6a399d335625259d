/// Marker for component state. `Default` is the state a component starts in
/// and lets the app take it out for a reducer call.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
