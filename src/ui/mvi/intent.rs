/// Marker for inputs a reducer understands: key edits, submissions, and
/// request outcomes delivered by the bridge.
pub trait Intent: Send + 'static {}
