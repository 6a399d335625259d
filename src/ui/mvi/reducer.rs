use super::intent::Intent;
use super::state::UiState;

/// The only place a component's state changes.
///
/// `reduce` is pure: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
