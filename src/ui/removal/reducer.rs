use crate::ui::mvi::Reducer;
use crate::ui::removal::intent::RemovalIntent;
use crate::ui::removal::state::{RemovalNotice, RemovalState};

pub struct RemovalReducer;

impl Reducer for RemovalReducer {
    type State = RemovalState;
    type Intent = RemovalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RemovalIntent::Request { bus_id } => {
                if state.is_removing(bus_id) || state.is_confirming() {
                    return state;
                }
                RemovalState {
                    confirming: Some(bus_id),
                    ..state
                }
            }
            RemovalIntent::Confirm => {
                let mut state = state;
                if let Some(bus_id) = state.confirming.take() {
                    state.in_flight.insert(bus_id);
                    state.notice = None;
                }
                state
            }
            RemovalIntent::Decline => RemovalState {
                confirming: None,
                ..state
            },
            RemovalIntent::Settled { bus_id, outcome } => {
                let mut state = state;
                if !state.in_flight.remove(&bus_id) {
                    return state;
                }
                state.notice = Some(match outcome {
                    Ok(message) => RemovalNotice::Removed(message),
                    Err(message) => RemovalNotice::Failed(message),
                });
                state
            }
        }
    }
}
