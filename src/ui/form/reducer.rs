use crate::actions::initial_inputs;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormPhase, FormState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FocusNext => {
                let len = state.inputs.len();
                let focused = if state.focused + 1 >= len { 0 } else { state.focused + 1 };
                FormState { focused, ..state }
            }
            FormIntent::FocusPrev => {
                let focused = if state.focused == 0 {
                    state.inputs.len().saturating_sub(1)
                } else {
                    state.focused - 1
                };
                FormState { focused, ..state }
            }
            // Inputs are frozen while a request is outstanding.
            FormIntent::Edit(_) | FormIntent::Backspace | FormIntent::Cycle { .. }
                if state.is_submitting() =>
            {
                state
            }
            FormIntent::Edit(ch) => {
                let mut state = state;
                if let Some(input) = state.inputs.get_mut(state.focused) {
                    if input.id.widget().accepts(&input.value, ch) {
                        input.value.push(ch);
                    }
                }
                state
            }
            FormIntent::Backspace => {
                let mut state = state;
                if let Some(input) = state.inputs.get_mut(state.focused) {
                    input.value.pop();
                }
                state
            }
            FormIntent::Cycle { forward } => {
                let mut state = state;
                if let Some(input) = state.inputs.get_mut(state.focused) {
                    input.value = input.id.cycle(&input.value, forward);
                }
                state
            }
            FormIntent::Submit => match state.phase {
                FormPhase::Submitting => state,
                _ => FormState {
                    phase: FormPhase::Submitting,
                    ..state
                },
            },
            FormIntent::Rejected { message } => match state.phase {
                FormPhase::Submitting => state,
                _ => FormState {
                    phase: FormPhase::Failed(message),
                    ..state
                },
            },
            FormIntent::Succeeded { message } => match state.phase {
                FormPhase::Submitting => FormState {
                    inputs: initial_inputs(state.kind),
                    focused: 0,
                    phase: FormPhase::Succeeded(message),
                    kind: state.kind,
                },
                _ => state,
            },
            FormIntent::Failed { message } => match state.phase {
                FormPhase::Submitting => FormState {
                    phase: FormPhase::Failed(message),
                    ..state
                },
                _ => state,
            },
        }
    }
}
