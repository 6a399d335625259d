use crate::actions::{initial_inputs, FieldId, FieldInput, FormKind};
use crate::ui::mvi::UiState;

/// Submission lifecycle of one form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub inputs: Vec<FieldInput>,
    pub focused: usize,
    pub phase: FormPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormKind::Booking)
    }
}

impl UiState for FormState {}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            inputs: initial_inputs(kind),
            focused: 0,
            phase: FormPhase::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.inputs.get(self.focused).map(|input| input.id)
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.inputs
            .iter()
            .find(|input| input.id == id)
            .map(|input| input.value.as_str())
            .unwrap_or("")
    }

    /// Inline message and whether it reports an error.
    pub fn message(&self) -> Option<(&str, bool)> {
        match &self.phase {
            FormPhase::Succeeded(message) => Some((message, false)),
            FormPhase::Failed(message) => Some((message, true)),
            FormPhase::Idle | FormPhase::Submitting => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            self.kind.busy_label()
        } else {
            self.kind.submit_label()
        }
    }
}
