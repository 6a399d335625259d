use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Append a typed character to the focused field, if its widget allows it.
    Edit(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Step the focused choice field.
    Cycle { forward: bool },
    /// Validation passed and the request is about to be sent.
    Submit,
    /// Validation failed; nothing was sent.
    Rejected { message: String },
    Succeeded { message: String },
    Failed { message: String },
}

impl Intent for FormIntent {}
