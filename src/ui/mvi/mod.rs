//! Model-View-Intent primitives for the form and removal components.
//!
//! ```text
//! key / bridge event ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                  │
//!        └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. Requests are sent by [`App`](crate::ui::app::App)
//! after a reducer has moved a component into its busy state, and the outcome
//! comes back as another intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
