mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_removal_dialog;
pub use intent::RemovalIntent;
pub use reducer::RemovalReducer;
pub use state::{RemovalNotice, RemovalState};
