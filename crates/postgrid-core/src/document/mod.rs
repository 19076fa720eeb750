//! Document state and logic (UI-agnostic).

mod io;
mod stack;
mod state;

pub use state::Document;
