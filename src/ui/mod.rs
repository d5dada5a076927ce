//! UI utilities for terminal output
//!
//! Progress spinners and the interactive picker. Both are skipped in batch mode.

mod prompt;
mod spinner;

pub use prompt::select_one;
pub use spinner::{create_spinner, finish_spinner};
