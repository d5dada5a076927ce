//! Selection state machine
//!
//! Owns the persisted Org → Project → Workspace selection. A level can only be
//! selected when its parents are, and clearing a level clears everything below
//! it.

mod machine;
mod models;

pub use machine::SelectionMachine;
pub use models::{Level, Selection, SelectionView};
