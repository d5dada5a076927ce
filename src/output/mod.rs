//! Output formatting module
//!
//! Renders the current selection and entity lists as plain text, JSON or YAML.
//! Renderers return the text; command handlers decide where it is written.

mod common;
mod entities;
mod selection;

pub use common::{to_json, to_yaml};
pub use entities::{render_list, ListRow};
pub use selection::render_selection;
