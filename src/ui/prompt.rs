//! Interactive picker

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

use crate::error::{ConsoleError, Result};

/// Let the user pick one of `items`; returns its index
pub fn select_one(prompt: &str, items: &[String]) -> Result<usize> {
    if items.is_empty() {
        return Err(ConsoleError::NotFound(format!(
            "Nothing to choose from for '{}'",
            prompt
        )));
    }

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;

    debug!("User selected '{}'", items[index]);
    Ok(index)
}
