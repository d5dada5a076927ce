//! `where` and `clear`: local commands that never touch the network

use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::render_selection;
use crate::selection::{Level, SelectionMachine};
use crate::store::ConfigStore;

use super::emit;

pub fn run_where_command<S: ConfigStore>(
    machine: &SelectionMachine<S>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let current = machine.current()?;
    emit(out, &render_selection(&current, format)?)
}

pub fn run_clear_command<S: ConfigStore>(
    machine: &mut SelectionMachine<S>,
    level: Option<Level>,
    out: &mut impl Write,
) -> Result<()> {
    match level {
        Some(level) => {
            machine.clear(level)?;
            emit(out, &format!("{} selection cleared", level.label()))
        }
        None => {
            machine.clear_all()?;
            emit(out, "Console selection cleared")
        }
    }
}
