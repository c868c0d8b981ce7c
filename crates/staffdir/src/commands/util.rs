//! Shared helpers for command handlers.

use std::io::IsTerminal;

use staffdir_core::{EmployeeId, EmployeeStore};

use crate::error::CliError;

/// Parse a command-line employee id.
pub fn parse_id(raw: &str) -> Result<EmployeeId, CliError> {
    Ok(raw.parse::<EmployeeId>()?)
}

/// Index of `id` in the store's current list, or a not-found error.
pub fn position_of(store: &EmployeeStore, id: EmployeeId) -> Result<usize, CliError> {
    store.position_of(id).ok_or_else(|| CliError::NotFound {
        identifier: id.to_string(),
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to prompt on, `--yes` is mandatory.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
