// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Check that the export target may be written.
///
/// - missing file, or `force` → Ok
/// - existing file on an interactive terminal → ask
/// - existing file otherwise → refuse
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(
            "existing file not overwritten (use --force)".to_string(),
        ));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}
