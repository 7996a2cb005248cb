pub mod analyze;
pub mod config;
pub mod export;
pub mod fix;
pub mod init;
pub mod sectors;

use crate::config::Config;
use crate::core::pipeline::{self, ReconciledTable};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Import and reconcile the file named on the command line.
pub(crate) fn load_table(
    file: &str,
    cfg: &Config,
    sector: &Option<String>,
) -> AppResult<ReconciledTable> {
    let path = expand_tilde(file);
    pipeline::import(&path, cfg, sector.as_deref())
}
