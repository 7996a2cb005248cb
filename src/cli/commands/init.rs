use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes the default configuration (built-in sectors included) to the
/// configured path. An existing file is left alone: use `config --migrate`
/// to add new keys to it.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();

    info("Initializing punchsheet…");
    println!("📄 Config file : {}", path.display());

    if path.exists() {
        warning(format!(
            "Configuration already present at {} (run `config --migrate` to update it)",
            path.display()
        ));
        return Ok(());
    }

    Config::init_all(&path, cli.test)?;

    if cli.test {
        info("Test mode: configuration file not written.");
    } else {
        success(format!("Configuration written to {}", path.display()));
    }

    Ok(())
}
