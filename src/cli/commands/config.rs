use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config_path();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK ----
        if *check {
            let missing = migrate::missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("{} missing field(s):", missing.len()));
                for key in &missing {
                    println!("  - {key}");
                }
            }
        }

        // ---- MIGRATE ----
        if *run_migrate {
            let added = migrate::migrate_file(&path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                for key in &added {
                    println!("  + {key}");
                }
                success(format!("Added {} field(s) to {}", added.len(), path.display()));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<String>) {
    // Default editor basato sulla piattaforma
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                )),
                _ => error(format!(
                    "Failed to edit configuration file using fallback '{default_editor}'"
                )),
            }
        }
        _ => error(format!(
            "Failed to edit configuration file using '{editor_to_use}'"
        )),
    }
}
