use crate::cli::commands::load_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        out,
        format,
        sector,
        range,
        force,
    } = cmd
    {
        let table = load_table(file, cfg, sector)?;

        if table.skipped_rows > 0 {
            warning(format!("{} row(s) skipped while reading {file}", table.skipped_rows));
        }

        ExportLogic::export(&table.records, format, out, range, *force)?;
    }
    Ok(())
}
