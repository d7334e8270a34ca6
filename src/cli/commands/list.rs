use crate::cli::commands::print_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Connector, books};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { format } = cmd {
        let mut connector = Connector::from_config(cfg);
        connector.connect()?;
        let rows = books::all_books(&mut connector).into_result()?;
        connector.close();

        print_rows(&rows, format.unwrap_or(cfg.output_format))?;
    }
    Ok(())
}
