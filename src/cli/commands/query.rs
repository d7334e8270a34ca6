use crate::cli::commands::print_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Connector, QueryOutcome};
use crate::errors::AppResult;
use crate::output::OutputFormat;
use crate::ui::messages::success;
use crate::utils::bind::parse_binds;
use rusqlite::params_from_iter;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Query {
        sql,
        params,
        format,
    } = cmd
    {
        let binds = parse_binds(params);

        let mut connector = Connector::from_config(cfg);
        connector.connect()?;
        let outcome = connector.execute_query(sql, params_from_iter(binds.iter()));
        connector.close();

        let format = format.unwrap_or(cfg.output_format);
        match outcome {
            QueryOutcome::Rows(rows) => print_rows(&rows, format)?,
            QueryOutcome::Empty if format == OutputFormat::Table => {
                success("Statement executed, no rows returned.")
            }
            QueryOutcome::Empty => print_rows(&[], format)?,
            QueryOutcome::Failed(e) => return Err(e),
        }
    }
    Ok(())
}
