use crate::config::Config;
use crate::db::{Connector, books, schema};
use crate::errors::AppResult;
use crate::output;
use crate::utils::path::expand_tilde;

/// Handle the `demo` command: connect, create tables, insert the example
/// book once, print every book as a JSON object, close.
pub fn handle(cfg: &Config) -> AppResult<()> {
    Connector::session(expand_tilde(&cfg.database), |connector| {
        let script = connector.resolve_script(&cfg.schema_script);
        schema::ensure_script(&script)?;
        connector.create_tables(&script)?;

        books::insert_example(connector).into_result()?;

        for book in books::all_books(connector).into_result()? {
            println!("{}", output::row_json(&book)?);
        }
        Ok(())
    })
}
