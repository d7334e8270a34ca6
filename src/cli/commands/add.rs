use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Connector, books};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        author,
        year,
    } = cmd
    {
        let mut connector = Connector::from_config(cfg);
        connector.connect()?;

        books::insert_book(&mut connector, title, author, *year).into_result()?;
        let changed = connector.with_conn(|conn| Ok(conn.changes()))?;

        if changed > 0 {
            success(format!("Added \"{title}\" by {author}."));
        } else {
            warning(format!("\"{title}\" by {author} is already in the catalog."));
        }

        connector.close();
    }
    Ok(())
}
