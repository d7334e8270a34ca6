use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{Connector, schema};
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the schema script next to the database, if missing
///  - the SQLite database and its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rCatalog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &cfg.database);

    let mut connector = Connector::from_config(&cfg);
    let script = connector.resolve_script(&cfg.schema_script);
    if schema::ensure_script(&script)? {
        info(format!("Schema script written to {}", script.display()));
    }

    connector.connect()?;
    connector.create_tables(&script)?;
    connector.close();

    println!("🎉 rCatalog initialization completed!");
    Ok(())
}
