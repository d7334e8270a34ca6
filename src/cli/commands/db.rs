use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Connector, stats};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut connector = Connector::from_config(cfg);
        connector.connect()?;

        //
        // 1) INFO (also the default when no flag is given)
        //
        if *info || !(*check || *vacuum) {
            stats::print_db_info(&mut connector)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = connector
                .with_conn(|conn| conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0)))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            connector.execute_query("VACUUM", []).into_result()?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        connector.close();
    }

    Ok(())
}
