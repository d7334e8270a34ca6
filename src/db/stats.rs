use crate::db::connector::Connector;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub name: String,
    pub rows: i64,
}

/// User tables (no `sqlite_` internals) with their row counts.
pub fn table_stats(conn: &Connection) -> rusqlite::Result<Vec<TableStats>> {
    let names: Vec<String> = {
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<_>>()?;
        names
    };

    names
        .into_iter()
        .map(|name| {
            let sql = format!("SELECT COUNT(*) FROM \"{}\"", name.replace('"', "\"\""));
            let rows = conn.query_row(&sql, [], |row| row.get(0))?;
            Ok(TableStats { name, rows })
        })
        .collect()
}

pub fn print_db_info(connector: &mut Connector) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = connector.path().to_path_buf();
    let file_size = fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TABLES
    //
    let stats = connector.with_conn(|conn| table_stats(conn))?;

    println!("{}• Tables:{}", CYAN, RESET);
    if stats.is_empty() {
        println!("    {GREY}--{RESET}");
    }
    for t in &stats {
        println!("    {:<20} {}{}{} rows", t.name, GREEN, t.rows, RESET);
    }

    println!();
    Ok(())
}
