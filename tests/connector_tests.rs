use rcatalog::db::books::{self, EXAMPLE_BOOK, INSERT_BOOK};
use rcatalog::errors::AppError;
use rcatalog::{Connector, QueryOutcome};
use rusqlite::params;
use std::fs;

mod common;
use common::{LIVROS_SCRIPT, setup_catalog};

fn count_books(connector: &mut Connector) -> i64 {
    let rows = connector
        .execute_query("SELECT COUNT(*) AS n FROM livros", [])
        .into_result()
        .expect("count");
    rows[0].get("n").expect("n")
}

#[test]
fn connect_creates_the_file_and_can_be_repeated() {
    let (_dir, db) = setup_catalog();
    assert!(!db.exists());

    let mut connector = Connector::new(&db);
    assert!(connector.connect().is_ok());
    assert!(db.exists());
    connector.create_tables("create_tables.sql").unwrap();
    books::insert_example(&mut connector).into_result().unwrap();

    assert!(connector.connect().is_ok());
    assert!(connector.is_connected());
    assert_eq!(count_books(&mut connector), 1);

    connector.close();
    assert!(!connector.is_connected());
}

#[test]
fn reconnect_releases_the_previous_handle() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();
    books::insert_example(&mut connector).into_result().unwrap();

    // an uncommitted write holding an exclusive lock on the file
    assert!(!connector.execute_query("BEGIN EXCLUSIVE", []).is_failure());
    assert!(
        !books::insert_book(&mut connector, "Dune", "Frank Herbert", Some(1965)).is_failure()
    );

    connector.connect().unwrap();

    // the old handle is gone: its transaction rolled back and its lock released
    assert_eq!(count_books(&mut connector), 1);
    let other = rusqlite::Connection::open(&db).unwrap();
    other
        .execute(INSERT_BOOK, params!["Dune", "Frank Herbert", 1965])
        .unwrap();
    assert_eq!(count_books(&mut connector), 2);
}

#[test]
fn dropping_the_connector_releases_the_handle() {
    let (_dir, db) = setup_catalog();
    {
        let mut connector = Connector::new(&db);
        connector.connect().unwrap();
        connector.create_tables("create_tables.sql").unwrap();
        assert!(!connector.execute_query("BEGIN EXCLUSIVE", []).is_failure());
        assert!(!books::insert_example(&mut connector).is_failure());
    }

    let other = rusqlite::Connection::open(&db).unwrap();
    let n: i64 = other
        .query_row("SELECT COUNT(*) FROM livros", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 0);
    other
        .execute(INSERT_BOOK, params!["Dune", "Frank Herbert", 1965])
        .unwrap();
}

#[test]
fn query_without_connection_touches_nothing() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);

    let outcome = connector.execute_query("SELECT 1", []);
    assert!(matches!(outcome, QueryOutcome::Failed(AppError::NotConnected)));
    assert!(outcome.into_rows().is_empty());
    assert!(!db.exists());
}

#[test]
fn insert_then_select_round_trips_by_name() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();

    let inserted = connector.execute_query(INSERT_BOOK, params!["Dune", "Frank Herbert", 1965]);
    assert!(matches!(inserted, QueryOutcome::Empty));

    let rows = connector
        .execute_query("SELECT * FROM livros WHERE autor = ?", ["Frank Herbert"])
        .into_result()
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.columns(), ["id", "titulo", "autor", "ano_publicacao"]);
    assert_eq!(row.get::<_, String>("titulo").unwrap(), "Dune");
    assert_eq!(row.get::<_, String>("autor").unwrap(), "Frank Herbert");
    assert_eq!(row.get::<_, i64>("ano_publicacao").unwrap(), 1965);
    assert_eq!(row.get::<_, String>(1).unwrap(), "Dune");
}

#[test]
fn insert_or_ignore_keeps_a_single_row() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();

    assert!(!books::insert_example(&mut connector).is_failure());
    assert!(!books::insert_example(&mut connector).is_failure());

    assert_eq!(count_books(&mut connector), 1);
}

#[test]
fn malformed_sql_rolls_back_and_reports_failure() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();
    books::insert_example(&mut connector).into_result().unwrap();

    let outcome = connector.execute_query("INSERT INTO livros (titulo autor) VALUES", []);
    assert!(outcome.is_failure());
    assert!(matches!(outcome.error(), Some(AppError::Db(_))));
    assert!(outcome.into_rows().is_empty());

    // a failing bind leaves the table untouched as well
    let outcome = connector.execute_query(INSERT_BOOK, params!["only one bind"]);
    assert!(outcome.is_failure());

    assert_eq!(count_books(&mut connector), 1);
}

#[test]
fn multiple_statements_need_execute_script() {
    let mut connector = Connector::new(":memory:");
    connector.connect().unwrap();

    let outcome = connector.execute_query("CREATE TABLE a (x); CREATE TABLE b (y);", []);
    assert!(outcome.is_failure());

    let outcome = connector.execute_script("CREATE TABLE a (x); CREATE TABLE b (y);");
    assert!(matches!(outcome, QueryOutcome::Empty));
}

#[test]
fn failing_script_leaves_no_partial_schema() {
    let mut connector = Connector::new(":memory:");
    connector.connect().unwrap();

    let outcome = connector.execute_script("CREATE TABLE a (x); CREATE TABLE b (;");
    assert!(outcome.is_failure());

    let tables = connector
        .execute_query("SELECT name FROM sqlite_master WHERE type = 'table'", [])
        .into_result()
        .unwrap();
    assert!(tables.is_empty());
}

#[test]
fn missing_script_is_reported_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("library.db");
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();

    let err = connector.create_tables("create_tables.sql").unwrap_err();
    match err {
        AppError::ScriptNotFound(path) => assert_eq!(path, dir.path().join("create_tables.sql")),
        other => panic!("unexpected error: {other:?}"),
    }

    let tables = connector
        .execute_query("SELECT name FROM sqlite_master", [])
        .into_result()
        .unwrap();
    assert!(tables.is_empty());
}

#[test]
fn create_tables_without_connection_fails() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    assert!(matches!(
        connector.create_tables("create_tables.sql"),
        Err(AppError::NotConnected)
    ));
}

#[test]
fn example_scenario_persists_after_close() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("livros.sql"), LIVROS_SCRIPT).unwrap();
    let db = dir.path().join("catalog.db");

    let mut connector = Connector::new(&db);
    assert!(connector.connect().is_ok());
    connector.create_tables("livros.sql").unwrap();

    let (title, author, year) = EXAMPLE_BOOK;
    connector
        .execute_query(
            "INSERT OR IGNORE INTO livros (titulo, autor, ano_publicacao) VALUES (?, ?, ?)",
            params![title, author, year],
        )
        .into_result()
        .unwrap();

    let rows = connector
        .execute_query("SELECT * FROM livros", [])
        .into_result()
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<_, String>("titulo").unwrap(), title);
    assert_eq!(rows[0].get::<_, String>("autor").unwrap(), author);
    assert_eq!(rows[0].get::<_, i64>("ano_publicacao").unwrap(), year);
    connector.close();

    assert!(db.exists());
    let conn = rusqlite::Connection::open(&db).unwrap();
    let stored: (String, i64) = conn
        .query_row("SELECT autor, ano_publicacao FROM livros", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(stored, (author.to_string(), year));
}

#[test]
fn session_closes_and_propagates() {
    let (_dir, db) = setup_catalog();

    let n = Connector::session(&db, |c| {
        c.create_tables("create_tables.sql")?;
        books::insert_example(c).into_result()?;
        Ok(books::all_books(c).len())
    })
    .unwrap();
    assert_eq!(n, 1);

    let err = Connector::session(&db, |c| c.execute_query("SELEKT", []).into_result());
    assert!(matches!(err, Err(AppError::Db(_))));
}

#[test]
fn unopenable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut connector = Connector::new(dir.path().join("missing").join("library.db"));
    assert!(matches!(connector.connect(), Err(AppError::Db(_))));
    assert!(!connector.is_connected());
}

#[test]
fn vacuum_and_journal_mode_run_outside_a_transaction() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();

    assert!(matches!(
        connector.execute_query("VACUUM", []),
        QueryOutcome::Empty
    ));

    let rows = connector
        .execute_query("PRAGMA journal_mode=WAL", [])
        .into_result()
        .unwrap();
    assert_eq!(rows[0].get::<_, String>(0).unwrap(), "wal");
}

#[test]
fn caller_transaction_commits_or_rolls_back() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();

    assert!(!connector.execute_query("BEGIN", []).is_failure());
    books::insert_example(&mut connector).into_result().unwrap();
    assert!(!connector.execute_query("COMMIT", []).is_failure());
    assert_eq!(count_books(&mut connector), 1);

    assert!(!connector.execute_query("BEGIN", []).is_failure());
    books::insert_book(&mut connector, "Dune", "Frank Herbert", Some(1965))
        .into_result()
        .unwrap();
    assert!(connector.execute_query("SELEKT", []).is_failure());

    // the failed statement took the open transaction with it
    assert!(connector.execute_query("COMMIT", []).is_failure());
    assert_eq!(count_books(&mut connector), 1);
}

#[test]
fn shipped_schema_accepts_books_without_title_or_author() {
    let (_dir, db) = setup_catalog();
    let mut connector = Connector::new(&db);
    connector.connect().unwrap();
    connector.create_tables("create_tables.sql").unwrap();

    for _ in 0..2 {
        connector
            .execute_query(INSERT_BOOK, params![None::<String>, None::<String>, 1999])
            .into_result()
            .unwrap();
    }
    // NULL never equals NULL, so UNIQUE (titulo, autor) lets both through
    assert_eq!(count_books(&mut connector), 2);
}
