//! Statements for the `livros` table, run as plain SQL through the connector.

use crate::db::connector::Connector;
use crate::db::outcome::QueryOutcome;
use rusqlite::params;

pub const INSERT_BOOK: &str =
    "INSERT OR IGNORE INTO livros (titulo, autor, ano_publicacao) VALUES (?, ?, ?)";
pub const SELECT_BOOKS: &str = "SELECT * FROM livros ORDER BY id";

pub const EXAMPLE_BOOK: (&str, &str, i64) = (
    "The Hitchhiker's Guide to the Galaxy",
    "Douglas Adams",
    1979,
);

/// Insert a book; a duplicate `(titulo, autor)` pair is silently ignored.
pub fn insert_book(
    connector: &mut Connector,
    title: &str,
    author: &str,
    year: Option<i64>,
) -> QueryOutcome {
    connector.execute_query(INSERT_BOOK, params![title, author, year])
}

pub fn insert_example(connector: &mut Connector) -> QueryOutcome {
    let (title, author, year) = EXAMPLE_BOOK;
    insert_book(connector, title, author, Some(year))
}

pub fn all_books(connector: &mut Connector) -> QueryOutcome {
    connector.execute_query(SELECT_BOOKS, [])
}
