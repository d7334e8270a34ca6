pub mod books;
pub mod connector;
pub mod outcome;
pub mod row;
pub mod schema;
pub mod stats;

pub use connector::{Connector, DEFAULT_DB_NAME, DEFAULT_SCRIPT_NAME};
pub use outcome::QueryOutcome;
pub use row::{Row, RowIndex};
