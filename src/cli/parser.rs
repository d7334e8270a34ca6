use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCatalog
/// CLI application to keep a small book catalog in SQLite
#[derive(Parser)]
#[command(
    name = "rcatalog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small book catalog CLI on top of a local SQLite database",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the schema script and the database
    Init,

    /// Run the walkthrough: create tables, insert an example book, list books
    Demo,

    /// Add a book (duplicates of title + author are ignored)
    Add {
        #[arg(long, help = "Book title")]
        title: String,

        #[arg(long, help = "Book author")]
        author: String,

        #[arg(long, help = "Publication year")]
        year: Option<i64>,
    },

    /// List every book in the catalog
    List {
        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,
    },

    /// Run an arbitrary SQL statement with positional bind values
    Query {
        /// SQL text, use `?` for placeholders
        sql: String,

        #[arg(
            long = "param",
            short = 'p',
            value_name = "VALUE",
            allow_hyphen_values = true,
            help = "Bind value for the next `?` (NULL, numbers, text; quote to force text)"
        )]
        params: Vec<String>,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,
    },

    /// Manage the database file (integrity checks, info, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },
}
