//! Command-line interface definition using clap.

use clap::Parser;

/// Command server - REST API over the commands table
#[derive(Parser, Debug)]
#[command(name = "command-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "COMMANDS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "COMMANDS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://commands.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "COMMANDS_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Allowed CORS origins, comma separated (`*` for any)
    #[arg(long, env = "COMMANDS_CORS_ORIGINS", default_value = "*", value_delimiter = ',')]
    pub cors_origin: Vec<String>,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the tracing filter directive for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug,sqlx=info",
            2 => "debug",
            _ => "trace",
        }
    }
}
