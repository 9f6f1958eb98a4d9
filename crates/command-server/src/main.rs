//! Command server entry point.

use clap::Parser;
use tracing::debug;

use command_server::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env.local / .env before parsing so DATABASE_URL etc. apply
    let env_file = std::env::current_dir()
        .map_err(dotenvy::Error::Io)
        .and_then(|dir| command_server::load_env_files(&dir));

    let cli = Cli::parse();
    command_server::init_tracing(&cli);

    match env_file {
        Ok(Some(path)) => debug!(path = %path.display(), "Loaded environment file"),
        Ok(None) => {}
        Err(e) => debug!(error = %e, "Ignoring unreadable environment file"),
    }

    if let Err(e) = command_server::run(cli).await {
        tracing::error!(error = %e, "Server exited with an error");
        return Err(e);
    }

    Ok(())
}
