//! CLI command implementations

use std::sync::Arc;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::store::MySqlStore;

/// Dispatch a parsed CLI to its command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { port } => serve(port),
    }
}

/// Run the web server.
///
/// 1. Load configuration from the environment
/// 2. Connect the MySQL pool
/// 3. Serve until interrupted
pub fn serve(port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::from_env().map_err(|e| CliError::config_error(e.to_string()))?;
    if let Some(port) = port {
        config.port = port;
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = MySqlStore::connect(&config.database_url)
            .await
            .map_err(|e| CliError::boot_failed(format!("Database connection failed: {}", e)))?;

        let server = HttpServer::new(config, Arc::new(store));
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
