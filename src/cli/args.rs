//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve [--port <port>]

use clap::{Parser, Subcommand};

/// Bookstore - server-rendered catalog and order views
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides WEB_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
