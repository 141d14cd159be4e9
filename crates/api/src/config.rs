//! Command-line interface and runtime configuration.

use clap::{Args, Parser, Subcommand};

use common::{DatabaseConfig, LogConfig, ServerConfig};

/// User API - CRUD service for user records
#[derive(Parser, Debug)]
#[command(name = "user-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub log: LogConfig,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "user-api",
            "serve",
            "--port",
            "8081",
            "--database-url",
            "mysql://u:p@db/users",
        ])
        .unwrap();

        let Commands::Serve(args) = cli.command;
        assert_eq!(args.server.port, 8081);
        assert_eq!(args.database.url, "mysql://u:p@db/users");
    }
}
