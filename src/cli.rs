use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "backup_exporter")]
#[command(about = "Exports the latest backup job outcome as Prometheus gauges", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the refresher and the /metrics HTTP endpoint
    Serve(ServeArgs),
    /// Evaluate the backup status once and print it
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Configuration file (defaults to $BACKUP_EXPORTER_CONFIG or config/backup_exporter.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override server.bind_addr
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Configuration file (defaults to $BACKUP_EXPORTER_CONFIG or config/backup_exporter.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::parse_from([
            "backup_exporter",
            "serve",
            "--config",
            "exporter.toml",
            "--address",
            "127.0.0.1:9182",
        ]);

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.config, Some(PathBuf::from("exporter.toml")));
                assert_eq!(args.address, Some("127.0.0.1:9182".parse().unwrap()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["backup_exporter", "check"]);
        assert!(matches!(cli.command, Commands::Check(CheckArgs { config: None })));
    }
}
