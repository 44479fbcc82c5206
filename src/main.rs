mod cli;

use backup_exporter::config::Config;
use backup_exporter::status;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let mut config = Config::load_or_default_path(args.config)?;
            if let Some(address) = args.address {
                config.server.bind_addr = address;
            }
            backup_exporter::api::run(config).await?;
        }
        Commands::Check(args) => {
            let config = Config::load_or_default_path(args.config)?;
            match status::detect_status(&config.logs) {
                Ok((latest, status)) => {
                    println!("file:     {}", latest.path.display());
                    println!("modified: {}", latest.modified);
                    println!("status:   {}", status);
                }
                Err(e) => {
                    println!("error:    {}", e);
                    println!("status:   {}", status::BackupStatus::Unknown);
                }
            }
        }
    }

    Ok(())
}
