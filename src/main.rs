use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storetypes::cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(if cli.verbose {
                    "storetypes=debug"
                } else {
                    "storetypes=info"
                })
            }),
        )
        .init();

    let connection = cli::Connection {
        base_url: cli.base_url,
        username: cli.username,
        password: cli.password,
    };

    match cli.command {
        cli::Command::Types { all, desc, json } => {
            cli::types::run(cli.data_dir.as_ref(), connection, all, desc, json).await
        }
        cli::Command::Config(cmd) => cli::config::run(cli.data_dir.as_ref(), cmd),
    }
}
