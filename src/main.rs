use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devlife::app::AppContext;
use devlife::cli::{commands, Cli, Commands};
use devlife::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config);

    match cli.command {
        Commands::Show { section, count } => {
            commands::show(&ctx, section, count).await?;
        }
        Commands::Post { id } => {
            commands::post(&ctx, id).await?;
        }
        Commands::Random => {
            commands::random(&ctx).await?;
        }
        Commands::Browse => {
            commands::browse(&ctx).await?;
        }
    }

    Ok(())
}
