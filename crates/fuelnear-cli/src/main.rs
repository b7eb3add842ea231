mod nearest;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fuelnear_core::FuelProduct;

#[derive(Debug, Parser)]
#[command(name = "fuelnear")]
#[command(about = "Rank fuel stations by distance from a location")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the nearest stations to a location.
    Nearest(nearest::NearestArgs),
    /// List the supported fuel products and their feed columns.
    Products,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = fuelnear_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearest(args) => nearest::run_nearest(&config, &args).await,
        Commands::Products => {
            for product in FuelProduct::ALL {
                println!("  {:<16} {}", product.to_string(), product.price_field());
            }
            Ok(())
        }
    }
}
