use anyhow::Result;
use clap::{Parser, Subcommand};
use smartrecipe::cli::query::{BrowseArgs, DailyArgs, GenerateArgs};

/// smartrecipe - Find recipes for what is already in your kitchen
#[derive(Parser)]
#[command(name = "smartrecipe")]
#[command(about = "Recipe discovery from the ingredients you have", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Rank recipes for a list of ingredients and print them as JSON
    Generate(GenerateArgs),
    /// Filter recipes by cuisine, difficulty, time, diet or calories and print them as JSON
    Browse(BrowseArgs),
    /// Print the recipe of the day as JSON
    Daily(DailyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = smartrecipe::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    smartrecipe::observability::init_observability(
        "smartrecipe",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => smartrecipe::cli::server::serve(config, host, port).await,
        Commands::Generate(args) => {
            println!("{}", smartrecipe::cli::query::generate(&config, args)?);
            Ok(())
        }
        Commands::Browse(args) => {
            println!("{}", smartrecipe::cli::query::browse(&config, args)?);
            Ok(())
        }
        Commands::Daily(args) => {
            println!("{}", smartrecipe::cli::query::daily(&config, args)?);
            Ok(())
        }
    }
}
