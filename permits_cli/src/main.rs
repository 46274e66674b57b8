mod commands;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use permits_lib::{Config, SearchPipeline};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "permits")]
#[command(about = "Search City of Winnipeg building permits")]
struct Cli {
    /// Output format: text, table, json, csv or markdown
    #[arg(long, default_value = "text", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search(commands::search::SearchArgs),
    /// Read one search per stdin line (`permit type|order|limit`)
    Interactive,
    /// Print the request URL for a search without sending it
    Url(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("permits=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let config = Config::from_env();
    tracing::debug!("Using {}/resource/{}.json", config.api_url, config.dataset);
    let pipeline = Arc::new(SearchPipeline::new(config.client()));

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &pipeline, &format).await?,
        Commands::Interactive => commands::interactive::run(pipeline, format).await?,
        Commands::Url(args) => commands::search::print_url(args, &pipeline)?,
    }

    Ok(())
}
