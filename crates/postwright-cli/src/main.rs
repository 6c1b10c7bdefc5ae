//! Postwright - generates a social media post about a topic by chaining
//! web search, article extraction and LLM summarization.

use clap::Parser;
use postwright_cli::{load_config, Cli, CliError, ConsoleObserver, DEFAULT_QUERY};
use postwright_domain::Query;
use postwright_llm::OpenAiChat;
use postwright_pipeline::{Credentials, Pipeline, PipelineConfig};
use postwright_scraper::HttpPageFetcher;
use postwright_search::SerperClient;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> postwright_cli::Result<()> {
    let cli = Cli::parse();

    // Load .env before credentials are read
    dotenv::dotenv().ok();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };

    // Credentials are read once, before any run starts; a missing key is
    // fatal here rather than mid-run
    let credentials = Credentials::from_env()?;

    let search = SerperClient::new(&credentials.search_api_key);
    let llm = OpenAiChat::new(&credentials.llm_api_key, &cli.model);
    let fetcher = HttpPageFetcher::new();

    let mut pipeline = Pipeline::new(search, llm, fetcher, config)
        .map_err(CliError::Config)?
        .with_observer(Box::new(ConsoleObserver));

    let query = match cli.query.as_deref().map(Query::new) {
        Some(query) if !query.is_empty() => query,
        _ => {
            info!(topic = DEFAULT_QUERY, "No query given, using the sample topic");
            Query::new(DEFAULT_QUERY)
        }
    };

    let post = pipeline.run(query).await?;

    println!("{}", post.text());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Log to stderr; stdout carries the generated post
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
