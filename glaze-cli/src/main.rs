//! Glaze CLI
//!
//! Command-line interface for the Glaze asset-generation caching proxy.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glaze_api::{ApiConfig, ApiServer};
use glaze_core::traits::AssetProvider;
use glaze_core::types::GenerationRequest;
use glaze_provider::{HttpProvider, HttpProviderConfig, PlaceholderProvider};

/// Glaze - caching proxy for AI asset generation
#[derive(Parser)]
#[command(name = "glaze")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
        /// Cache capacity bound
        #[arg(long, env = "GLAZE_CACHE_CAPACITY")]
        cache_capacity: Option<usize>,
        /// Generation backend URL (placeholder provider if omitted)
        #[arg(long, env = "GLAZE_PROVIDER_URL")]
        provider_url: Option<String>,
    },

    /// Generate a single asset from the command line
    Generate {
        /// Text prompt
        prompt: String,
        /// Asset width in pixels
        #[arg(long, default_value = "512")]
        width: u32,
        /// Asset height in pixels
        #[arg(long, default_value = "512")]
        height: u32,
        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
        /// Generation backend URL (placeholder provider if omitted)
        #[arg(long, env = "GLAZE_PROVIDER_URL")]
        provider_url: Option<String>,
        /// Bearer token for the backend
        #[arg(long, env = "GLAZE_PROVIDER_API_KEY")]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "glaze=debug,info"
    } else {
        "glaze=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            bind,
            cache_capacity,
            provider_url,
        } => cmd_serve(port, &bind, cache_capacity, provider_url).await,
        Commands::Generate {
            prompt,
            width,
            height,
            seed,
            provider_url,
            api_key,
        } => cmd_generate(&prompt, width, height, seed, provider_url, api_key).await,
    }
}

/// Run the API server
async fn cmd_serve(
    port: u16,
    bind: &str,
    cache_capacity: Option<usize>,
    provider_url: Option<String>,
) -> Result<()> {
    println!("{}", "🚀 Starting Glaze API server...".cyan().bold());
    println!("   {} http://{}:{}", "Listening on:".green(), bind, port);
    println!(
        "   {} http://{}:{}/health",
        "Health check:".dimmed(),
        bind,
        port
    );
    println!("\n   Press Ctrl+C to stop.\n");

    let mut config = ApiConfig::from_env();
    if let Some(capacity) = cache_capacity {
        config.cache_capacity = capacity;
    }
    if provider_url.is_some() {
        config.provider_url = provider_url;
    }

    let server = ApiServer::new(config);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    server.run(addr).await?;

    Ok(())
}

/// Generate a single asset
async fn cmd_generate(
    prompt: &str,
    width: u32,
    height: u32,
    seed: Option<u64>,
    provider_url: Option<String>,
    api_key: Option<String>,
) -> Result<()> {
    println!("{} {}", "🎨 Generating:".cyan().bold(), prompt);

    let mut request = GenerationRequest::new(prompt).with_size(width, height);
    if let Some(seed) = seed {
        request = request.with_seed(seed);
    }
    request.validate().context("Invalid request")?;

    let provider: Box<dyn AssetProvider> = match provider_url {
        Some(url) => {
            let mut config = HttpProviderConfig::new(url);
            if let Some(key) = api_key {
                config = config.with_api_key(key);
            }
            Box::new(HttpProvider::with_config(config).context("Provider setup failed")?)
        }
        None => Box::new(PlaceholderProvider::new()),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Calling {} provider...", provider.name()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let start = std::time::Instant::now();
    let result = provider.generate(&request).await;
    pb.finish_and_clear();

    let asset = result.context("Generation failed")?;

    println!("\n{}", "✅ Asset generated:".green().bold());
    println!("   {} {}", "URL:".dimmed(), asset.url);
    println!("   {} {}", "Format:".dimmed(), asset.format);
    println!("   {} {:?}", "Took:".dimmed(), start.elapsed());

    Ok(())
}
