use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reddit_post_card::config::Config;
use reddit_post_card::format::HumanFormatter;
use reddit_post_card::post::{load_posts, load_posts_from_path};
use reddit_post_card::render_document;

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    init_tracing()?;

    // Load and validate configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(origin = %config.platform_origin, "Configuration loaded");

    let input = std::env::args_os().nth(1).map(PathBuf::from);
    let posts = match input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = %path.display(), "Reading post document");
            load_posts_from_path(path)
                .with_context(|| format!("Failed to load posts from {}", path.display()))?
        }
        _ => {
            info!("Reading post document from stdin");
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read stdin")?;
            load_posts(&json).context("Failed to load posts from stdin")?
        }
    };

    let page = render_document(&posts, &config, &HumanFormatter::now());

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(page.into_string().as_bytes())
        .context("Failed to write document")?;
    stdout.flush().context("Failed to flush stdout")?;

    info!(count = posts.len(), "Rendered post cards");

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reddit_post_card=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    // stdout carries the rendered document, so logs go to stderr
    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
