use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use api_client::{ClientConfig, RecommendClient};
use controller::RequestController;

mod config;
mod terminal;

use config::load_settings;
use terminal::TerminalSurface;

/// AniRecs - anime recommendation lookup
#[derive(Parser)]
#[command(name = "ani-recs")]
#[command(about = "Look up ranked anime recommendations from the recommendation service", long_about = None)]
struct Cli {
    /// Anime title to look up recommendations for
    anime: String,

    /// Recommendation service endpoint (overrides ANI_RECS_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in milliseconds (overrides ANI_RECS_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Settings resolve defaults -> environment -> flags.
    let mut settings = load_settings();
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint_url = endpoint;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        settings.request_timeout = Duration::from_millis(timeout_ms);
    }

    let client = RecommendClient::new(ClientConfig {
        endpoint_url: settings.endpoint_url,
        request_timeout: settings.request_timeout,
    })?;

    let surface = Arc::new(TerminalSurface::new(cli.anime));
    let request_controller = RequestController::new(Arc::new(client), surface);

    // The controller is the failure boundary: every outcome ends up
    // rendered on the terminal, not in the exit status.
    request_controller.request_recommendations().await;

    Ok(())
}
