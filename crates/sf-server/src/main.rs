use clap::Parser;
use sf_config::{validate_config, AppConfig};
use sf_server::{start_server, state::AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Arduino code generation service
#[derive(Debug, Parser)]
#[command(name = "sketchforge", version)]
struct Cli {
    /// Address to bind. Defaults to 0.0.0.0, or 127.0.0.1 in debug mode.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Disable permissive CORS headers
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env();
    validate_config(&config)?;

    info!("Starting sketchforge with debug mode: {}", config.debug);
    info!("Using model: {}", config.model);
    info!("{}: {}", sf_config::API_KEY_VAR, config.masked_api_key());

    // Bind locally only in debug mode unless explicitly overridden.
    let host = cli.host.unwrap_or_else(|| {
        if config.debug {
            "127.0.0.1".to_string()
        } else {
            "0.0.0.0".to_string()
        }
    });

    let state = AppState::new(config)?;

    start_server(
        ServerConfig {
            host,
            port: cli.port,
            enable_cors: !cli.no_cors,
        },
        state,
    )
    .await
}
