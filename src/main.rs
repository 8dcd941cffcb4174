use hamster::config::{self, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if missing)
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);

    config.print_summary();

    hamster::server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level, and the
/// output format follows `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
