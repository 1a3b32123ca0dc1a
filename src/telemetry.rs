//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `server.log_level` when set. Production emits JSON
/// lines, everything else gets the pretty formatter.
pub fn init_logging(server: &ServerConfig) -> anyhow::Result<()> {
    let env_filter = build_filter(&server.log_level)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    if server.is_production() {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true);
        registry.with(json_layer).try_init()?;
    } else {
        registry
            .with(fmt::layer().pretty().with_target(true))
            .try_init()?;
    }

    Ok(())
}

fn build_filter(directive: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(directive)
            .map_err(|e| anyhow::anyhow!("Invalid log filter {directive:?}: {e}")),
    }
}
