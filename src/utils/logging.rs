use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Инициализация системы логирования. `RUST_LOG` имеет приоритет над `level`.
pub fn init_tracing(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()?,
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?,
    }

    Ok(())
}
