use anyhow::{anyhow, Result};
use eodlab_core::LogFormat;

/// Install the global tracing subscriber. `EODLAB_LOG` overrides `level`.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let filter = std::env::var("EODLAB_LOG").unwrap_or_else(|_| level.to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .map_err(|err| anyhow!("invalid log filter: {err}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
    Ok(())
}
