// crates/xcorr-cli/src/logging.rs

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| anyhow::anyhow!("bad --log-level {default_filter:?}: {e}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging init failed: {e}"))?;
    Ok(())
}
