use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// wins over the configured level. `json` format emits one JSON object per
/// event, anything else gets the human readable layout.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    log_level: &str,
    log_format: &str,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::debug!(
        service.name = service_name,
        service.version = service_version,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_init_once() {
        let first = init_observability("test-service", "0.1.0", "debug", "pretty");
        assert!(first.is_ok(), "Observability init should succeed: {:?}", first.err());

        // A global subscriber is already set
        assert!(init_observability("test-service", "0.1.0", "debug", "json").is_err());
    }
}
