//! Tracing setup shared by the server and CLI binaries

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(config: &LoggingConfig) -> String {
    format!(
        "screening_dashboard={},dashboard_cli={},tower_http={}",
        config.level, config.level, config.level
    )
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. `format = "json"`
/// selects structured output; anything else uses the human-readable format.
/// Events go to stderr so CLI output on stdout stays clean.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_uses_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(
            default_directive(&config),
            "screening_dashboard=debug,dashboard_cli=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        init(&config);
        init(&config);
    }
}
