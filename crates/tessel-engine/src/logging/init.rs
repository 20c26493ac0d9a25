use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "tessel_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Default filter when neither the config nor `RUST_LOG` provides one.
///
/// wgpu is chatty at info level; keep it to warnings.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // try_init: a host binary or test harness may already own the logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized (filter: {filter})");
    });
}

/// Precedence: explicit config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
fn resolve_filter(explicit: Option<String>, env: Option<String>) -> String {
    explicit
        .filter(|f| !f.trim().is_empty())
        .or_else(|| env.filter(|f| !f.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let f = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(f, "debug");
    }

    #[test]
    fn env_is_second() {
        assert_eq!(resolve_filter(None, Some("warn".into())), "warn");
        assert_eq!(resolve_filter(Some("  ".into()), Some("warn".into())), "warn");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some(String::new())), DEFAULT_FILTER);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            env_filter: Some("trace".into()),
            ..Default::default()
        });
    }
}
