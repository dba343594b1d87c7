use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber once. `RUST_LOG` overrides the default
/// `info` filter. Logs go to stderr so rendered output stays clean.
pub fn init_logger(service_name: &'static str, json: bool) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true);

        let installed = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };

        if installed.is_ok() {
            tracing::info!(service = service_name, "logger initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logger("u-checkout-test", false);
        init_logger("u-checkout-test", true);
        assert!(LOGGER_INIT.get().is_some());
    }
}
