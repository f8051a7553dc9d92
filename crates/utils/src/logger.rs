use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a compact tracing subscriber once per process.
///
/// The filter is read from `RUST_LOG` and falls back to `stopclock=info`.
/// Later calls, or calls after another subscriber was installed, are no-ops.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("stopclock=info"));

        // another subscriber may already own the global slot
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        tracing_subscriber::fmt::try_init().unwrap_err();
    }
}
