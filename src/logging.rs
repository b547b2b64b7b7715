use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// install the global fmt subscriber once; `RUST_LOG` wins over `default_filter`
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("home_loan_rs=info"));

        // another subscriber may already be installed by the host
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing("home_loan_rs=debug");
        init_tracing("not a [valid filter");
    }
}
