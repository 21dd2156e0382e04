//! Logging setup.
//!
//! The library itself only emits `tracing` events; binaries and tests call
//! [`init`] once to print them.

use tracing_subscriber::EnvFilter;

use crate::config::StorefrontConfig;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `info`, or at
/// `debug` when `config.debug` is set. Returns false if a global subscriber
/// was already installed.
pub fn init(config: &StorefrontConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.debug)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "storefront=debug"
    } else {
        "storefront=info"
    }
}
