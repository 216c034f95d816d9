use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the process-wide tracing subscriber
///
/// Only the first call has an effect. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let filter = if verbose { "debug" } else { "info" };

        let result = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
            )
            .try_init();

        if let Err(e) = result {
            eprintln!("Logging already configured elsewhere: {}", e);
        }
    });
}
