// Logging setup for binaries embedding the formatter. Library code only
// emits `tracing` events and never installs a subscriber on its own.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber with an env-filter.
///
/// `RUST_LOG` wins when set; otherwise `verbose` switches between debug and
/// warn level for this crate. Calling this twice panics, as with any global
/// subscriber installation.
pub fn init(verbose: bool) {
    let filter = if verbose {
        "allure_bdd=debug,warn"
    } else {
        "allure_bdd=warn,error"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}
