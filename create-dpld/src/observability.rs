//! Logging setup
//!
//! Diagnostics go to stderr so they never interleave with the interactive
//! prompts on stdout. The filter defaults to `warn` and can be raised through
//! `RUST_LOG` (e.g. `RUST_LOG=create_dpld=debug`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
