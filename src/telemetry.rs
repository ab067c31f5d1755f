//! Tracing setup for hosts embedding `category-chart-rs`.
//!
//! The crate only emits `tracing` events (data replacement, geometry rebuilds,
//! rejected mutations, hit tests). Installing a subscriber is left to the host,
//! or to [`init_default_tracing`] when the `telemetry` feature is enabled.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "category_chart=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
