//! Telemetry helpers for hosts embedding `dashcalc`.
//!
//! The calculator only emits `tracing` events; installing a subscriber is the
//! host's decision. Dashboards without their own logging setup can call
//! `init_default_tracing` once at startup.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "dashcalc=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
