//! Telemetry helpers for applications embedding `xychart`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` or wire their own `tracing` subscriber and
//! filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled)
/// or if a global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .compact()
            .with_target(false)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
