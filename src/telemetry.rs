//! Telemetry helpers for hosts embedding `site-motion`.
//!
//! Tracing setup stays explicit and opt-in. Native hosts and tests can call
//! `init_default_tracing`; browser hosts usually wire their own subscriber.

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, or `site_motion=info`.
///
/// Gives `false` without the `telemetry` feature, or when the process already
/// has a global subscriber. Calling it twice is harmless.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("site_motion=info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
