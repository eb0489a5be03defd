//! Optional `tracing` bootstrap for hosts without their own subscriber.
//!
//! The layout passes emit `warn!`/`debug!` events at their degradation
//! points (unknown places, unparseable distances, skipped zero-length
//! transitions). Those events go nowhere unless a subscriber is installed;
//! hosts that already run one should ignore this module entirely.

/// Installs a compact default subscriber, honoring `RUST_LOG` and falling
/// back to the `info` level. Only active under the `telemetry` feature.
///
/// Returns `true` when the subscriber was installed, `false` when the
/// feature is off or another global subscriber won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
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
