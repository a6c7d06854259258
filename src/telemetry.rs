//! Opt-in tracing setup for hosts embedding `parcoords`.
//!
//! Engine events are logged under the `parcoords` target: filter changes and
//! rearranges at `debug`, per-move gesture updates at `trace`, anomalies at
//! `warn`. Hosts with their own subscriber can ignore this module.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "parcoords=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_directive`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

/// [`init_tracing`] with [`DEFAULT_DIRECTIVE`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVE)
}
