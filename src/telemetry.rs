//! Optional log output for hosts that have no subscriber of their own.
//!
//! Store commits, rejected mutations and drop resolution are reported as
//! `tracing` events under the `timeline_dnd` target. Nothing is printed
//! until a subscriber is installed.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "timeline_dnd=info";

/// Installs a compact `fmt` subscriber filtered by [`DEFAULT_FILTER`].
///
/// `false` means nothing was installed: the `telemetry` feature is off or the
/// host already owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive.
///
/// `RUST_LOG` still wins when it parses.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
