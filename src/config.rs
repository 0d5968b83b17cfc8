use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ============================================================================
// Telemetry Configuration
// ============================================================================
//
// Filter precedence: RUST_LOG, then ORDER_SERVICE_LOG, then the default below.
// Example: RUST_LOG=debug cargo run
//
// ============================================================================

/// Environment variable overriding the default log filter
pub const LOG_FILTER_ENV: &str = "ORDER_SERVICE_LOG";

#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Filter used when RUST_LOG is not set
    pub default_filter: String,
    /// Include the event target (module path) in each line
    pub with_target: bool,
    /// Include the thread id in each line
    pub with_thread_ids: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_filter: "info,order_service=debug".to_string(),
            with_target: true,
            with_thread_ids: true,
        }
    }
}

impl TelemetryConfig {
    /// Defaults, with `default_filter` taken from ORDER_SERVICE_LOG when set
    pub fn from_env() -> Self {
        Self::default().with_filter_override(std::env::var(LOG_FILTER_ENV).ok())
    }

    fn with_filter_override(mut self, filter: Option<String>) -> Self {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.default_filter = filter;
        }
        self
    }
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids),
        )
        .with(filter)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
