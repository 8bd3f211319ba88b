// 📊 Logging setup for the sellsavvy binary
//
// The library only emits `tracing` events; installing a subscriber is the
// binary's job. Level comes from SELLSAVVY_LOG, and RUST_LOG wins when set.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "SELLSAVVY_LOG";
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `tracing_subscriber` filter directive, e.g. `sellsavvy=debug`
    pub directive: String,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(LOG_ENV).ok().as_deref())
    }

    /// A bare level ("debug") is scoped to this crate; anything containing
    /// '=' or ',' is taken as a full directive.
    pub fn from_value(value: Option<&str>) -> Self {
        let value = value.map(str::trim).filter(|v| !v.is_empty());
        let directive = match value {
            Some(v) if v.contains('=') || v.contains(',') => v.to_string(),
            Some(level) => format!("sellsavvy={level}"),
            None => format!("sellsavvy={DEFAULT_LEVEL}"),
        };
        LogSettings { directive }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self::from_value(None)
    }
}

/// Install the global fmt subscriber. Returns false if one was already set.
pub fn init_logging(settings: &LogSettings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.directive));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .is_ok()
}
