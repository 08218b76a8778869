//! Observability configuration, read from the process environment.

/// Output format of emitted log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line.
    Pretty,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

/// Settings for [`crate::init_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `catalog_products=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Unrecognised `CATALOG_LOG_FORMAT` value, reported once tracing is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub const FILTER_VAR: &'static str = "RUST_LOG";
    pub const FORMAT_VAR: &'static str = "CATALOG_LOG_FORMAT";

    /// Read `RUST_LOG` and `CATALOG_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env`, handy in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(Self::FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(Self::FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.format = format,
                None => config.rejected_format = Some(raw),
            }
        }

        config
    }
}
