//! Report configuration for registry output
//!
//! Defaults produce the plain-text transcript used by golden tests.

use std::env;

use clap::ValueEnum;

/// Environment variable that overrides the default output format.
pub const FORMAT_ENV_VAR: &str = "NEON_REPORT_FORMAT";

/// Report configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Output format for the registry table
    pub format: OutputFormat,
    /// Whether to include the fixed lexeme column
    pub lexemes: bool,
    /// Whether to emit the title / column header
    pub header: bool,
}

/// Output format for registry reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Markdown,
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            lexemes: true,
            header: true,
        }
    }
}

impl ReportConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config whose format honors `NEON_REPORT_FORMAT`, if set to a known value.
    ///
    /// A non-UTF-8 value is converted lossily, so it fails to parse and is reported like any other unknown value.
    pub fn from_env() -> Self {
        let value = env::var_os(FORMAT_ENV_VAR).map(|v| v.to_string_lossy().into_owned());
        Self::from_env_value(value.as_deref())
    }

    /// Build a config from the raw value of `NEON_REPORT_FORMAT` (`None` when unset).
    ///
    /// Unknown values log a warning and keep the default format.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let config = Self::default();
        let Some(value) = value else {
            return config;
        };
        match OutputFormat::parse(value) {
            Some(format) => config.with_format(format),
            None => {
                tracing::warn!("Ignoring unknown {}={:?}", FORMAT_ENV_VAR, value);
                config
            }
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Include or omit the lexeme column
    pub fn with_lexemes(mut self, lexemes: bool) -> Self {
        self.lexemes = lexemes;
        self
    }

    /// Include or omit the header
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl OutputFormat {
    /// Parse a format name case-insensitively (`plain`, `markdown`, `json`).
    pub fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }
}
