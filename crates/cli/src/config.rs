//! Process configuration, read from the environment.

use core::str::FromStr;

use shipplan_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "SHIPPLAN_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "SHIPPLAN_OUTPUT";
pub const SUMMARY_VAR: &str = "SHIPPLAN_SUMMARY";

/// How the plan JSON is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown output style '{other}' (expected 'compact' or 'pretty')")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    pub output: OutputStyle,
    /// Log requested vs shipped per order line after allocating.
    pub summary: bool,
    /// Problems found while reading configuration. Logging is not set up yet
    /// at that point, so callers report these once it is.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unknown values fall back to
    /// the defaults and leave a warning behind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config.warnings.push(format!("{LOG_FORMAT_VAR}: {e}")),
            }
        }

        if let Some(raw) = lookup(OUTPUT_VAR) {
            match raw.parse::<OutputStyle>() {
                Ok(style) => config.output = style,
                Err(e) => config.warnings.push(format!("{OUTPUT_VAR}: {e}")),
            }
        }

        if let Some(raw) = lookup(SUMMARY_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.summary = flag,
                None => config
                    .warnings
                    .push(format!("{SUMMARY_VAR}: expected a boolean flag, got '{raw}'")),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
