//! Output mode selection.

use crate::config::OutputFormat;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The core's camelCase JSON, nothing else on stdout
    Json,
    /// `key=value` lines, stable for scripts
    #[default]
    Plain,
    /// Headers, badges and tables
    Pretty,
}

impl OutputMode {
    /// `--json` wins over the configured format. `auto` is pretty only on a
    /// styled terminal (a TTY whose `TERM` is not `dumb`).
    pub fn select(json_flag: bool, format: OutputFormat, styled_terminal: bool) -> Self {
        if json_flag {
            return Self::Json;
        }

        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Auto if styled_terminal => Self::Pretty,
            OutputFormat::Auto => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
