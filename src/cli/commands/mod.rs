pub mod browse;
pub mod list;
pub mod show;

use crate::catalog::Locale;
use crate::{PatternbookError, Result};

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Output format for the printing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn parse_format(value: &str) -> Result<OutputFormat> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(PatternbookError::Cli(format!(
            "unknown format '{other}' (expected text or json)"
        ))),
    }
}

pub fn parse_locale(value: &str) -> Result<Locale> {
    match value {
        "es" => Ok(Locale::Es),
        "en" => Ok(Locale::En),
        other => Err(PatternbookError::Cli(format!(
            "unknown language '{other}' (expected es or en)"
        ))),
    }
}
