//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a serializable value as JSON. Pretty mode indents it.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}
