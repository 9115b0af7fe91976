//! Error types for help formatting.
//!
//! This module provides [`FormatError`], the error type for all formatting
//! operations. Configuration problems fail eagerly before any output is
//! produced; degenerate layouts (too-narrow widths) are not errors and are
//! handled by the fallback policies in the renderers.

use std::fmt;

/// Error type for help formatting operations.
#[derive(Debug)]
pub enum FormatError {
    /// A configuration value failed validation (e.g. a zero width).
    Config(String),

    /// An overflow-strategy token was not recognized.
    UnknownStrategy(String),

    /// Width resolution was requested with neither an explicit first-column
    /// width nor any rows to measure.
    NoWidthSource,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            FormatError::UnknownStrategy(token) => write!(
                f,
                "unknown overflow strategy: {:?} (expected \"wrap\" or \"truncate\")",
                token
            ),
            FormatError::NoWidthSource => write!(
                f,
                "cannot resolve column widths: provide an explicit first-column width or at least one row"
            ),
        }
    }
}

impl std::error::Error for FormatError {}
