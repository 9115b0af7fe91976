//! Formatter configuration.
//!
//! [`FormatterConfig`] is an immutable bundle of layout parameters passed
//! into every render call. There are no ambient or global defaults; callers
//! construct one (usually from `FormatterConfig::new()`) and hand it to the
//! formatter, which validates it before producing any output.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Policy for second-column text that exceeds the available width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowStrategy {
    /// Wrap the text over multiple lines, aligned under the second column.
    #[default]
    Wrap,
    /// Truncate the text at a word boundary so it fits a single line.
    Truncate,
}

impl FromStr for OverflowStrategy {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, FormatError> {
        match s {
            "wrap" => Ok(OverflowStrategy::Wrap),
            "truncate" => Ok(OverflowStrategy::Truncate),
            other => Err(FormatError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Layout configuration for a [`HelpFormatter`](crate::HelpFormatter).
///
/// All widths are in display columns. Width parameters must be positive;
/// `col_spacing` and `indent_increment` may be zero.
///
/// # Example
///
/// ```rust
/// use helpfmt::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .width(72)
///     .col1_max_width(24)
///     .row_sep("\n");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Content width. When `None`, the formatter uses the terminal width
    /// capped by `max_width`.
    pub width: Option<usize>,
    /// Cap applied when deriving `width` from the terminal.
    pub max_width: usize,
    /// Indentation step for section bodies, also the floor for the
    /// second-column indent when a term overflows the first column.
    pub indent_increment: usize,
    /// Maximum width the first column may grow to.
    pub col1_max_width: usize,
    /// Threshold below which the second column is too narrow for tabular
    /// layout and rows are rendered linearly.
    pub col2_min_width: usize,
    /// Minimum gap between the two columns.
    pub col_spacing: usize,
    /// Text written after each row of a definition list (e.g. "\n" for a
    /// blank line between rows).
    pub row_sep: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            width: None,
            max_width: 80,
            indent_increment: 2,
            col1_max_width: 30,
            col2_min_width: 20,
            col_spacing: 2,
            row_sep: String::new(),
        }
    }
}

impl FormatterConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the content width instead of deriving it from the terminal.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the maximum content width used when deriving from the terminal.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the indentation step.
    pub fn indent_increment(mut self, indent_increment: usize) -> Self {
        self.indent_increment = indent_increment;
        self
    }

    /// Set the maximum first-column width.
    pub fn col1_max_width(mut self, col1_max_width: usize) -> Self {
        self.col1_max_width = col1_max_width;
        self
    }

    /// Set the minimum second-column width for tabular layout.
    pub fn col2_min_width(mut self, col2_min_width: usize) -> Self {
        self.col2_min_width = col2_min_width;
        self
    }

    /// Set the gap between columns.
    pub fn col_spacing(mut self, col_spacing: usize) -> Self {
        self.col_spacing = col_spacing;
        self
    }

    /// Set the row separator.
    pub fn row_sep(mut self, row_sep: impl Into<String>) -> Self {
        self.row_sep = row_sep.into();
        self
    }

    /// Check that all width parameters are positive.
    ///
    /// Negative values are unrepresentable (`usize` fields); this rejects the
    /// zero values that would otherwise produce malformed output.
    pub fn validate(&self) -> Result<(), FormatError> {
        check_positive(self.max_width, "max_width")?;
        check_positive(self.col1_max_width, "col1_max_width")?;
        check_positive(self.col2_min_width, "col2_min_width")?;
        if let Some(width) = self.width {
            check_positive(width, "width")?;
        }
        Ok(())
    }
}

fn check_positive(value: usize, name: &str) -> Result<(), FormatError> {
    if value == 0 {
        return Err(FormatError::Config(format!(
            "{} must be a positive integer, got 0",
            name
        )));
    }
    Ok(())
}
