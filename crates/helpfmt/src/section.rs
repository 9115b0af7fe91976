//! Help section and row types.
//!
//! A [`HelpSection`] groups related [`Row`]s under one heading, optionally
//! preceded by a free-text description. Sections and rows render in input
//! order; nothing is ever sorted or merged.

use serde::{Deserialize, Serialize};

/// A single definition-list entry: a term and its description.
///
/// Terms are typically option or command names; descriptions may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// First-column text.
    pub term: String,
    /// Second-column text. An empty description renders the term alone.
    pub descr: String,
}

impl Row {
    /// Create a row from a term and description.
    pub fn new(term: impl Into<String>, descr: impl Into<String>) -> Self {
        Row {
            term: term.into(),
            descr: descr.into(),
        }
    }
}

impl<T: Into<String>, D: Into<String>> From<(T, D)> for Row {
    fn from((term, descr): (T, D)) -> Self {
        Row::new(term, descr)
    }
}

/// A named group of rows, e.g. "Options" or "Commands".
///
/// # Example
///
/// ```rust
/// use helpfmt::HelpSection;
///
/// let section = HelpSection::new("Options")
///     .description("Flags accepted by every subcommand.")
///     .row("--verbose", "Enable verbose output.")
///     .row("-h, --help", "Show this message and exit.");
/// assert_eq!(section.rows.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpSection {
    /// Heading printed above the rows.
    pub heading: String,
    /// Rows in render order.
    pub rows: Vec<Row>,
    /// Optional free text printed between the heading and the rows.
    pub description: Option<String>,
}

impl HelpSection {
    /// Create an empty section with the given heading.
    pub fn new(heading: impl Into<String>) -> Self {
        HelpSection {
            heading: heading.into(),
            rows: Vec::new(),
            description: None,
        }
    }

    /// Append a row.
    pub fn row(mut self, term: impl Into<String>, descr: impl Into<String>) -> Self {
        self.rows.push(Row::new(term, descr));
        self
    }

    /// Append multiple rows.
    pub fn rows<R: Into<Row>>(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Set the section description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the section has no rows and no non-empty description.
    /// Such sections render nothing, not even their heading.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.description.as_deref().map_or(true, str::is_empty)
    }
}
