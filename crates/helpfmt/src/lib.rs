//! # helpfmt — two-column help text layout
//!
//! `helpfmt` renders the body of a CLI help screen: lists of
//! (term, description) pairs grouped into sections, laid out as aligned
//! two-column tables when the terminal is wide enough and degrading to a
//! linear, indented list when it is not. It is the formatting core only — it
//! does not parse arguments, declare options, or apply colors.
//!
//! ## Core Concepts
//!
//! - [`HelpSection`]: a heading, an optional description, and ordered [`Row`]s
//! - [`FormatterConfig`]: immutable layout parameters (widths, spacing,
//!   row separator)
//! - [`OverflowStrategy`]: wrap or truncate descriptions that exceed their
//!   column
//! - [`HelpFormatter`]: the renderer; [`render_sections`] is the one-call
//!   convenience wrapper
//! - [`RowRenderer`]: capability interface for alternative row layouts,
//!   supplied by composition
//!
//! ## Quick Start
//!
//! ```rust
//! use helpfmt::{render_sections, FormatterConfig, HelpSection, OverflowStrategy};
//!
//! let sections = [
//!     HelpSection::new("Options")
//!         .row("--verbose", "Enable verbose output.")
//!         .row("-h, --help", "Show this message and exit."),
//!     HelpSection::new("Commands")
//!         .row("init", "Create a new project.")
//!         .row("build", "Compile the current project."),
//! ];
//!
//! let config = FormatterConfig::new().width(50);
//! let help = render_sections(&sections, &config, true, OverflowStrategy::Wrap).unwrap();
//! println!("{}", help);
//! ```
//!
//! With `aligned = true` the two sections share one term-column width, so
//! their description columns line up across section boundaries.
//!
//! ## Layout Model
//!
//! ```text
//! |<----------------------- width ------------------------>|
//! |                |<---------- available_width ---------->|
//! | current_indent | col1_width | col_spacing | col2_width |
//! ```
//!
//! The term column grows to the widest term, capped by
//! [`FormatterConfig::col1_max_width`]; terms wider than the cap wrap onto
//! their own line instead of stretching the column. When the leftover
//! description column falls below [`FormatterConfig::col2_min_width`], the
//! whole list switches to linear layout: term and description on separate
//! lines with a fixed 4-column description indent.
//!
//! A too-narrow terminal is never an error — degenerate widths produce ugly
//! but correct output. Invalid configuration (zero widths, unknown strategy
//! tokens) fails fast with a [`FormatError`] before anything is written.

mod config;
mod error;
mod formatter;
mod render;
mod resolve;
mod section;
mod text;

pub use config::{FormatterConfig, OverflowStrategy};
pub use error::FormatError;
pub use formatter::{render_sections, HelpFormatter};
pub use render::{
    DefaultRowRenderer, LinearLayout, RowRenderer, TabularLayout, LINEAR_DESCR_INDENT,
    TRUNCATE_PLACEHOLDER,
};
pub use resolve::{max_term_width, resolve_widths, ResolvedWidths};
pub use section::{HelpSection, Row};
pub use text::{collapse_whitespace, display_width, truncate_text, wrap_text, MeasureFn};
