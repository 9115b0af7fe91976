//! The help formatter: output buffer, indentation, and section orchestration.
//!
//! [`HelpFormatter`] owns a transient output buffer and the current left
//! indentation, and dispatches definition lists to a [`RowRenderer`]. Each
//! render call is independent; the formatter holds no state across calls
//! beyond the buffer it is accumulating.

use std::cmp::min;

use terminal_size::{terminal_size, Width};

use crate::config::{FormatterConfig, OverflowStrategy};
use crate::error::FormatError;
use crate::render::{DefaultRowRenderer, LinearLayout, RowRenderer, TabularLayout};
use crate::resolve::{max_term_width, resolve_widths};
use crate::section::{HelpSection, Row};
use crate::text::{self, MeasureFn};

/// Fallback content width when terminal detection fails.
const FALLBACK_TERMINAL_WIDTH: usize = 80;

/// Renders help sections as aligned two-column tables, falling back to a
/// linear layout when the terminal is too narrow.
///
/// ```text
/// |<----------------------- width ------------------------>|
/// |                |<---------- available_width ---------->|
/// | current_indent | col1_width | col_spacing | col2_width |
/// ```
///
/// # Example
///
/// ```rust
/// use helpfmt::{FormatterConfig, HelpFormatter, HelpSection, OverflowStrategy};
///
/// let sections = [HelpSection::new("Options")
///     .row("--verbose", "Enable verbose output.")
///     .row("-h, --help", "Show this message and exit.")];
///
/// let mut formatter = HelpFormatter::new(FormatterConfig::new().width(50)).unwrap();
/// formatter.write_sections(&sections, true, OverflowStrategy::Wrap).unwrap();
/// let help = formatter.finish();
/// assert!(help.starts_with("Options:\n"));
/// ```
pub struct HelpFormatter {
    config: FormatterConfig,
    width: usize,
    current_indent: usize,
    buffer: String,
    measure: MeasureFn,
    renderer: Box<dyn RowRenderer>,
}

impl HelpFormatter {
    /// Create a formatter, deriving the content width from the terminal
    /// (capped by `max_width`) when the configuration does not fix one.
    ///
    /// Fails fast on an invalid configuration; no partial output is ever
    /// produced.
    pub fn new(config: FormatterConfig) -> Result<Self, FormatError> {
        config.validate()?;
        let width = config
            .width
            .unwrap_or_else(|| min(config.max_width, detected_terminal_width()));
        Ok(HelpFormatter {
            config,
            width,
            current_indent: 0,
            buffer: String::new(),
            measure: text::display_width,
            renderer: Box::new(DefaultRowRenderer),
        })
    }

    /// Replace the row renderer. Alternative layouts are supplied by
    /// composition rather than subclassing.
    pub fn with_renderer(mut self, renderer: Box<dyn RowRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the width-measurement function.
    pub fn with_measure(mut self, measure: MeasureFn) -> Self {
        self.measure = measure;
        self
    }

    /// The content width of this formatter.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Columns already consumed on the left margin.
    pub fn current_indent(&self) -> usize {
        self.current_indent
    }

    /// Width remaining to the right of the current indentation.
    pub fn available_width(&self) -> usize {
        self.width.saturating_sub(self.current_indent)
    }

    /// Increase the indentation by one step.
    pub fn indent(&mut self) {
        self.current_indent += self.config.indent_increment;
    }

    /// Decrease the indentation by one step.
    pub fn dedent(&mut self) {
        self.current_indent = self.current_indent.saturating_sub(self.config.indent_increment);
    }

    /// Append raw text to the buffer.
    pub fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write a section heading at the current indentation.
    pub fn write_heading(&mut self, heading: &str) {
        for _ in 0..self.current_indent {
            self.buffer.push(' ');
        }
        self.buffer.push_str(heading);
        self.buffer.push_str(":\n");
    }

    /// Write free text, word-wrapped to the available width and indented.
    /// Paragraph breaks in the input are preserved.
    pub fn write_text(&mut self, content: &str) {
        let indentation = " ".repeat(self.current_indent);
        let wrapped = text::wrap_text(content, self.available_width());
        for line in wrapped.lines() {
            if !line.is_empty() {
                self.buffer.push_str(&indentation);
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
    }

    /// Write a definition list, choosing tabular or linear layout.
    ///
    /// Widths are resolved from `col1_width` when given (shared-alignment
    /// case) or from the rows themselves. When the resolved second column is
    /// narrower than `col2_min_width` the list is rendered linearly.
    pub fn write_dl(
        &mut self,
        rows: &[Row],
        col1_width: Option<usize>,
        strategy: OverflowStrategy,
    ) -> Result<(), FormatError> {
        let widths = resolve_widths(
            col1_width,
            rows,
            &self.config,
            self.available_width(),
            self.measure,
        )?;

        if widths.col2 < self.config.col2_min_width as isize {
            let layout = LinearLayout {
                current_indent: self.current_indent,
                width: self.width,
            };
            self.renderer
                .render_linear(&mut self.buffer, rows, &layout, strategy);
        } else {
            let layout = TabularLayout {
                current_indent: self.current_indent,
                indent_increment: self.config.indent_increment,
                col1_width: widths.col1,
                col_spacing: self.config.col_spacing,
                col2_width: widths.col2 as usize,
            };
            self.renderer.render_tabular(
                &mut self.buffer,
                rows,
                &layout,
                strategy,
                &self.config.row_sep,
                self.measure,
            );
        }
        Ok(())
    }

    /// Write one section: heading, optional description, then its rows.
    ///
    /// A section with no rows and no description renders nothing at all.
    pub fn write_section(
        &mut self,
        section: &HelpSection,
        col1_width: Option<usize>,
        strategy: OverflowStrategy,
    ) -> Result<(), FormatError> {
        if section.is_empty() {
            return Ok(());
        }
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.write_heading(&section.heading);
        self.indent();
        let result = self.write_section_body(section, col1_width, strategy);
        self.dedent();
        result
    }

    fn write_section_body(
        &mut self,
        section: &HelpSection,
        col1_width: Option<usize>,
        strategy: OverflowStrategy,
    ) -> Result<(), FormatError> {
        if let Some(descr) = section.description.as_deref().filter(|d| !d.is_empty()) {
            self.write_text(descr);
            if !self.config.row_sep.is_empty() {
                let sep = self.config.row_sep.clone();
                self.write(&sep);
            }
        }
        if section.rows.is_empty() {
            return Ok(());
        }
        self.write_dl(&section.rows, col1_width, strategy)
    }

    /// Write multiple sections in input order.
    ///
    /// When `aligned` is true, one first-column width is computed from the
    /// terms of all sections and shared, so the columns line up across
    /// section boundaries. The tabular/linear choice is still made per
    /// section from that section's resolved widths.
    pub fn write_sections(
        &mut self,
        sections: &[HelpSection],
        aligned: bool,
        strategy: OverflowStrategy,
    ) -> Result<(), FormatError> {
        let shared = if aligned {
            let terms = sections
                .iter()
                .flat_map(|s| s.rows.iter())
                .map(|r| r.term.as_str());
            Some(max_term_width(terms, self.config.col1_max_width, self.measure))
        } else {
            None
        };
        for section in sections {
            self.write_section(section, shared, strategy)?;
        }
        Ok(())
    }

    /// Consume the formatter and return the rendered text.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// The buffer contents accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

fn detected_terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH)
}

/// Render sections to a single text blob with the given configuration.
///
/// Convenience wrapper over [`HelpFormatter`]; see the crate docs for an
/// end-to-end example.
pub fn render_sections(
    sections: &[HelpSection],
    config: &FormatterConfig,
    aligned: bool,
    strategy: OverflowStrategy,
) -> Result<String, FormatError> {
    let mut formatter = HelpFormatter::new(config.clone())?;
    formatter.write_sections(sections, aligned, strategy)?;
    Ok(formatter.finish())
}
