//! Row rendering: tabular and linear definition-list layouts.
//!
//! The formatter dispatches every definition list to a [`RowRenderer`].
//! Alternative layouts are supplied by composition
//! ([`HelpFormatter::with_renderer`](crate::HelpFormatter::with_renderer))
//! rather than by subclassing a base formatter.

use crate::config::OverflowStrategy;
use crate::section::Row;
use crate::text::{truncate_text, wrap_text, MeasureFn};

/// Placeholder appended to truncated descriptions.
pub const TRUNCATE_PLACEHOLDER: &str = "...";

/// Fixed indentation step for descriptions in linear layout.
pub const LINEAR_DESCR_INDENT: usize = 4;

/// Layout context for tabular rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabularLayout {
    /// Columns already consumed on the left margin.
    pub current_indent: usize,
    /// Floor for the second-column indent when a term overflows the first
    /// column.
    pub indent_increment: usize,
    /// Width of the term column.
    pub col1_width: usize,
    /// Gap between the columns.
    pub col_spacing: usize,
    /// Width available to descriptions.
    pub col2_width: usize,
}

impl TabularLayout {
    /// Second-column start, measured from the left margin.
    pub fn col2_start(&self) -> usize {
        self.current_indent + self.indent_increment.max(self.col1_width + self.col_spacing)
    }
}

/// Layout context for linear rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearLayout {
    /// Columns already consumed on the left margin.
    pub current_indent: usize,
    /// Total content width; descriptions wrap against
    /// `width - current_indent - LINEAR_DESCR_INDENT`.
    pub width: usize,
}

/// Pluggable row-rendering capability.
///
/// Both methods append to `out` and must not panic on degenerate layouts
/// (a zero or tiny `col2_width` is valid input).
pub trait RowRenderer {
    /// Render rows as a two-column table.
    fn render_tabular(
        &self,
        out: &mut String,
        rows: &[Row],
        layout: &TabularLayout,
        strategy: OverflowStrategy,
        row_sep: &str,
        measure: MeasureFn,
    );

    /// Render rows as a linear list, term and description on separate lines.
    fn render_linear(
        &self,
        out: &mut String,
        rows: &[Row],
        layout: &LinearLayout,
        strategy: OverflowStrategy,
    );
}

/// The built-in renderer implementing the default layouts.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRowRenderer;

impl RowRenderer for DefaultRowRenderer {
    fn render_tabular(
        &self,
        out: &mut String,
        rows: &[Row],
        layout: &TabularLayout,
        strategy: OverflowStrategy,
        row_sep: &str,
        measure: MeasureFn,
    ) {
        let col1_plus_spacing = layout.col1_width + layout.col_spacing;
        let indentation = " ".repeat(layout.current_indent);
        let col2_indent = " ".repeat(layout.col2_start());

        for row in rows {
            out.push_str(&indentation);
            out.push_str(&row.term);

            if row.descr.is_empty() {
                out.push('\n');
                out.push_str(row_sep);
                continue;
            }

            let term_width = measure(&row.term);
            if term_width <= layout.col1_width {
                out.push_str(&" ".repeat(col1_plus_spacing - term_width));
            } else {
                // Term overflows the column; the description starts on the
                // next line, aligned with the other descriptions.
                out.push('\n');
                out.push_str(&col2_indent);
            }

            match strategy {
                OverflowStrategy::Wrap => {
                    let wrapped = wrap_text(&row.descr, layout.col2_width);
                    let mut lines = wrapped.lines();
                    if let Some(first) = lines.next() {
                        out.push_str(first);
                    }
                    out.push('\n');
                    for line in lines {
                        if !line.is_empty() {
                            out.push_str(&col2_indent);
                            out.push_str(line);
                        }
                        out.push('\n');
                    }
                }
                OverflowStrategy::Truncate => {
                    out.push_str(&truncate_text(&row.descr, layout.col2_width, TRUNCATE_PLACEHOLDER));
                    out.push('\n');
                }
            }
            out.push_str(row_sep);
        }
    }

    fn render_linear(
        &self,
        out: &mut String,
        rows: &[Row],
        layout: &LinearLayout,
        strategy: OverflowStrategy,
    ) {
        let indentation = " ".repeat(layout.current_indent);
        let descr_indent_cols = layout.current_indent + LINEAR_DESCR_INDENT;
        let descr_indent = " ".repeat(descr_indent_cols);
        let descr_width = layout.width.saturating_sub(descr_indent_cols);

        for row in rows {
            out.push_str(&indentation);
            out.push_str(&row.term);
            out.push('\n');

            if !row.descr.is_empty() {
                match strategy {
                    OverflowStrategy::Wrap => {
                        for line in wrap_text(&row.descr, descr_width).lines() {
                            if !line.is_empty() {
                                out.push_str(&descr_indent);
                                out.push_str(line);
                            }
                            out.push('\n');
                        }
                    }
                    OverflowStrategy::Truncate => {
                        out.push_str(&descr_indent);
                        out.push_str(&truncate_text(&row.descr, descr_width, TRUNCATE_PLACEHOLDER));
                        out.push('\n');
                    }
                }
            }
            out.push('\n');
        }
        // The blank-line separator follows every row but the last of the list.
        if !rows.is_empty() {
            out.pop();
        }
    }
}
