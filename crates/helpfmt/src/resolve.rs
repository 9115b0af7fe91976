//! Width resolution for definition-list columns.
//!
//! Given the available content width and a layout configuration, this module
//! decides how many columns the term column gets and how many are left for
//! descriptions. The second-column width is signed: a negative value is a
//! valid computed result that callers react to by switching to linear layout,
//! never a crash.

use crate::config::FormatterConfig;
use crate::error::FormatError;
use crate::section::Row;
use crate::text::MeasureFn;

/// Resolved column widths for one definition list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width of the term column, never exceeding the configured maximum or
    /// the available width.
    pub col1: usize,
    /// Width left for the description column
    /// (`available - col1 - col_spacing`, not floored).
    pub col2: isize,
}

/// Widest term not exceeding `cap`, or 0 when none qualifies.
///
/// Terms wider than the cap are excluded: they wrap onto their own line at
/// render time instead of stretching the column.
pub fn max_term_width<'a>(
    terms: impl IntoIterator<Item = &'a str>,
    cap: usize,
    measure: MeasureFn,
) -> usize {
    terms
        .into_iter()
        .map(measure)
        .filter(|&width| width <= cap)
        .max()
        .unwrap_or(0)
}

/// Resolve the two column widths for a definition list.
///
/// When `explicit_col1` is provided (used to align multiple sections to one
/// shared width) it takes precedence over the rows; either way the result is
/// clamped to `min(col1_max_width, available_width)`. Fails with
/// [`FormatError::NoWidthSource`] when there is nothing to compute from.
pub fn resolve_widths(
    explicit_col1: Option<usize>,
    rows: &[Row],
    config: &FormatterConfig,
    available_width: usize,
    measure: MeasureFn,
) -> Result<ResolvedWidths, FormatError> {
    if explicit_col1.is_none() && rows.is_empty() {
        return Err(FormatError::NoWidthSource);
    }
    let cap = config.col1_max_width.min(available_width);
    let col1 = explicit_col1
        .unwrap_or_else(|| max_term_width(rows.iter().map(|r| r.term.as_str()), cap, measure))
        .min(cap);
    let col2 = available_width as isize - col1 as isize - config.col_spacing as isize;
    Ok(ResolvedWidths { col1, col2 })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::text::display_width;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn col1_never_exceeds_cap_or_available(
            terms in proptest::collection::vec("[a-z-]{1,40}", 1..8),
            available in 1usize..120,
            col1_max in 1usize..40,
            spacing in 0usize..6,
        ) {
            let config = FormatterConfig::default()
                .col1_max_width(col1_max)
                .col_spacing(spacing);
            let rows: Vec<Row> = terms.iter().map(|t| Row::new(t.clone(), "")).collect();
            let widths = resolve_widths(None, &rows, &config, available, display_width).unwrap();

            prop_assert!(widths.col1 <= col1_max);
            prop_assert!(widths.col1 <= available);
            prop_assert_eq!(
                widths.col2,
                available as isize - widths.col1 as isize - spacing as isize
            );
        }
    }
}
