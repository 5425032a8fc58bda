//! Client-side row filtering for the listing tables.
//!
//! A [`RowFilter`] holds the ordered list of column indices that take part
//! in the match. Each row is tested independently: it is shown when the
//! uppercased query is a substring of at least one target cell, hidden
//! otherwise, and left alone when none of the target cells exist (header
//! rows made of `th` cells).

use log::debug;

/// A filter query, case-folded once up front
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterQuery {
    needle: String,
}

impl FilterQuery {
    pub fn new(text: &str) -> Self {
        FilterQuery {
            needle: text.to_uppercase(),
        }
    }

    /// Case-insensitive substring test. The empty query matches everything.
    pub fn matches(&self, cell_text: &str) -> bool {
        cell_text.to_uppercase().contains(&self.needle)
    }
}

/// Outcome of filtering a single row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowDecision {
    /// At least one target cell contains the query
    Show,
    /// Target cells exist but none contains the query
    Hide,
    /// The row has none of the target cells; its visibility is not changed
    Untouched,
}

/// Read access to the text of a row's data cells
///
/// `None` means the row has no data cell at that position. Implemented for
/// in-memory rows here and for live `<tr>` elements in the browser adapter.
pub trait CellSource {
    fn cell_text(&self, index: usize) -> Option<String>;
}

impl<S: AsRef<str>> CellSource for [S] {
    fn cell_text(&self, index: usize) -> Option<String> {
        self.get(index).map(|cell| cell.as_ref().to_string())
    }
}

impl<S: AsRef<str>> CellSource for Vec<S> {
    fn cell_text(&self, index: usize) -> Option<String> {
        self.as_slice().cell_text(index)
    }
}

/// Substring filter over a fixed, ordered set of columns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowFilter {
    columns: Vec<usize>,
}

impl RowFilter {
    pub fn new(columns: impl Into<Vec<usize>>) -> Self {
        RowFilter {
            columns: columns.into(),
        }
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Decide the visibility of one row
    ///
    /// Columns beyond the row's cell count are skipped. If every target
    /// column is missing the row is [`RowDecision::Untouched`].
    pub fn decide<R: CellSource + ?Sized>(&self, query: &FilterQuery, row: &R) -> RowDecision {
        let mut has_target = false;

        for &index in &self.columns {
            let Some(text) = row.cell_text(index) else {
                continue;
            };
            has_target = true;
            if query.matches(&text) {
                return RowDecision::Show;
            }
        }

        if has_target {
            RowDecision::Hide
        } else {
            RowDecision::Untouched
        }
    }

    /// Filter a whole table, returning one decision per row in order
    ///
    /// # Arguments
    /// * `query_text` - The raw text typed in the filter input
    /// * `rows` - The table rows in document order
    ///
    /// # Returns
    /// * `Vec<RowDecision>` - One decision per input row
    pub fn apply<R: CellSource>(&self, query_text: &str, rows: &[R]) -> Vec<RowDecision> {
        let query = FilterQuery::new(query_text);
        let decisions: Vec<RowDecision> = rows.iter().map(|row| self.decide(&query, row)).collect();

        debug!(
            "filter {:?} over columns {:?}: {} shown, {} hidden, {} untouched",
            query_text,
            self.columns,
            decisions.iter().filter(|d| **d == RowDecision::Show).count(),
            decisions.iter().filter(|d| **d == RowDecision::Hide).count(),
            decisions.iter().filter(|d| **d == RowDecision::Untouched).count(),
        );

        decisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Apple", "1"],
            vec!["Banana", "2"],
            vec!["apricot", "3"],
        ]
    }

    #[test]
    fn substring_match_on_first_column() {
        let filter = RowFilter::new([0]);
        let decisions = filter.apply("ap", &fruit());
        assert_eq!(
            decisions,
            vec![RowDecision::Show, RowDecision::Hide, RowDecision::Show]
        );
    }

    #[test]
    fn any_target_column_may_match() {
        let filter = RowFilter::new([0, 1]);
        let decisions = filter.apply("2", &fruit());
        assert_eq!(
            decisions,
            vec![RowDecision::Hide, RowDecision::Show, RowDecision::Hide]
        );
    }

    #[test]
    fn untested_columns_are_ignored() {
        let filter = RowFilter::new([0]);
        let decisions = filter.apply("3", &fruit());
        assert!(decisions.iter().all(|d| *d == RowDecision::Hide));
    }

    #[test]
    fn header_rows_are_untouched() {
        let header: Vec<&str> = Vec::new();
        let filter = RowFilter::new([0, 1, 2]);
        let query = FilterQuery::new("zzz");
        assert_eq!(filter.decide(&query, &header), RowDecision::Untouched);
    }

    #[test]
    fn short_rows_skip_missing_columns() {
        let filter = RowFilter::new([0, 1, 2, 3]);
        let short = vec!["Reel 12"];
        assert_eq!(
            filter.decide(&FilterQuery::new("reel"), &short),
            RowDecision::Show
        );
        assert_eq!(
            filter.decide(&FilterQuery::new("tape"), &short),
            RowDecision::Hide
        );
    }

    #[test]
    fn empty_query_shows_rows_with_cells() {
        let filter = RowFilter::new([1]);
        let decisions = filter.apply("", &fruit());
        assert!(decisions.iter().all(|d| *d == RowDecision::Show));
    }

    #[test]
    fn query_is_case_folded_once() {
        let query = FilterQuery::new("Apr");
        assert!(query.matches("APRICOT"));
        assert!(query.matches("apricot"));
        assert!(!query.matches("apple"));
    }
}
