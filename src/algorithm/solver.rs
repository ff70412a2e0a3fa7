//! Bounded Algorithm X search over a sparse exact-cover matrix
//!
//! Rows and columns are dense integer indices into arenas instead of linked
//! nodes. Covering a row removes every conflicting row and the row's columns
//! from the live sets and records what was removed; uncovering restores the
//! record in reverse, so each backtrack returns the search to exactly the
//! state it had before the row was chosen.

use crate::algorithm::bitset::IndexBitset;
use crate::io::error::{AlgorithmError, Result};

/// A registered row: caller label plus the sorted, distinct columns it covers
#[derive(Debug, Clone)]
struct Row<L> {
    label: L,
    columns: Vec<usize>,
}

/// Exact-cover problem with rows registered one at a time
///
/// Every column is primary: a solution selects rows covering each column
/// exactly once.
#[derive(Debug, Clone)]
pub struct ExactCoverSolver<L> {
    column_count: usize,
    rows: Vec<Row<L>>,
    column_rows: Vec<Vec<usize>>,
}

/// Removals made while covering one row, replayed backwards to uncover it
struct CoverRecord {
    rows: Vec<usize>,
    columns: Vec<usize>,
}

/// Live state of one `find` call
struct Search {
    live_rows: IndexBitset,
    live_columns: IndexBitset,
    column_sizes: Vec<usize>,
    partial: Vec<usize>,
    solutions: Vec<Vec<usize>>,
    limit: usize,
}

impl<L: Clone> ExactCoverSolver<L> {
    /// Create a problem over `column_count` columns and no rows
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            rows: Vec::new(),
            column_rows: vec![Vec::new(); column_count],
        }
    }

    /// Number of columns in the universe
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of registered rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Register a row covering `columns`
    ///
    /// Duplicate column indices within a row are collapsed.
    ///
    /// # Errors
    ///
    /// Returns an unknown column error if any index is not below the column
    /// count. The row is not registered in that case.
    pub fn add_constraint(&mut self, label: L, columns: &[usize]) -> Result<()> {
        let row = self.rows.len();

        let mut columns = columns.to_vec();
        columns.sort_unstable();
        columns.dedup();

        if let Some(&column) = columns.iter().find(|&&column| column >= self.column_count) {
            return Err(AlgorithmError::UnknownColumn {
                row,
                column,
                column_count: self.column_count,
            });
        }

        for &column in &columns {
            if let Some(rows) = self.column_rows.get_mut(column) {
                rows.push(row);
            }
        }
        self.rows.push(Row { label, columns });

        Ok(())
    }

    /// Find up to `limit` solutions, each given as the labels of its rows
    ///
    /// The search stops as soon as `limit` solutions are recorded, so
    /// `find(2)` is enough to decide uniqueness. Rows in a solution appear in
    /// the order they were chosen.
    pub fn find(&self, limit: usize) -> Vec<Vec<L>> {
        if limit == 0 {
            return Vec::new();
        }

        let mut search = Search {
            live_rows: IndexBitset::full(self.rows.len()),
            live_columns: IndexBitset::full(self.column_count),
            column_sizes: self.column_rows.iter().map(Vec::len).collect(),
            partial: Vec::new(),
            solutions: Vec::new(),
            limit,
        };

        self.search(&mut search);

        search
            .solutions
            .iter()
            .map(|solution| {
                solution
                    .iter()
                    .filter_map(|&row| self.rows.get(row).map(|row| row.label.clone()))
                    .collect()
            })
            .collect()
    }

    /// Number of solutions found, stopping at `limit`
    pub fn count(&self, limit: usize) -> usize {
        self.find(limit).len()
    }

    /// Recurse until every column is covered; returns true once the limit is hit
    fn search(&self, search: &mut Search) -> bool {
        let Some(column) = Self::choose_column(search) else {
            search.solutions.push(search.partial.clone());
            return search.solutions.len() >= search.limit;
        };

        let candidates: Vec<usize> = self
            .column_rows
            .get(column)
            .map(|rows| {
                rows.iter()
                    .copied()
                    .filter(|&row| search.live_rows.contains(row))
                    .collect()
            })
            .unwrap_or_default();

        for row in candidates {
            search.partial.push(row);
            let record = self.cover(search, row);

            let done = self.search(search);

            self.uncover(search, record);
            search.partial.pop();

            if done {
                return true;
            }
        }

        false
    }

    /// Live column with the fewest live rows, ties to the lowest index
    ///
    /// `None` means every column is covered. A chosen column with no live
    /// rows yields no candidates, which ends that branch.
    fn choose_column(search: &Search) -> Option<usize> {
        search
            .live_columns
            .iter()
            .min_by_key(|&column| search.column_sizes.get(column).copied().unwrap_or(0))
    }

    /// Select `row`: drop every live row sharing a column with it, then its columns
    fn cover(&self, search: &mut Search, row: usize) -> CoverRecord {
        let mut record = CoverRecord {
            rows: Vec::new(),
            columns: Vec::new(),
        };
        let Some(selected) = self.rows.get(row) else {
            return record;
        };

        for &column in &selected.columns {
            for &other in self.column_rows.get(column).map_or(&[][..], Vec::as_slice) {
                if search.live_rows.remove(other) {
                    self.adjust_sizes(search, other, false);
                    record.rows.push(other);
                }
            }
            if search.live_columns.remove(column) {
                record.columns.push(column);
            }
        }

        record
    }

    /// Undo a cover in reverse order
    fn uncover(&self, search: &mut Search, record: CoverRecord) {
        for &column in record.columns.iter().rev() {
            search.live_columns.insert(column);
        }
        for &row in record.rows.iter().rev() {
            search.live_rows.insert(row);
            self.adjust_sizes(search, row, true);
        }
    }

    fn adjust_sizes(&self, search: &mut Search, row: usize, restore: bool) {
        let Some(row) = self.rows.get(row) else {
            return;
        };
        for &column in &row.columns {
            if let Some(size) = search.column_sizes.get_mut(column) {
                if restore {
                    *size += 1;
                } else {
                    *size -= 1;
                }
            }
        }
    }
}
