//! The table sorter
//!
//! A bubble sort over the data rows of one column: each pass scans adjacent
//! pairs top to bottom and stops at the first out-of-order pair, swaps it,
//! and restarts from the top. When a pass completes with no swap and not a
//! single swap has happened overall, the direction toggles from ascending to
//! descending and sorting continues; this is what makes re-sorting an
//! already-sorted table flip its order. A pinned direction disables the
//! toggle.
//!
//! The sorter never moves rows itself. It computes a permutation over row
//! indices which [`Table::apply_order`] then applies, so a comparison fault
//! partway through leaves the table untouched.

use crate::compare::compare_cells;
use crate::config::SortDirection;
use crate::error::SortResult;
use crate::table::Table;
use std::cmp::Ordering;

/// What a sort run did: the direction it converged in and how much work the
/// scan performed. Surfaced by the CLI's `--debug` diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    /// Direction the final converged pass ran in
    pub direction: SortDirection,
    /// Total adjacent-pair swaps across all passes
    pub swaps: usize,
    /// Number of top-to-bottom scans, including the converging ones
    pub passes: usize,
}

/// Sorter for one column of a table
pub struct TableSorter {
    column: usize,
    direction: Option<SortDirection>,
}

impl TableSorter {
    /// Sorter for the given zero-based column, starting ascending with the
    /// zero-swap toggle enabled
    pub fn new(column: usize) -> Self {
        Self {
            column,
            direction: None,
        }
    }

    /// Pin the direction, disabling the toggle
    pub fn with_direction(mut self, direction: Option<SortDirection>) -> Self {
        self.direction = direction;
        self
    }

    /// Compute the sorted row order without moving anything.
    ///
    /// `order[i]` is the current index of the row that belongs at position
    /// `i`. Comparison is restricted to the sorter's column for the whole
    /// run; a row without that column is a [`ColumnOutOfRange`] error and no
    /// order is produced.
    ///
    /// [`ColumnOutOfRange`]: crate::error::SortError::ColumnOutOfRange
    pub fn sorted_order(&self, table: &Table) -> SortResult<(Vec<usize>, SortOutcome)> {
        let mut order: Vec<usize> = (0..table.len()).collect();
        let mut direction = self.direction.unwrap_or(SortDirection::Ascending);
        let toggle_enabled = self.direction.is_none();
        let mut swaps = 0usize;
        let mut passes = 0usize;

        loop {
            passes += 1;
            match self.first_out_of_order(table, &order, direction)? {
                Some(i) => {
                    order.swap(i, i + 1);
                    swaps += 1;
                }
                None => {
                    // Trivial ascending convergence: not one swap happened,
                    // so flip once and keep going.
                    if toggle_enabled && swaps == 0 && direction == SortDirection::Ascending {
                        direction = direction.flipped();
                        continue;
                    }
                    break;
                }
            }
        }

        Ok((
            order,
            SortOutcome {
                direction,
                swaps,
                passes,
            },
        ))
    }

    /// Sort the table in place: compute the order, then apply it
    pub fn sort(&self, table: &mut Table) -> SortResult<SortOutcome> {
        let (order, outcome) = self.sorted_order(table)?;
        table.apply_order(&order)?;
        Ok(outcome)
    }

    /// Scan adjacent pairs top to bottom and return the index of the first
    /// pair that is out of order for `direction`, if any
    fn first_out_of_order(
        &self,
        table: &Table,
        order: &[usize],
        direction: SortDirection,
    ) -> SortResult<Option<usize>> {
        for i in 0..order.len().saturating_sub(1) {
            let x = table.cell(order[i], self.column)?;
            let y = table.cell(order[i + 1], self.column)?;

            let out_of_order = match direction {
                SortDirection::Ascending => compare_cells(x, y) == Ordering::Greater,
                SortDirection::Descending => compare_cells(x, y) == Ordering::Less,
            };
            if out_of_order {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }
}
