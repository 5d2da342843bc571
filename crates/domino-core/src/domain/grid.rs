//! Assignment of sampled patterns to grid cells.
//!
//! Patterns are placed **column-major**: the sampled sequence is cut into
//! `columns` chunks of `rows` patterns each, and chunk `i` fills column `i`
//! from top to bottom.  For a 2×2 grid and the sequence `[A, B, C, D]`:
//!
//! ```text
//!  A  C
//!  B  D
//! ```

use std::collections::HashSet;

use thiserror::Error;

use super::pattern::DotPattern;

/// Errors raised when a pattern sequence cannot fill a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The sequence length differs from `rows * columns`.
    #[error("grid of {rows}x{columns} needs {expected} patterns, got {actual}")]
    SizeMismatch {
        rows: usize,
        columns: usize,
        expected: usize,
        actual: usize,
    },

    /// `rows * columns` does not fit in a `usize`.
    #[error("grid of {rows}x{columns} has more cells than can be counted")]
    TooManyCells { rows: usize, columns: usize },

    /// The same pattern appears twice in the sequence.
    #[error("pattern {0} appears more than once")]
    DuplicatePattern(DotPattern),
}

/// One filled cell of a [`PlacementGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    /// Position in the original sampled sequence (`column * rows + row`).
    pub index: usize,
    pub pattern: DotPattern,
}

/// A rows × columns grid of distinct patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGrid {
    rows: usize,
    columns: Vec<Vec<DotPattern>>,
}

impl PlacementGrid {
    /// Fills a grid column-major from `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooManyCells`] if `rows * columns` overflows,
    /// [`GridError::SizeMismatch`] if `patterns.len() != rows * columns`
    /// and [`GridError::DuplicatePattern`] if a pattern repeats.
    pub fn fill(rows: usize, columns: usize, patterns: Vec<DotPattern>) -> Result<Self, GridError> {
        let expected = rows
            .checked_mul(columns)
            .ok_or(GridError::TooManyCells { rows, columns })?;
        if patterns.len() != expected {
            return Err(GridError::SizeMismatch {
                rows,
                columns,
                expected,
                actual: patterns.len(),
            });
        }

        let mut seen = HashSet::with_capacity(expected);
        if let Some(duplicate) = patterns.iter().find(|p| !seen.insert(**p)) {
            return Err(GridError::DuplicatePattern(*duplicate));
        }

        // `chunks` panics on a zero chunk size; an empty grid has no columns.
        let columns = if rows == 0 {
            vec![Vec::new(); columns]
        } else {
            patterns.chunks(rows).map(<[DotPattern]>::to_vec).collect()
        };

        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of filled cells.
    pub fn len(&self) -> usize {
        self.rows * self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pattern at (`column`, `row`), if inside the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<DotPattern> {
        self.columns.get(column)?.get(row).copied()
    }

    /// The patterns of each column, top to bottom.
    pub fn columns(&self) -> &[Vec<DotPattern>] {
        &self.columns
    }

    /// Iterates over every cell, column by column.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        let rows = self.rows;
        self.columns.iter().enumerate().flat_map(move |(column, patterns)| {
            patterns.iter().enumerate().map(move |(row, &pattern)| Placement {
                column,
                row,
                index: column * rows + row,
                pattern,
            })
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn p(bits: u16) -> DotPattern {
        DotPattern::from_bits(bits)
    }

    #[test]
    fn test_fill_is_column_major() {
        // Arrange
        let (a, b, c, d) = (p(1), p(2), p(3), p(4));

        // Act
        let grid = PlacementGrid::fill(2, 2, vec![a, b, c, d]).unwrap();

        // Assert: column 0 = [A, B], column 1 = [C, D]
        assert_eq!(grid.columns(), &[vec![a, b], vec![c, d]]);
        assert_eq!(grid.get(1, 0), Some(c));
        assert_eq!(grid.get(0, 1), Some(b));
    }

    #[test]
    fn test_fill_tall_grid_keeps_sequence_within_column() {
        let seq: Vec<_> = (1..=6).map(p).collect();

        let grid = PlacementGrid::fill(3, 2, seq).unwrap();

        assert_eq!(grid.columns()[0], vec![p(1), p(2), p(3)]);
        assert_eq!(grid.columns()[1], vec![p(4), p(5), p(6)]);
    }

    #[test]
    fn test_placements_report_column_major_index() {
        let seq: Vec<_> = (10..16).map(p).collect();
        let grid = PlacementGrid::fill(2, 3, seq.clone()).unwrap();

        let placements: Vec<_> = grid.placements().collect();

        assert_eq!(placements.len(), 6);
        for placement in &placements {
            assert_eq!(placement.index, placement.column * 2 + placement.row);
            assert_eq!(seq[placement.index], placement.pattern);
        }
    }

    #[test]
    fn test_get_outside_grid_is_none() {
        let grid = PlacementGrid::fill(1, 2, vec![p(1), p(2)]).unwrap();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 1), None);
    }

    #[test]
    fn test_fill_rejects_short_sequence() {
        assert_eq!(
            PlacementGrid::fill(2, 2, vec![p(1), p(2), p(3)]),
            Err(GridError::SizeMismatch {
                rows: 2,
                columns: 2,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_fill_rejects_overflowing_cell_count() {
        // Arrange: rows * columns wraps to 0 without a checked multiply
        let rows = usize::MAX / 2 + 1;

        // Act
        let result = PlacementGrid::fill(rows, 2, Vec::new());

        // Assert
        assert_eq!(result, Err(GridError::TooManyCells { rows, columns: 2 }));
    }

    #[test]
    fn test_fill_rejects_repeated_pattern() {
        assert_eq!(
            PlacementGrid::fill(2, 1, vec![p(7), p(7)]),
            Err(GridError::DuplicatePattern(p(7)))
        );
    }

    #[test]
    fn test_len_counts_cells() {
        let grid = PlacementGrid::fill(3, 1, vec![p(1), p(2), p(3)]).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.column_count(), 1);
        assert!(!grid.is_empty());
    }
}
