//! Core data types for Sudoku grid validation.
//!
//! This module defines all the main data structures used throughout the library,
//! including the grid itself, per-line check results, aggregated reports,
//! and configuration options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of rows and columns in a Sudoku grid.
pub const GRID_SIZE: usize = 9;

/// An immutable 9×9 Sudoku grid.
///
/// The grid is constructed once and never mutated afterwards. It is `Copy`
/// (81 bytes), so every check task receives its own copy and no shared
/// mutable state ever exists between concurrent checks.
///
/// # Example
///
/// ```rust
/// use sudoku_check_lib::Grid;
///
/// let grid = Grid::reference();
/// assert_eq!(grid.row(0), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(grid.column(0), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid from a 9×9 cell matrix.
    ///
    /// Cell values are taken as-is; the checkers only care about duplicates,
    /// not about the 1–9 value range.
    pub fn new(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// The built-in reference grid from the original exercise.
    ///
    /// Each row is a cyclic permutation of 1..9, so every row and every
    /// column contains each value exactly once.
    pub fn reference() -> Self {
        Self::new([
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [2, 3, 4, 5, 6, 7, 8, 9, 1],
            [3, 4, 5, 6, 7, 8, 9, 1, 2],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [5, 6, 7, 8, 9, 1, 2, 3, 4],
            [6, 7, 8, 9, 1, 2, 3, 4, 5],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [8, 9, 1, 2, 3, 4, 5, 6, 7],
            [9, 1, 2, 3, 4, 5, 6, 7, 8],
        ])
    }

    /// The value at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// The 9 values of row `index`, left to right.
    pub fn row(&self, index: usize) -> [u8; GRID_SIZE] {
        self.cells[index]
    }

    /// The 9 values of column `index`, top to bottom.
    pub fn column(&self, index: usize) -> [u8; GRID_SIZE] {
        let mut values = [0u8; GRID_SIZE];
        for (row, value) in values.iter_mut().enumerate() {
            *value = self.cells[row][index];
        }
        values
    }

    /// Return a copy of this grid with one cell replaced.
    ///
    /// Useful for tests and for callers that want to probe how a single
    /// mutation affects validity without touching the original grid.
    pub fn with_cell(&self, row: usize, col: usize, value: u8) -> Self {
        let mut cells = self.cells;
        cells[row][col] = value;
        Self { cells }
    }
}

impl From<[[u8; GRID_SIZE]; GRID_SIZE]> for Grid {
    fn from(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self::new(cells)
    }
}

/// Which kind of line a check examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// A horizontal line, indexed top to bottom
    #[serde(rename = "row")]
    Row,

    /// A vertical line, indexed left to right
    #[serde(rename = "column")]
    Column,
}

/// Result of checking a single row or column for duplicate values.
///
/// Each result is produced by exactly one check task and is never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineResult {
    /// Whether this result describes a row or a column
    pub kind: LineKind,

    /// Index of the line within the grid, in [0, 8]
    pub index: usize,

    /// `true` if no value appears twice in this line
    pub distinct: bool,

    /// How long the line check took, when timing is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_duration: Option<Duration>,
}

/// Aggregated outcome of a full grid check.
///
/// Holds one [`LineResult`] for each of the 9 rows and 9 columns. The
/// overall verdict is the logical AND of every line's `distinct` flag:
/// the grid is valid iff all 18 results are true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridReport {
    /// All 18 line results, rows first, then columns, each sorted by index
    pub lines: Vec<LineResult>,
}

impl GridReport {
    /// Build a report from a set of line results, normalising the order
    /// to rows first, then columns, each sorted by index.
    pub fn from_lines(mut lines: Vec<LineResult>) -> Self {
        lines.sort_by_key(|line| (line.kind == LineKind::Column, line.index));
        Self { lines }
    }

    /// Overall verdict: `true` iff every checked line is duplicate-free.
    pub fn is_valid(&self) -> bool {
        self.lines.iter().all(|line| line.distinct)
    }

    /// Look up the result for a specific line, if present.
    pub fn line(&self, kind: LineKind, index: usize) -> Option<&LineResult> {
        self.lines
            .iter()
            .find(|line| line.kind == kind && line.index == index)
    }

    /// The lines that failed their uniqueness check.
    pub fn violations(&self) -> Vec<&LineResult> {
        self.lines.iter().filter(|line| !line.distinct).collect()
    }
}

/// Configuration options for grid checking operations.
///
/// This struct allows fine-tuning of the checking behavior. The defaults
/// reproduce the original semantics: wait for every task with no deadline
/// and record no timing information.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Optional bound on how long the fan-out/join may take overall.
    /// `None` (the default) waits for every task indefinitely.
    pub timeout: Option<Duration>,

    /// Whether to record per-line check durations in the results.
    /// Default: false
    pub timing: bool,
}

impl CheckConfig {
    /// Bound the overall check with a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable per-line timing capture.
    pub fn with_timing(mut self, enabled: bool) -> Self {
        self.timing = enabled;
        self
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Row => write!(f, "row"),
            LineKind::Column => write!(f, "column"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_grid_is_cyclic() {
        let grid = Grid::reference();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let expected = ((row + col) % GRID_SIZE) as u8 + 1;
                assert_eq!(grid.cell(row, col), expected);
            }
        }
    }

    #[test]
    fn test_column_accessor() {
        let grid = Grid::reference();
        assert_eq!(grid.column(1), [2, 3, 4, 5, 6, 7, 8, 9, 1]);
        assert_eq!(grid.column(8), [9, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let grid = Grid::reference();
        let mutated = grid.with_cell(0, 0, 9);
        assert_eq!(grid.cell(0, 0), 1);
        assert_eq!(mutated.cell(0, 0), 9);
    }

    #[test]
    fn test_report_verdict_and_violations() {
        let lines = vec![
            LineResult {
                kind: LineKind::Column,
                index: 3,
                distinct: false,
                check_duration: None,
            },
            LineResult {
                kind: LineKind::Row,
                index: 0,
                distinct: true,
                check_duration: None,
            },
        ];
        let report = GridReport::from_lines(lines);

        // Normalised order: rows before columns
        assert_eq!(report.lines[0].kind, LineKind::Row);
        assert!(!report.is_valid());
        assert_eq!(report.violations().len(), 1);
        assert!(report.line(LineKind::Column, 3).is_some());
        assert!(report.line(LineKind::Row, 5).is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = CheckConfig::default()
            .with_timeout(Duration::from_secs(2))
            .with_timing(true);
        assert_eq!(config.timeout, Some(Duration::from_secs(2)));
        assert!(config.timing);
    }
}
