//! Main grid checker implementation.
//!
//! This module provides the primary `GridChecker` struct that runs the
//! per-line uniqueness checks and the concurrent fan-out/fan-in over a
//! whole grid: one task per row and one per column, 18 in total, joined
//! through a structured task group so no result is ever lost.

use crate::error::GridCheckError;
use crate::types::{CheckConfig, Grid, GridReport, LineKind, LineResult, GRID_SIZE};
use crate::utils::all_distinct;
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use std::pin::Pin;
use std::time::Instant;
use tokio::task::JoinSet;

/// Main checker that coordinates Sudoku grid validation.
///
/// The `GridChecker` handles all aspects of grid checking including:
/// - Per-line duplicate detection (rows and columns)
/// - Concurrent fan-out with one task per line
/// - Result aggregation into an overall verdict
/// - Optional timeout around the join
///
/// # Example
///
/// ```rust,no_run
/// use sudoku_check_lib::{Grid, GridChecker};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = GridChecker::new();
///     let report = checker.check_grid(&Grid::reference()).await?;
///     println!("Valid: {}", report.is_valid());
///     Ok(())
/// }
/// ```
pub struct GridChecker {
    /// Configuration settings for this checker instance
    config: CheckConfig,
}

impl GridChecker {
    /// Create a new grid checker with default configuration.
    ///
    /// Default settings:
    /// - Timeout: none (wait for every task)
    /// - Per-line timing: disabled
    pub fn new() -> Self {
        Self {
            config: CheckConfig::default(),
        }
    }

    /// Create a new grid checker with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sudoku_check_lib::{CheckConfig, GridChecker};
    /// use std::time::Duration;
    ///
    /// let config = CheckConfig::default()
    ///     .with_timeout(Duration::from_secs(2))
    ///     .with_timing(true);
    ///
    /// let checker = GridChecker::with_config(config);
    /// ```
    pub fn with_config(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Check a single row for duplicate values.
    ///
    /// Scans the 9 cells of the row left to right and reports `distinct =
    /// false` as soon as a value already seen in that row reappears.
    ///
    /// # Errors
    ///
    /// Returns `GridCheckError::LineOutOfRange` if `index` is not in [0, 8].
    pub fn check_row(&self, grid: &Grid, index: usize) -> Result<LineResult, GridCheckError> {
        validate_line_index(LineKind::Row, index)?;
        Ok(check_line(grid, LineKind::Row, index, self.config.timing))
    }

    /// Check a single column for duplicate values.
    ///
    /// Same contract as [`check_row`](Self::check_row), but iterates down
    /// a fixed column index across all 9 rows.
    pub fn check_column(&self, grid: &Grid, index: usize) -> Result<LineResult, GridCheckError> {
        validate_line_index(LineKind::Column, index)?;
        Ok(check_line(grid, LineKind::Column, index, self.config.timing))
    }

    /// Check every row and column of a grid concurrently.
    ///
    /// Spawns 18 independent tasks — one per row, one per column — into a
    /// [`JoinSet`], waits for all of them, and aggregates their results
    /// into a [`GridReport`]. Each task receives its own copy of the grid
    /// and owns its result, so no synchronization is needed beyond the
    /// final join.
    ///
    /// # Returns
    ///
    /// A `GridReport` with all 18 line results; `report.is_valid()` is the
    /// logical AND of every result.
    ///
    /// # Errors
    ///
    /// Returns `GridCheckError` if:
    /// - A check task panics or is cancelled before completing (fatal —
    ///   a lost line would make the verdict meaningless)
    /// - The configured timeout elapses before all tasks finish
    pub async fn check_grid(&self, grid: &Grid) -> Result<GridReport, GridCheckError> {
        let grid = *grid;
        let timing = self.config.timing;

        tracing::debug!(tasks = GRID_SIZE * 2, "spawning line check tasks");

        let mut tasks = JoinSet::new();
        for index in 0..GRID_SIZE {
            tasks.spawn(async move { check_line(&grid, LineKind::Row, index, timing) });
            tasks.spawn(async move { check_line(&grid, LineKind::Column, index, timing) });
        }

        let lines = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, join_all(tasks))
                .await
                .map_err(|_| GridCheckError::timeout("grid check", limit))??,
            None => join_all(tasks).await?,
        };

        let report = GridReport::from_lines(lines);
        tracing::debug!(valid = report.is_valid(), "all line checks joined");
        Ok(report)
    }

    /// Check a grid and yield line results as they complete.
    ///
    /// Results arrive in task completion order, not grid order; collect
    /// them into a [`GridReport`] if ordering matters. Must be called from
    /// within a tokio runtime.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use futures::StreamExt;
    /// use sudoku_check_lib::{Grid, GridChecker};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let checker = GridChecker::new();
    ///     let mut stream = checker.check_grid_stream(&Grid::reference());
    ///     while let Some(result) = stream.next().await {
    ///         let line = result?;
    ///         println!("{} {}: {}", line.kind, line.index + 1, line.distinct);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn check_grid_stream(
        &self,
        grid: &Grid,
    ) -> Pin<Box<dyn Stream<Item = Result<LineResult, GridCheckError>> + Send>> {
        let grid = *grid;
        let timing = self.config.timing;

        let handles: FuturesUnordered<_> = (0..GRID_SIZE)
            .flat_map(|index| [(LineKind::Row, index), (LineKind::Column, index)])
            .map(|(kind, index)| {
                tokio::spawn(async move { check_line(&grid, kind, index, timing) })
            })
            .collect();

        Box::pin(handles.map(|joined| joined.map_err(GridCheckError::from)))
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Update the configuration for this checker.
    pub fn set_config(&mut self, config: CheckConfig) {
        self.config = config;
    }
}

impl Default for GridChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain a task group, surfacing the first join failure as a fatal error.
async fn join_all(mut tasks: JoinSet<LineResult>) -> Result<Vec<LineResult>, GridCheckError> {
    let mut lines = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        lines.push(joined?);
    }
    Ok(lines)
}

/// Run one line check. This is the body of every spawned task.
fn check_line(grid: &Grid, kind: LineKind, index: usize, timing: bool) -> LineResult {
    let started = timing.then(Instant::now);
    let values = match kind {
        LineKind::Row => grid.row(index),
        LineKind::Column => grid.column(index),
    };
    let distinct = all_distinct(&values);
    tracing::debug!(%kind, index, distinct, "line check complete");

    LineResult {
        kind,
        index,
        distinct,
        check_duration: started.map(|s| s.elapsed()),
    }
}

fn validate_line_index(kind: LineKind, index: usize) -> Result<(), GridCheckError> {
    if index >= GRID_SIZE {
        return Err(GridCheckError::line_out_of_range(kind, index));
    }
    Ok(())
}
