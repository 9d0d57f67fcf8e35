//! # Sudoku Check Library
//!
//! A small library for validating the row and column uniqueness constraints
//! of a 9×9 Sudoku grid using concurrent per-line check tasks.
//!
//! One task is spawned per row and per column (18 in total); all of them
//! read the same immutable grid, run to completion independently, and are
//! joined before the overall verdict is computed as the logical AND of
//! every line result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sudoku_check_lib::{Grid, GridChecker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = GridChecker::new();
//!     let report = checker.check_grid(&Grid::reference()).await?;
//!
//!     println!("Sudoku is {}", if report.is_valid() { "valid" } else { "invalid" });
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Concurrent fan-out**: one independent task per row and column
//! - **Structured join**: every launched task is joined exactly once
//! - **Honest aggregation**: the verdict is the AND of all 18 results
//! - **Configurable**: optional join timeout and per-line timing

// Re-export main public API types and functions
// This makes them available as sudoku_check_lib::TypeName
pub use checker::GridChecker;
pub use error::GridCheckError;
pub use types::{CheckConfig, Grid, GridReport, LineKind, LineResult, GRID_SIZE};
pub use utils::all_distinct;

// Internal modules - these are not part of the public API
mod checker;
mod error;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, GridCheckError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
