//! Sudoku and N-Queens models on top of the Gourd constraint solver.
//!
//! The engine itself lives in [`core`]; the [`models`] translate the puzzles into variables and
//! constraints and render the solutions.
pub use gourd_core as core;

pub mod models;
