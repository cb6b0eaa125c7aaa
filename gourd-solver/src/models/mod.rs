//! The puzzles which can be solved from the command line.
pub mod queens;
pub mod sudoku;
