//! Provides the implementations of [`Brancher`] available in the solver.
//!
//! [`Brancher`]: crate::branching::Brancher
mod independent_variable_value_brancher;

pub use independent_variable_value_brancher::DefaultBrancher;
pub use independent_variable_value_brancher::IndependentVariableValueBrancher;
