//! Tie-breakers decide between variables which are considered equally good by a
//! [`VariableSelector`].
//!
//! [`VariableSelector`]: crate::branching::variable_selection::VariableSelector
mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use tie_breaker::Direction;
pub use tie_breaker::TieBreaker;
