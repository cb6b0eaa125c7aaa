#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;

/// A trait for tie-breaking between variables which have the same value according to a
/// [`VariableSelector`].
///
/// Variables are offered one at a time through [`TieBreaker::consider`]; [`TieBreaker::select`]
/// returns the chosen variable and resets the tie-breaker for the next selection.
pub trait TieBreaker<Var, Value> {
    /// Consider the next variable together with its value according to the selector.
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected variable (if any) and resets the tie-breaker.
    fn select(&mut self) -> Option<Var>;

    /// Whether the tie-breaker looks for the maximum or the minimum value.
    fn get_direction(&self) -> Direction;
}

/// Whether the tie-breaker should find the variable with the maximum or the minimum value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
