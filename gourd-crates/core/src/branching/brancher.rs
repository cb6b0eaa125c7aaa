use crate::basic_types::SolutionReference;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::predicates::Predicate;

/// A trait for definining a branching strategy (oftentimes utilising a [`VariableSelector`] and a
/// [`ValueSelector`]).
///
/// The search posts the returned [`Predicate`] in the left branch and its negation in the right
/// branch, so the two children partition the current domain of the selected variable.
pub trait Brancher {
    /// Returns the next decision concerning a single variable and value; it returns the
    /// [`Predicate`] corresponding to this decision (or [`None`] if all variables under
    /// consideration are assigned).
    ///
    /// The returned predicate should not hold in the current state.
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate>;

    /// Called when a conflict is encountered during propagation; `scope` contains the variables
    /// of the constraint which detected the conflict.
    fn on_conflict(&mut self, _scope: &[DomainId]) {}

    /// Called whenever the search undoes a decision.
    fn on_backtrack(&mut self) {}

    /// Called when a solution has been found.
    fn on_solution(&mut self, _solution: SolutionReference) {}
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate> {
        (**self).next_decision(context)
    }

    fn on_conflict(&mut self, scope: &[DomainId]) {
        (**self).on_conflict(scope)
    }

    fn on_backtrack(&mut self) {
        (**self).on_backtrack()
    }

    fn on_solution(&mut self, solution: SolutionReference) {
        (**self).on_solution(solution)
    }
}
