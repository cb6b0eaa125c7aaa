use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// into the search process.
pub trait VariableSelector<Var> {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables which have been passed to the
    /// [`VariableSelector`] have been assigned. Otherwise it should return the variable to
    /// branch on next.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Var>;

    /// A function which is called after a conflict has been found; `scope` contains the variables
    /// of the constraint which failed.
    fn on_conflict(&mut self, _scope: &[DomainId]) {}
}

impl<Var> VariableSelector<Var> for Box<dyn VariableSelector<Var>> {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<Var> {
        self.as_mut().select_variable(context)
    }

    fn on_conflict(&mut self, scope: &[DomainId]) {
        self.as_mut().on_conflict(scope)
    }
}
