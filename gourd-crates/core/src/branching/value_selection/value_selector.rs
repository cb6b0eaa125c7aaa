use crate::branching::SelectionContext;
use crate::predicates::Predicate;

/// A trait containing the interface for [`ValueSelector`]s, specifying the appropriate hooks into
/// the search process.
pub trait ValueSelector<Var> {
    /// Determines which value in the domain of `decision_variable` to branch next on.
    ///
    /// The returned [`Predicate`] is posted in the left branch and its negation in the right
    /// branch; both should remove at least one value from the domain.
    fn select_value(&mut self, context: &SelectionContext, decision_variable: Var) -> Predicate;
}

impl<Var> ValueSelector<Var> for Box<dyn ValueSelector<Var>> {
    fn select_value(&mut self, context: &SelectionContext, decision_variable: Var) -> Predicate {
        self.as_mut().select_value(context, decision_variable)
    }
}
