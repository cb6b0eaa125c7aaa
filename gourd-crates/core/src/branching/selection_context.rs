#[cfg(doc)]
use crate::branching::Brancher;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::gourd_assert_advanced;
use crate::predicates::Predicate;

/// The context provided to the [`Brancher`]; it allows the retrieval of domain values of
/// variables.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    /// Returns the number of values in the domain of `var`.
    pub fn get_size_of_domain<Var: IntegerVariable>(&self, var: Var) -> u32 {
        var.size(self.assignments)
    }

    pub fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(self.assignments)
    }

    pub fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.assignments)
    }

    pub fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(self.assignments, value)
    }

    pub fn is_integer_fixed<Var: IntegerVariable>(&self, var: Var) -> bool {
        self.lower_bound(var.clone()) == self.upper_bound(var)
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }

    /// Checks that a decision does not already hold nor is already falsified.
    pub(crate) fn check_decision(&self, decision: Predicate) -> Predicate {
        gourd_assert_advanced!(
            self.assignments.evaluate_predicate(decision).is_none(),
            "The decision {decision} is already decided, this indicates a wrongly implemented \
             variable/value selector"
        );
        decision
    }

    #[cfg(test)]
    pub(crate) fn create_for_testing(domains: Vec<(i32, i32)>) -> Assignments {
        let mut assignments = Assignments::default();
        for (lower_bound, upper_bound) in domains {
            let _ = assignments.grow(lower_bound, upper_bound);
        }
        assignments
    }
}
