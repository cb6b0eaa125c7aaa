use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::gourd_assert_simple;

/// A trait which specifies the common behaviours of [`Solution`] and [`SolutionReference`].
pub trait ProblemSolution {
    /// Returns the number of defined [`DomainId`]s.
    fn num_domains(&self) -> usize;

    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32;
}

/// A solution which keeps reference to the assignments of the solver; only valid while the solver
/// is positioned at the solution.
#[derive(Debug, Copy, Clone)]
pub struct SolutionReference<'a> {
    assignments: &'a Assignments,
}

impl<'a> SolutionReference<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> SolutionReference<'a> {
        gourd_assert_simple!(assignments.all_assigned());
        SolutionReference { assignments }
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + 'a {
        self.assignments.get_domains()
    }
}

impl ProblemSolution for SolutionReference<'_> {
    fn num_domains(&self) -> usize {
        self.assignments.num_domains() as usize
    }

    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        // Every domain is a singleton, so both bounds coincide.
        var.lower_bound(self.assignments)
    }
}

/// An assignment of a value to every variable of the model.
///
/// A [`Solution`] owns its values and stays valid after the search moves on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    values: KeyedVec<DomainId, i32>,
}

impl Solution {
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.values.keys()
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        self.values.get(domain_id).is_some()
    }

    /// Iterates over the variables together with their assigned values, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (DomainId, i32)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }

    /// The values of the given variables, in the given order.
    pub fn values_of<Var: IntegerVariable>(&self, variables: &[Var]) -> Vec<i32> {
        variables
            .iter()
            .map(|variable| self.get_integer_value(variable.clone()))
            .collect()
    }
}

impl ProblemSolution for Solution {
    fn num_domains(&self) -> usize {
        self.values.len()
    }

    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.map_value(self.values[var.domain_id()])
    }
}

impl From<SolutionReference<'_>> for Solution {
    fn from(value: SolutionReference<'_>) -> Self {
        Solution {
            values: value
                .get_domains()
                .map(|domain_id| value.get_integer_value(domain_id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn solution_is_independent_of_the_assignments() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 5);
        let y = assignments.grow(0, 5);

        let snapshot = assignments.snapshot();
        let _ = assignments.assign(x, 2).expect("non-empty domain");
        let _ = assignments.assign(y, 4).expect("non-empty domain");
        let solution = Solution::from(SolutionReference::new(&assignments));
        assignments.restore(snapshot);

        assert_eq!(2, solution.get_integer_value(x));
        assert_eq!(4, solution.get_integer_value(y));
        assert_eq!(-7, solution.get_integer_value(y.scaled(-2).offset(1)));
        assert_eq!(vec![(x, 2), (y, 4)], solution.iter().collect::<Vec<_>>());
    }
}
