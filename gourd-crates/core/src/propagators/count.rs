use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;
use crate::engine::DomainEvents;

/// The relation between the number of occurrences of a value and the target.
///
/// Strict relations are normalised into these by the constraint layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CountRelation {
    AtMost,
    AtLeast,
    Exactly,
    NotEqual,
}

#[derive(Clone, Debug)]
pub(crate) struct CountConstructor<Var> {
    pub(crate) vars: Box<[Var]>,
    pub(crate) value: i32,
    pub(crate) relation: CountRelation,
    pub(crate) target: i32,
}

impl<Var: IntegerVariable> CountConstructor<Var> {
    pub(crate) fn new(vars: Box<[Var]>, value: i32, relation: CountRelation, target: i32) -> Self {
        CountConstructor {
            vars,
            value,
            relation,
            target,
        }
    }
}

/// Propagator for `|{ i | vars_i = value }| <relation> target`.
#[derive(Debug)]
pub(crate) struct CountPropagator<Var> {
    vars: Box<[Var]>,
    value: i32,
    relation: CountRelation,
    target: i64,
}

impl<Var> PropagatorConstructor for CountConstructor<Var>
where
    Var: IntegerVariable,
{
    type PropagatorImpl = CountPropagator<Var>;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        let vars: Box<[_]> = self
            .vars
            .iter()
            .map(|var| context.register(var.clone(), DomainEvents::ANY_INT))
            .collect();
        CountPropagator {
            vars,
            value: self.value,
            relation: self.relation,
            target: self.target as i64,
        }
    }
}

impl<Var: IntegerVariable> CountPropagator<Var> {
    /// Returns the number of variables fixed to the value and the number of variables which can
    /// still take it.
    fn occurrences(&self, context: &PropagationContextMut) -> (i64, i64) {
        self.vars
            .iter()
            .filter(|var| context.contains(*var, self.value))
            .fold((0, 0), |(fixed, possible), var| {
                if context.is_fixed(var) {
                    (fixed + 1, possible + 1)
                } else {
                    (fixed, possible + 1)
                }
            })
    }

    fn remove_from_undetermined(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        for var in self.vars.iter() {
            if !context.is_fixed(var) {
                let _ = context.remove(var, self.value)?;
            }
        }
        Ok(())
    }

    fn assign_candidates(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        for var in self.vars.iter() {
            if context.contains(var, self.value) {
                let _ = context.assign(var, self.value)?;
            }
        }
        Ok(())
    }

    fn propagate_upper(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        let (fixed, _) = self.occurrences(context);
        if fixed > self.target {
            return Err(Inconsistency::Conflict);
        }
        if fixed == self.target {
            self.remove_from_undetermined(context)?;
        }
        Ok(())
    }

    fn propagate_lower(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        let (_, possible) = self.occurrences(context);
        if possible < self.target {
            return Err(Inconsistency::Conflict);
        }
        if possible == self.target {
            self.assign_candidates(context)?;
        }
        Ok(())
    }

    fn propagate_not_equal(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        let (fixed, possible) = self.occurrences(context);
        let undetermined = possible - fixed;

        if undetermined == 0 {
            return if fixed == self.target {
                Err(Inconsistency::Conflict)
            } else {
                Ok(())
            };
        }

        if undetermined == 1 {
            if possible == self.target {
                // Taking the value would reach the target.
                self.remove_from_undetermined(context)?;
            } else if fixed == self.target {
                // Not taking the value would stay at the target.
                self.assign_candidates(context)?;
            }
        }
        Ok(())
    }
}

impl<Var> Propagator for CountPropagator<Var>
where
    Var: IntegerVariable,
{
    fn name(&self) -> &str {
        "Count"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        match self.relation {
            CountRelation::AtMost => self.propagate_upper(&mut context),
            CountRelation::AtLeast => self.propagate_lower(&mut context),
            CountRelation::Exactly => {
                // Each rule either fixes every undetermined variable or leaves the counts
                // untouched, so running both once is a fixpoint.
                self.propagate_upper(&mut context)?;
                self.propagate_lower(&mut context)
            }
            CountRelation::NotEqual => self.propagate_not_equal(&mut context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestSolver;

    #[test]
    fn reaching_the_target_removes_the_value_elsewhere() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(0, 2);
        let c = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(CountConstructor::new(
                [a, b, c].into(),
                1,
                CountRelation::AtMost,
                1,
            ))
            .expect("no empty domains");

        assert_eq!(vec![0, 2], solver.domain(b));
        assert_eq!(vec![0, 2], solver.domain(c));
    }

    #[test]
    fn too_many_occurrences_is_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(1, 1);

        let result = solver.new_propagator(CountConstructor::new(
            [a, b].into(),
            1,
            CountRelation::Exactly,
            1,
        ));

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }

    #[test]
    fn remaining_candidates_are_assigned_when_needed() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 3);
        let b = solver.new_variable(0, 3);
        let c = solver.new_variable(0, 1);

        let _ = solver
            .new_propagator(CountConstructor::new(
                [a, b, c].into(),
                3,
                CountRelation::AtLeast,
                2,
            ))
            .expect("no empty domains");

        solver.assert_bounds(a, 3, 3);
        solver.assert_bounds(b, 3, 3);
        solver.assert_bounds(c, 0, 1);
    }

    #[test]
    fn too_few_candidates_is_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 3);
        let b = solver.new_variable(0, 2);

        let result = solver.new_propagator(CountConstructor::new(
            [a, b].into(),
            3,
            CountRelation::AtLeast,
            2,
        ));

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }

    #[test]
    fn exactly_one_leaves_a_single_candidate_assigned() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 1);
        let b = solver.new_variable(0, 1);

        let propagator = solver
            .new_propagator(CountConstructor::new(
                [a, b].into(),
                1,
                CountRelation::Exactly,
                1,
            ))
            .expect("no empty domains");

        solver.remove(a, 1).expect("non-empty domain");
        assert_eq!(Ok(true), solver.propagate_and_check_change(&propagator));
        solver.assert_bounds(b, 1, 1);
    }

    #[test]
    fn not_equal_prevents_the_last_variable_from_hitting_the_target() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(2, 2);
        let b = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(CountConstructor::new(
                [a, b].into(),
                2,
                CountRelation::NotEqual,
                2,
            ))
            .expect("no empty domains");

        assert_eq!(vec![0, 1], solver.domain(b));
    }

    #[test]
    fn not_equal_forces_the_value_when_staying_would_hit_the_target() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(2, 2);
        let b = solver.new_variable(0, 2);

        let _ = solver
            .new_propagator(CountConstructor::new(
                [a, b].into(),
                2,
                CountRelation::NotEqual,
                1,
            ))
            .expect("no empty domains");

        solver.assert_bounds(b, 2, 2);
    }

    #[test]
    fn not_equal_with_everything_fixed_at_the_target_is_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(2, 2);
        let b = solver.new_variable(0, 0);

        let result = solver.new_propagator(CountConstructor::new(
            [a, b].into(),
            2,
            CountRelation::NotEqual,
            1,
        ));

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }
}
