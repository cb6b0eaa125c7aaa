use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;
use crate::engine::DomainEvents;

#[derive(Clone, Debug)]
pub(crate) struct AllDifferentValueConstructor<Var> {
    pub(crate) vars: Box<[Var]>,
}

/// Value consistent propagator for the all-different constraint: the value of every fixed
/// variable is removed from the domains of the other variables.
#[derive(Debug)]
pub(crate) struct AllDifferentValuePropagator<Var> {
    vars: Box<[Var]>,
}

impl<Var> PropagatorConstructor for AllDifferentValueConstructor<Var>
where
    Var: IntegerVariable,
{
    type PropagatorImpl = AllDifferentValuePropagator<Var>;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        let vars: Box<[_]> = self
            .vars
            .iter()
            .map(|var| context.register(var.clone(), DomainEvents::ASSIGN))
            .collect();
        AllDifferentValuePropagator { vars }
    }
}

impl<Var> Propagator for AllDifferentValuePropagator<Var>
where
    Var: IntegerVariable,
{
    fn priority(&self) -> Priority {
        Priority::High
    }

    fn name(&self) -> &str {
        "AllDifferentValue"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        eliminate_fixed_values(&self.vars, &mut context)
    }
}

/// Removes the value of every fixed variable from all other variables, until no new variable
/// becomes fixed.
///
/// Two variables fixed to the same value lead to an empty domain.
pub(super) fn eliminate_fixed_values<Var: IntegerVariable>(
    vars: &[Var],
    context: &mut PropagationContextMut,
) -> PropagationStatusCP {
    let mut processed = vec![false; vars.len()];

    loop {
        let mut newly_fixed = false;

        for (i, var) in vars.iter().enumerate() {
            if processed[i] || !context.is_fixed(var) {
                continue;
            }
            processed[i] = true;
            newly_fixed = true;

            let value = context.lower_bound(var);
            for (j, other) in vars.iter().enumerate() {
                if i != j {
                    let _ = context.remove(other, value)?;
                }
            }
        }

        if !newly_fixed {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_helper::TestSolver;

    #[test]
    fn fixed_values_are_removed_transitively() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(1, 2);
        let c = solver.new_variable(1, 3);

        let _ = solver
            .new_propagator(AllDifferentValueConstructor {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        solver.assert_bounds(b, 2, 2);
        solver.assert_bounds(c, 3, 3);
    }

    #[test]
    fn equal_fixed_values_are_inconsistent() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(4, 4);
        let b = solver.new_variable(0, 9);
        let c = solver.new_variable(4, 4);

        let result = solver.new_propagator(AllDifferentValueConstructor {
            vars: [a, b, c].into(),
        });

        assert_eq!(Some(Inconsistency::EmptyDomain), result.err());
    }

    #[test]
    fn unfixed_variables_are_left_alone() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 1);
        let b = solver.new_variable(0, 1);
        let c = solver.new_variable(0, 1);

        let propagator = solver
            .new_propagator(AllDifferentValueConstructor {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        assert_eq!(Ok(false), solver.propagate_and_check_change(&propagator));
        assert_eq!(vec![0, 1], solver.domain(c));
    }
}
