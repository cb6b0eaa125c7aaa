use super::all_different_value::eliminate_fixed_values;
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
use crate::engine::EmptyDomain;

#[derive(Clone, Debug)]
pub(crate) struct AllDifferentBoundsConstructor<Var> {
    pub(crate) vars: Box<[Var]>,
}

/// Bounds consistent propagator for the all-different constraint based on Hall intervals.
///
/// An interval `[l, u]` is a Hall interval when exactly `u - l + 1` variables have their domain
/// bounds inside it; these variables consume every value of the interval, so the bounds of all
/// other variables are pushed out of it. More than `u - l + 1` such variables is a conflict.
#[derive(Debug)]
pub(crate) struct AllDifferentBoundsPropagator<Var> {
    vars: Box<[Var]>,
}

impl<Var> PropagatorConstructor for AllDifferentBoundsConstructor<Var>
where
    Var: IntegerVariable,
{
    type PropagatorImpl = AllDifferentBoundsPropagator<Var>;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        let vars: Box<[_]> = self
            .vars
            .iter()
            .map(|var| context.register(var.clone(), DomainEvents::BOUNDS))
            .collect();
        AllDifferentBoundsPropagator { vars }
    }
}

impl<Var: IntegerVariable> AllDifferentBoundsPropagator<Var> {
    /// Performs a single sweep over all candidate intervals; returns whether a bound changed.
    fn prune_hall_intervals(
        &self,
        context: &mut PropagationContextMut,
    ) -> Result<bool, Inconsistency> {
        let bounds: Vec<(i64, i64)> = self
            .vars
            .iter()
            .map(|var| (context.lower_bound(var) as i64, context.upper_bound(var) as i64))
            .collect();

        let mut lower_bounds: Vec<i64> = bounds.iter().map(|&(lb, _)| lb).collect();
        lower_bounds.sort_unstable();
        lower_bounds.dedup();
        let mut upper_bounds: Vec<i64> = bounds.iter().map(|&(_, ub)| ub).collect();
        upper_bounds.sort_unstable();
        upper_bounds.dedup();

        for &low in lower_bounds.iter() {
            for &high in upper_bounds.iter().filter(|&&high| high >= low) {
                let width = high - low + 1;
                let inside = bounds
                    .iter()
                    .filter(|&&(lb, ub)| lb >= low && ub <= high)
                    .count() as i64;

                if inside > width {
                    return Err(Inconsistency::Conflict);
                }
                if inside < width {
                    continue;
                }

                let mut changed = false;
                for (var, &(lb, ub)) in self.vars.iter().zip(bounds.iter()) {
                    if lb >= low && ub <= high {
                        continue;
                    }
                    // A bound pushed past the range of `i32` empties the domain.
                    if (low..=high).contains(&lb) {
                        let bound = i32::try_from(high + 1).map_err(|_| EmptyDomain)?;
                        changed |= context.set_lower_bound(var, bound)?;
                    }
                    if (low..=high).contains(&ub) {
                        let bound = i32::try_from(low - 1).map_err(|_| EmptyDomain)?;
                        changed |= context.set_upper_bound(var, bound)?;
                    }
                }

                // The cached bounds are stale once anything moved.
                if changed {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

impl<Var> Propagator for AllDifferentBoundsPropagator<Var>
where
    Var: IntegerVariable,
{
    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn name(&self) -> &str {
        "AllDifferentBounds"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        loop {
            eliminate_fixed_values(&self.vars, &mut context)?;
            if !self.prune_hall_intervals(&mut context)? {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestSolver;

    #[test]
    fn hall_interval_pushes_other_bounds() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 2);
        let b = solver.new_variable(1, 2);
        let c = solver.new_variable(1, 4);

        let _ = solver
            .new_propagator(AllDifferentBoundsConstructor {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        solver.assert_bounds(c, 3, 4);
        solver.assert_bounds(a, 1, 2);
    }

    #[test]
    fn hall_interval_pushes_upper_bound_down() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(3, 4);
        let b = solver.new_variable(3, 4);
        let c = solver.new_variable(1, 4);

        let _ = solver
            .new_propagator(AllDifferentBoundsConstructor {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        solver.assert_bounds(c, 1, 2);
    }

    #[test]
    fn pigeonhole_is_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 1);
        let b = solver.new_variable(0, 1);
        let c = solver.new_variable(0, 1);

        let result = solver.new_propagator(AllDifferentBoundsConstructor {
            vars: [a, b, c].into(),
        });

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }

    #[test]
    fn cascading_hall_intervals_reach_a_fixpoint() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(1, 2);
        let c = solver.new_variable(1, 3);
        let d = solver.new_variable(1, 5);

        let propagator = solver
            .new_propagator(AllDifferentBoundsConstructor {
                vars: [a, b, c, d].into(),
            })
            .expect("no empty domains");

        solver.assert_bounds(b, 2, 2);
        solver.assert_bounds(c, 3, 3);
        solver.assert_bounds(d, 4, 5);
        assert_eq!(Ok(false), solver.propagate_and_check_change(&propagator));
    }

    #[test]
    fn hall_intervals_at_the_limits_of_i32() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(i32::MAX - 1, i32::MAX);
        let b = solver.new_variable(i32::MAX - 1, i32::MAX);
        let c = solver.new_variable(i32::MAX - 2, i32::MAX);
        let d = solver.new_variable(i32::MIN, i32::MIN + 1);
        let e = solver.new_variable(i32::MIN, i32::MIN + 1);
        let f = solver.new_variable(i32::MIN, i32::MIN + 2);

        let _ = solver
            .new_propagator(AllDifferentBoundsConstructor {
                vars: [a, b, c, d, e, f].into(),
            })
            .expect("no empty domains");

        solver.assert_bounds(c, i32::MAX - 2, i32::MAX - 2);
        solver.assert_bounds(f, i32::MIN + 2, i32::MIN + 2);
    }
}
