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
use crate::gourd_assert_eq_simple;
use crate::gourd_assert_simple;
use crate::math::num_ext::NumExt;

/// The largest magnitude of a coefficient; a product with a domain value then fits in an `i64`.
pub(crate) const MAX_COEFFICIENT_MAGNITUDE: u64 = 1 << 31;

#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualConstructor<Var> {
    pub(crate) x: Box<[Var]>,
    pub(crate) a: Box<[i64]>,
    pub(crate) c: i64,
}

impl<Var: IntegerVariable> LinearLessOrEqualConstructor<Var> {
    /// The constraint `\sum x_i <= c`.
    pub(crate) fn new(x: Box<[Var]>, c: i64) -> Self {
        let a = vec![1; x.len()].into();
        LinearLessOrEqualConstructor { x, a, c }
    }

    /// The constraint `\sum a_i * x_i <= c`.
    pub(crate) fn with_coefficients(x: Box<[Var]>, a: Box<[i64]>, c: i64) -> Self {
        gourd_assert_eq_simple!(x.len(), a.len());
        gourd_assert_simple!(a
            .iter()
            .all(|a_i| *a_i != 0 && a_i.unsigned_abs() <= MAX_COEFFICIENT_MAGNITUDE));
        LinearLessOrEqualConstructor { x, a, c }
    }
}

/// Propagator for the constraint `\sum a_i * x_i <= c`.
///
/// Every product `a_i * x_i` fits in an `i64`; sums of products are taken in `i128`.
#[derive(Debug)]
pub(crate) struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    a: Box<[i64]>,
    c: i64,
}

impl<Var> PropagatorConstructor for LinearLessOrEqualConstructor<Var>
where
    Var: IntegerVariable,
{
    type PropagatorImpl = LinearLessOrEqualPropagator<Var>;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        // The smallest value of a term is determined by the lower bound of its variable for a
        // positive coefficient, and by the upper bound for a negative one.
        let x: Box<[_]> = self
            .x
            .iter()
            .zip(self.a.iter())
            .map(|(x_i, &a_i)| {
                let events = if a_i > 0 {
                    DomainEvents::LOWER_BOUND
                } else {
                    DomainEvents::UPPER_BOUND
                };
                context.register(x_i.clone(), events)
            })
            .collect();
        LinearLessOrEqualPropagator {
            x,
            a: self.a,
            c: self.c,
        }
    }
}

/// The smallest value `a * x` can take.
fn term_lower_bound<Var: IntegerVariable>(context: &impl ReadDomains, x: &Var, a: i64) -> i64 {
    if a > 0 {
        a * context.lower_bound(x) as i64
    } else {
        a * context.upper_bound(x) as i64
    }
}

impl<Var> Propagator for LinearLessOrEqualPropagator<Var>
where
    Var: IntegerVariable,
{
    fn priority(&self) -> Priority {
        Priority::High
    }

    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let lb_lhs = self
            .x
            .iter()
            .zip(self.a.iter())
            .map(|(x_i, &a_i)| term_lower_bound(&context, x_i, a_i) as i128)
            .sum::<i128>();
        let c = self.c as i128;

        if c < lb_lhs {
            return Err(Inconsistency::Conflict);
        }

        // Tightening a term never moves the lower bound of another term, so a single pass reaches
        // the fixpoint unless a variable occurs in several terms.
        for (x_i, &a_i) in self.x.iter().zip(self.a.iter()) {
            let term_lb = term_lower_bound(&context, x_i, a_i);

            // The largest value of the term; at least `term_lb` since there is no conflict. A
            // value beyond the range of `i64` exceeds every product and prunes nothing.
            let Ok(slack) = i64::try_from(c - (lb_lhs - term_lb as i128)) else {
                continue;
            };

            // The new bound lies within the current domain, hence within `i32`.
            if a_i > 0 {
                let bound = NumExt::div_floor(slack, a_i);
                if bound < context.upper_bound(x_i) as i64 {
                    let _ = context.set_upper_bound(x_i, bound as i32)?;
                }
            } else {
                let bound = NumExt::div_ceil(slack, a_i);
                if bound > context.lower_bound(x_i) as i64 {
                    let _ = context.set_lower_bound(x_i, bound as i32)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_helper::TestSolver;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn test_bounds_are_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 5);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualConstructor::new([x, y].into(), 7))
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 5);
        solver.assert_bounds(y, 0, 6);
    }

    #[test]
    fn negative_coefficients_tighten_lower_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(2, 4);

        // x - y <= -1, i.e. x <= y - 1
        let _ = solver
            .new_propagator(LinearLessOrEqualConstructor::new(
                [x.scaled(1), y.scaled(-1)].into(),
                -1,
            ))
            .expect("no empty domains");

        solver.assert_bounds(x, 0, 3);
        solver.assert_bounds(y, 2, 4);

        solver.set_lower_bound(x, 3).expect("non-empty domain");
        let propagator = solver
            .new_propagator(LinearLessOrEqualConstructor::new(
                [x.scaled(1), y.scaled(-1)].into(),
                -1,
            ))
            .expect("no empty domains");
        solver.assert_bounds(y, 4, 4);

        assert_eq!(Ok(false), solver.propagate_and_check_change(&propagator));
    }

    #[test]
    fn overloaded_sum_is_a_conflict() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(4, 5);
        let y = solver.new_variable(4, 10);

        let result = solver.new_propagator(LinearLessOrEqualConstructor::new([x, y].into(), 7));

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }

    #[test]
    fn large_coefficients_do_not_overflow() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 1_000_000);
        let y = solver.new_variable(0, 1_000_000);

        // 2_000 * x + 2_000 * y <= 2^31 - 1, i.e. x + y <= 1_073_741
        let _ = solver
            .new_propagator(LinearLessOrEqualConstructor::with_coefficients(
                [x, y].into(),
                [2_000, 2_000].into(),
                i32::MAX as i64,
            ))
            .expect("no empty domains");

        solver.assert_bounds(x, 0, 1_000_000);
        solver.assert_bounds(y, 0, 1_000_000);

        solver.set_lower_bound(x, 900_000).expect("non-empty domain");
        let propagator = solver
            .new_propagator(LinearLessOrEqualConstructor::with_coefficients(
                [x, y].into(),
                [2_000, 2_000].into(),
                i32::MAX as i64,
            ))
            .expect("no empty domains");
        solver.assert_bounds(y, 0, 173_741);
        assert_eq!(Ok(false), solver.propagate_and_check_change(&propagator));
    }

    #[test]
    fn products_beyond_i32_are_rounded_inside_the_domain() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(-10, 10);
        let y = solver.new_variable(-5, 5);

        // -(2^31) * x - 3 * y <= -(2^31) * 2 + 15, so x >= 2
        let _ = solver
            .new_propagator(LinearLessOrEqualConstructor::with_coefficients(
                [x, y].into(),
                [-(1_i64 << 31), -3].into(),
                -(1_i64 << 32) + 15,
            ))
            .expect("no empty domains");

        solver.assert_bounds(x, 2, 10);
        solver.assert_bounds(y, -5, 5);
    }

    #[test]
    fn right_hand_sides_beyond_i32_are_kept_exact() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(i32::MIN, i32::MIN + 1);

        // -x <= i32::MIN - 1 has no solution since -x is at least i32::MAX
        let result = solver.new_propagator(LinearLessOrEqualConstructor::with_coefficients(
            [x].into(),
            [-1].into(),
            i32::MIN as i64 - 1,
        ));

        assert_eq!(Some(Inconsistency::Conflict), result.err());
    }
}
