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
use crate::propagators::arithmetic::MAX_COEFFICIENT_MAGNITUDE;

#[derive(Clone, Debug)]
pub(crate) struct LinearNotEqualConstructor<Var> {
    pub(crate) terms: Box<[Var]>,
    pub(crate) coefficients: Box<[i64]>,
    pub(crate) rhs: i64,
}

impl<Var: IntegerVariable> LinearNotEqualConstructor<Var> {
    /// The constraint `\sum terms_i != rhs`.
    pub(crate) fn new(terms: Box<[Var]>, rhs: i64) -> Self {
        let coefficients = vec![1; terms.len()].into();
        LinearNotEqualConstructor {
            terms,
            coefficients,
            rhs,
        }
    }

    /// The constraint `\sum coefficients_i * terms_i != rhs`.
    pub(crate) fn with_coefficients(
        terms: Box<[Var]>,
        coefficients: Box<[i64]>,
        rhs: i64,
    ) -> Self {
        gourd_assert_eq_simple!(terms.len(), coefficients.len());
        gourd_assert_simple!(coefficients
            .iter()
            .all(|c| *c != 0 && c.unsigned_abs() <= MAX_COEFFICIENT_MAGNITUDE));
        LinearNotEqualConstructor {
            terms,
            coefficients,
            rhs,
        }
    }
}

/// Propagator for the constraint `\sum coefficients_i * terms_i != rhs`.
///
/// The propagator only prunes once at most one of the terms is unfixed.
#[derive(Debug)]
pub(crate) struct LinearNotEqualPropagator<Var> {
    terms: Box<[Var]>,
    coefficients: Box<[i64]>,
    rhs: i64,
}

impl<Var> PropagatorConstructor for LinearNotEqualConstructor<Var>
where
    Var: IntegerVariable,
{
    type PropagatorImpl = LinearNotEqualPropagator<Var>;

    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl {
        let terms: Box<[_]> = self
            .terms
            .iter()
            .map(|term| context.register(term.clone(), DomainEvents::ASSIGN))
            .collect();
        LinearNotEqualPropagator {
            terms,
            coefficients: self.coefficients,
            rhs: self.rhs,
        }
    }
}

impl<Var> Propagator for LinearNotEqualPropagator<Var>
where
    Var: IntegerVariable,
{
    fn priority(&self) -> Priority {
        Priority::High
    }

    fn name(&self) -> &str {
        "LinearNe"
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let mut fixed_lhs = 0_i128;
        let mut unfixed = None;

        for (term, &coefficient) in self.terms.iter().zip(self.coefficients.iter()) {
            if context.is_fixed(term) {
                fixed_lhs += (coefficient * context.lower_bound(term) as i64) as i128;
            } else if unfixed.is_some() {
                // At least two terms are unfixed, nothing can be deduced.
                return Ok(());
            } else {
                unfixed = Some((term, coefficient));
            }
        }

        let remaining = self.rhs as i128 - fixed_lhs;
        match unfixed {
            None if remaining == 0 => Err(Inconsistency::Conflict),
            None => Ok(()),
            Some((term, coefficient)) => {
                // Only a multiple of the coefficient can be hit by the last term.
                if remaining % coefficient as i128 == 0 {
                    if let Ok(value) = i32::try_from(remaining / coefficient as i128) {
                        let _ = context.remove(term, value)?;
                    }
                }
                Ok(())
            }
        }
    }
}
