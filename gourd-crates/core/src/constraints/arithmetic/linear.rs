use crate::basic_types::ArityViolation;
use crate::constraints::Constraint;
use crate::constraints::Relation;
use crate::propagators::LinearLessOrEqualConstructor;
use crate::propagators::LinearNotEqualConstructor;
use crate::variables::IntegerVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// The constraint `\sum coefficients_i * variables_i <relation> rhs`.
#[derive(Clone, Debug)]
pub struct Linear<Var> {
    variables: Box<[Var]>,
    coefficients: Box<[i32]>,
    relation: Relation,
    rhs: i32,
}

/// Creates the [`Constraint`] `\sum coefficients_i * variables_i <relation> rhs`.
///
/// Posting fails with [`ArityViolation::CoefficientMismatch`] if the number of coefficients
/// differs from the number of variables.
pub fn linear<Var: IntegerVariable>(
    variables: impl Into<Box<[Var]>>,
    coefficients: impl Into<Box<[i32]>>,
    relation: Relation,
    rhs: i32,
) -> Linear<Var> {
    Linear {
        variables: variables.into(),
        coefficients: coefficients.into(),
        relation,
        rhs,
    }
}

impl<Var: IntegerVariable> Constraint for Linear<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.variables.len() != self.coefficients.len() {
            return Err(ConstraintOperationError::InvalidConstraintArity {
                constraint: "linear",
                violation: ArityViolation::CoefficientMismatch {
                    num_variables: self.variables.len(),
                    num_coefficients: self.coefficients.len(),
                },
            });
        }

        // Terms with a zero coefficient do not contribute to the sum.
        let (variables, coefficients): (Vec<Var>, Vec<i64>) = self
            .variables
            .iter()
            .zip(self.coefficients.iter())
            .filter(|(_, coefficient)| **coefficient != 0)
            .map(|(variable, &coefficient)| (variable.clone(), coefficient as i64))
            .unzip();
        let variables: Box<[Var]> = variables.into();
        let coefficients: Box<[i64]> = coefficients.into();
        // The right-hand side is widened so that strict relations and negation stay exact.
        let rhs = self.rhs as i64;

        match self.relation {
            Relation::LessOrEqual => less_or_equal(solver, variables, coefficients, rhs),
            Relation::Less => less_or_equal(solver, variables, coefficients, rhs - 1),
            Relation::GreaterOrEqual => {
                less_or_equal(solver, variables, negate(&coefficients), -rhs)
            }
            Relation::Greater => {
                less_or_equal(solver, variables, negate(&coefficients), -(rhs + 1))
            }
            Relation::Equal => {
                // Both halves are validated before either is added.
                solver.check_variables(&variables, "linear")?;
                let negated = negate(&coefficients);
                less_or_equal(solver, variables.clone(), coefficients, rhs)?;
                less_or_equal(solver, variables, negated, -rhs)
            }
            Relation::NotEqual => solver.add_propagator(
                LinearNotEqualConstructor::with_coefficients(variables, coefficients, rhs),
                "linear",
            ),
        }
    }
}

fn less_or_equal<Var: IntegerVariable>(
    solver: &mut Solver,
    variables: Box<[Var]>,
    coefficients: Box<[i64]>,
    rhs: i64,
) -> Result<(), ConstraintOperationError> {
    solver.add_propagator(
        LinearLessOrEqualConstructor::with_coefficients(variables, coefficients, rhs),
        "linear",
    )
}

fn negate(coefficients: &[i64]) -> Box<[i64]> {
    coefficients.iter().map(|coefficient| -coefficient).collect()
}
