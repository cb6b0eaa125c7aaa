use thiserror::Error;

use crate::engine::variables::DomainId;
#[cfg(doc)]
use crate::Solver;

/// Errors related to adding constraints to the [`Solver`].
///
/// A constraint which fails to be posted leaves the solver unchanged.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    #[error("The {constraint} constraint is malformed: {violation}")]
    InvalidConstraintArity {
        constraint: &'static str,
        violation: ArityViolation,
    },
}

/// The way in which the arguments of a constraint are malformed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArityViolation {
    #[error("variable {0} was not created by this solver")]
    UnknownVariable(DomainId),
    #[error("{num_variables} variables were given with {num_coefficients} coefficients")]
    CoefficientMismatch {
        num_variables: usize,
        num_coefficients: usize,
    },
}
