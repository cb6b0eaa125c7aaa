//! Defines the constraints that Gourd provides out of the box which can be added to the
//! [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and therefore constraints can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use gourd_core::constraints;
//! # use gourd_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! solver
//!     .add_constraint(constraints::equals([a, b], 3))
//!     .post()
//!     .expect("both variables belong to the solver");
//! ```
//!
//! # Note
//! The API for posting propagators is not publicly accessible. Consumers of the library can
//! therefore only define constraints by decomposing them into the constraints that are predefined
//! here.

mod all_different;
mod arithmetic;
mod constraint_poster;
mod count;
mod relation;

pub use all_different::*;
pub use arithmetic::*;
pub use constraint_poster::*;
pub use count::*;
pub use relation::*;

use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
///
/// For example, the constraint `a = b` over two variables `a` and `b` only allows assignments to
/// `a` and `b` of the same value, and rejects any assignment where `a` and `b` differ.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the constraint is malformed, in
    /// which case nothing is added. A constraint which is violated at the root is accepted; the
    /// search will then report no solutions.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
