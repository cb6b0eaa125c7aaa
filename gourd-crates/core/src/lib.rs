//! # Gourd
//! Gourd is a finite-domain constraint satisfaction solver. Variables range over bounded integer
//! domains, constraints are enforced by propagators, and solutions are enumerated by a
//! depth-first search with two-way branching.
//!
//! # Usage
//! A model is built by creating variables with [`Solver::new_bounded_integer`] and posting
//! constraints from [`constraints`] with [`Solver::add_constraint`]. The solutions are then
//! retrieved lazily from [`Solver::get_solution_iterator`]:
//! ```rust
//! # use gourd_core::constraints;
//! # use gourd_core::options::SolutionLimit;
//! # use gourd_core::results::ProblemSolution;
//! # use gourd_core::termination::Indefinite;
//! # use gourd_core::Solver;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(0, 5);
//! let y = solver.new_bounded_integer(0, 5);
//! let z = solver.new_bounded_integer(0, 5);
//!
//! // x + y + z = 4, with all three values distinct
//! solver
//!     .add_constraint(constraints::equals([x, y, z], 4))
//!     .post()
//!     .expect("all variables belong to the solver");
//! solver
//!     .add_constraint(constraints::all_different([x, y, z]))
//!     .post()
//!     .expect("all variables belong to the solver");
//!
//! let mut brancher = solver.default_brancher();
//! for solution in solver.get_solution_iterator(&mut brancher, &mut Indefinite, SolutionLimit::all())
//! {
//!     let (x, y, z) = (
//!         solution.get_integer_value(x),
//!         solution.get_integer_value(y),
//!         solution.get_integer_value(z),
//!     );
//!     assert_eq!(4, x + y + z);
//!     assert!(x != y && y != z && x != z);
//! }
//! ```
//!
//! The branching heuristic is configured through [`options::BranchingOptions`] and
//! [`Solver::configured_brancher`]; the search can be bounded with a
//! [`termination::TerminationCondition`].
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod gourd_asserts;
pub(crate) mod math;
pub(crate) mod propagators;

pub mod branching;
pub mod constraints;
pub mod options;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use gourd_core::Solver;`
// vs.
// `use gourd_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::ArityViolation;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::engine::predicates;
pub use crate::engine::termination;
pub use crate::engine::Assignments;
pub use crate::engine::EmptyDomain;
pub use crate::engine::Snapshot;
