pub(crate) mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! [`Solver::get_solution_iterator`] produces a [`SolutionIterator`] which lazily yields
    //! [`Solution`]s; once it is exhausted, [`SolutionIterator::outcome`] tells why the search
    //! stopped.
    #[cfg(doc)]
    use crate::Solver;
    pub use crate::api::outputs::solution_iterator::SolutionIterator;
    pub use crate::basic_types::ProblemSolution;
    pub use crate::basic_types::Solution;
    pub use crate::basic_types::SolutionReference;
    pub use crate::engine::SearchOutcome;
}

pub mod variables {
    //! Contains the variables which can be created using the [`Solver`].
    //!
    //! An integer variable is a [`DomainId`] created by [`Solver::new_bounded_integer`]. An
    //! [`AffineView`] of it can be created using [`TransformableVariable::scaled`] and
    //! [`TransformableVariable::offset`]; a view can be used wherever a variable is expected.
    //!
    //! ```rust
    //! # use gourd_core::Solver;
    //! # use gourd_core::variables::TransformableVariable;
    //! let mut solver = Solver::default();
    //!
    //! let x = solver.new_bounded_integer(0, 10);
    //! let view = x.scaled(-1).offset(15);
    //!
    //! assert_eq!(5, solver.lower_bound(&view));
    //! assert_eq!(15, solver.upper_bound(&view));
    //! ```
    #[cfg(doc)]
    use crate::Solver;
    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::TransformableVariable;
    pub use crate::engine::DomainEvent;
    pub use crate::engine::Watchers;
}

pub mod asserts {
    //! The level of the internal consistency checks which is compiled into the solver.
    pub use crate::gourd_asserts::GOURD_ASSERT_ADVANCED;
    pub use crate::gourd_asserts::GOURD_ASSERT_LEVEL_DEFINITION;
    pub use crate::gourd_asserts::GOURD_ASSERT_MODERATE;
    pub use crate::gourd_asserts::GOURD_ASSERT_SIMPLE;
}
