pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod cp;
pub(crate) mod depth_first_search;
pub mod predicates;
pub(crate) mod solver_statistics;
pub mod termination;
pub(crate) mod variable_names;
pub mod variables;

pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use constraint_satisfaction_solver::PropagationOutcome;
pub use cp::Assignments;
pub use cp::DomainEvent;
pub(crate) use cp::DomainEvents;
pub use cp::EmptyDomain;
pub(crate) use cp::PropagatorQueue;
pub use cp::Snapshot;
pub(crate) use cp::WatchListCP;
pub use cp::Watchers;
pub(crate) use cp::propagation;
#[cfg(test)]
pub(crate) use cp::test_helper;
pub(crate) use depth_first_search::DepthFirstSearch;
pub use depth_first_search::SearchOutcome;
pub(crate) use depth_first_search::SearchStep;
pub(crate) use variable_names::VariableNames;
