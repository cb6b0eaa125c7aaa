mod constraint_operation_error;
mod propagation_status_cp;
mod solution;
mod trail;

pub use constraint_operation_error::ArityViolation;
pub use constraint_operation_error::ConstraintOperationError;
pub(crate) use propagation_status_cp::*;
pub use solution::ProblemSolution;
pub use solution::Solution;
pub use solution::SolutionReference;
pub(crate) use trail::Trail;
