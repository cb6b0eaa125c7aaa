use gourd_solver::core::options::ConfigurationError;
use gourd_solver::core::ConstraintOperationError;
use thiserror::Error;

pub(crate) type GourdResult<T> = Result<T, GourdError>;

#[derive(Error, Debug)]
pub(crate) enum GourdError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Failed to build the model: {0}")]
    Model(#[from] ConstraintOperationError),
    #[error("There is no puzzle {index}; the puzzles are numbered 0 to {}.", .available - 1)]
    UnknownPuzzle { index: usize, available: usize },
    #[error("A board of size {0} has no squares.")]
    BoardTooSmall(u32),
}
