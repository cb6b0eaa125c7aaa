//! The N-Queens puzzle: place `n` queens on an `n`×`n` board such that no two queens attack each
//! other.
use std::fmt::Write;

use gourd_core::constraints;
use gourd_core::options::PropagationStrength;
use gourd_core::results::ProblemSolution;
use gourd_core::variables::DomainId;
use gourd_core::variables::TransformableVariable;
use gourd_core::ConstraintOperationError;
use gourd_core::Solver;

/// The ways in which the puzzle can be modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum QueensModel {
    /// One 0/1 variable per square; a queen stands on the squares with value 1.
    #[default]
    Board,
    /// One variable per row holding the column of the queen in that row.
    Columns,
}

/// The variables of an N-Queens model posted to a [`Solver`].
#[derive(Clone, Debug)]
pub struct Queens {
    n: usize,
    model: QueensModel,
    variables: Vec<DomainId>,
}

impl Queens {
    /// Creates the variables and constraints of the chosen model for an `n`×`n` board.
    ///
    /// The `strength` applies to the all-different constraints of the column model.
    pub fn build(
        solver: &mut Solver,
        n: usize,
        model: QueensModel,
        strength: PropagationStrength,
    ) -> Result<Queens, ConstraintOperationError> {
        let variables = match model {
            QueensModel::Board => post_board(solver, n)?,
            QueensModel::Columns => post_columns(solver, n, strength)?,
        };

        Ok(Queens {
            n,
            model,
            variables,
        })
    }

    /// The variables to branch on.
    pub fn variables(&self) -> &[DomainId] {
        &self.variables
    }

    /// For every row, the column in which `solution` places the queen.
    pub fn columns(&self, solution: &impl ProblemSolution) -> Vec<usize> {
        match self.model {
            QueensModel::Board => self
                .variables
                .chunks(self.n)
                .map(|row| {
                    row.iter()
                        .position(|&square| solution.get_integer_value(square) == 1)
                        .unwrap_or(self.n)
                })
                .collect(),
            QueensModel::Columns => self
                .variables
                .iter()
                .map(|&row| solution.get_integer_value(row) as usize)
                .collect(),
        }
    }

    /// Renders the board, with `1` for a queen and `0` for an empty square.
    pub fn render(&self, solution: &impl ProblemSolution) -> String {
        let mut rendered = String::new();
        for column in self.columns(solution) {
            for square in 0..self.n {
                let _ = write!(rendered, "{} ", u8::from(square == column));
            }
            rendered.push('\n');
        }
        rendered
    }
}

/// Posts the board model: `n` queens in total, exactly one per row and per column, and at most
/// one per diagonal.
fn post_board(solver: &mut Solver, n: usize) -> Result<Vec<DomainId>, ConstraintOperationError> {
    let squares = (0..n * n)
        .map(|index| {
            solver.new_named_bounded_integer(0, 1, format!("square[{}][{}]", index / n, index % n))
        })
        .collect::<Vec<_>>();
    let square = |row: usize, column: usize| squares[row * n + column];

    solver
        .add_constraint(constraints::exactly(squares.clone(), 1, n as i32))
        .post()?;

    for line in 0..n {
        let row = (0..n).map(|column| square(line, column)).collect::<Vec<_>>();
        let column = (0..n).map(|row| square(row, line)).collect::<Vec<_>>();
        solver.add_constraint(constraints::exactly(row, 1, 1)).post()?;
        solver
            .add_constraint(constraints::exactly(column, 1, 1))
            .post()?;
    }

    // Squares on a descending diagonal share `row - column`, on an ascending one `row + column`.
    for diagonal in 0..(2 * n).saturating_sub(1) {
        let descending = (0..n)
            .filter_map(|row| {
                let column = (row + n - 1).checked_sub(diagonal)?;
                (column < n).then(|| square(row, column))
            })
            .collect::<Vec<_>>();
        let ascending = (0..n)
            .filter_map(|row| {
                let column = diagonal.checked_sub(row)?;
                (column < n).then(|| square(row, column))
            })
            .collect::<Vec<_>>();

        for squares in [descending, ascending] {
            if squares.len() > 1 {
                solver
                    .add_constraint(constraints::at_most(squares, 1, 1))
                    .post()?;
            }
        }
    }

    Ok(squares)
}

/// Posts the column model: all columns distinct, and all `q_i + i` and all `q_i - i` distinct so
/// that no two queens share a diagonal.
fn post_columns(
    solver: &mut Solver,
    n: usize,
    strength: PropagationStrength,
) -> Result<Vec<DomainId>, ConstraintOperationError> {
    let queens = (0..n)
        .map(|row| solver.new_named_bounded_integer(0, n as i32 - 1, format!("queen[{row}]")))
        .collect::<Vec<_>>();

    solver
        .add_constraint(constraints::all_different(queens.clone()).with_strength(strength))
        .post()?;
    for direction in [1, -1] {
        let diagonals = queens
            .iter()
            .enumerate()
            .map(|(row, queen)| queen.offset(direction * row as i32))
            .collect::<Vec<_>>();
        solver
            .add_constraint(constraints::all_different(diagonals).with_strength(strength))
            .post()?;
    }

    Ok(queens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_board_model_posts_one_constraint_per_line() {
        let mut solver = Solver::default();
        let queens = Queens::build(&mut solver, 4, QueensModel::Board, PropagationStrength::Domain)
            .expect("known variables");

        assert_eq!(16, queens.variables().len());
        // The total, 4 rows, 4 columns and 2 * 5 diagonals of length at least two.
        assert_eq!(1 + 4 + 4 + 10, solver.num_propagators());
        // A corner lies on its row, its column and one diagonal.
        assert_eq!(4, solver.degree(&queens.variables()[0]));
    }

    #[test]
    fn the_column_model_has_one_variable_per_row() {
        let mut solver = Solver::default();
        let queens = Queens::build(&mut solver, 5, QueensModel::Columns, PropagationStrength::Value)
            .expect("known variables");

        assert_eq!(5, queens.variables().len());
        assert_eq!(3, solver.num_propagators());
        assert_eq!(4, solver.upper_bound(&queens.variables()[0]));
    }
}
