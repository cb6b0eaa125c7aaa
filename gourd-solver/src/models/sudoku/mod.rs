//! The 9×9 Sudoku puzzle.
//!
//! Every cell holds a value in `1..=9`; the values in each row, each column and each 3×3 block are
//! pairwise distinct. A [`Puzzle`] fixes some of the cells up front.
mod puzzles;

use std::fmt::Write;

use gourd_core::constraints;
use gourd_core::options::PropagationStrength;
use gourd_core::results::ProblemSolution;
use gourd_core::variables::DomainId;
use gourd_core::ConstraintOperationError;
use gourd_core::Solver;

use self::puzzles::PUZZLES;

/// The number of rows and columns of the grid.
pub const SIZE: usize = 9;
const BLOCK_SIZE: usize = 3;

/// A partially filled grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Puzzle {
    givens: [[u8; SIZE]; SIZE],
}

impl Puzzle {
    /// The number of built-in puzzles.
    pub fn num_builtin() -> usize {
        PUZZLES.len()
    }

    /// The built-in puzzle with the given index, if it exists.
    pub fn builtin(index: usize) -> Option<Puzzle> {
        PUZZLES.get(index).map(|&givens| Puzzle { givens })
    }

    /// Creates a puzzle from its rows, where `0` marks an empty cell.
    pub fn from_rows(givens: [[u8; SIZE]; SIZE]) -> Puzzle {
        Puzzle { givens }
    }

    /// The value given for the cell, if any.
    pub fn given(&self, row: usize, column: usize) -> Option<i32> {
        match self.givens[row][column] {
            0 => None,
            value => Some(i32::from(value)),
        }
    }
}

/// The variables of a Sudoku posted to a [`Solver`], indexed by row and then column.
#[derive(Clone, Debug)]
pub struct SudokuModel {
    cells: [[DomainId; SIZE]; SIZE],
}

impl SudokuModel {
    /// Creates a variable for every cell and posts the all-different constraints over the rows,
    /// the columns and the blocks at the given strength, followed by the givens of the puzzle.
    pub fn build(
        solver: &mut Solver,
        puzzle: &Puzzle,
        strength: PropagationStrength,
    ) -> Result<SudokuModel, ConstraintOperationError> {
        let cells: [[DomainId; SIZE]; SIZE] = std::array::from_fn(|row| {
            std::array::from_fn(|column| {
                solver.new_named_bounded_integer(1, SIZE as i32, format!("cell[{row}][{column}]"))
            })
        });
        let model = SudokuModel { cells };

        for index in 0..SIZE {
            solver
                .add_constraint(constraints::all_different(model.row(index)).with_strength(strength))
                .post()?;
            solver
                .add_constraint(
                    constraints::all_different(model.column(index)).with_strength(strength),
                )
                .post()?;
        }

        for block_row in (0..SIZE).step_by(BLOCK_SIZE) {
            for block_column in (0..SIZE).step_by(BLOCK_SIZE) {
                solver
                    .add_constraint(
                        constraints::all_different(model.block(block_row, block_column))
                            .with_strength(strength),
                    )
                    .post()?;
            }
        }

        for (row, cells) in model.cells.iter().enumerate() {
            for (column, &cell) in cells.iter().enumerate() {
                if let Some(value) = puzzle.given(row, column) {
                    solver
                        .add_constraint(constraints::equals([cell], value))
                        .post()?;
                }
            }
        }

        Ok(model)
    }

    /// Every cell, row by row.
    pub fn variables(&self) -> Vec<DomainId> {
        self.cells.iter().flatten().copied().collect()
    }

    fn row(&self, row: usize) -> Vec<DomainId> {
        self.cells[row].to_vec()
    }

    fn column(&self, column: usize) -> Vec<DomainId> {
        self.cells.iter().map(|cells| cells[column]).collect()
    }

    fn block(&self, first_row: usize, first_column: usize) -> Vec<DomainId> {
        self.cells[first_row..first_row + BLOCK_SIZE]
            .iter()
            .flat_map(|cells| &cells[first_column..first_column + BLOCK_SIZE])
            .copied()
            .collect()
    }

    /// The values assigned to the cells by `solution`.
    pub fn grid(&self, solution: &impl ProblemSolution) -> [[i32; SIZE]; SIZE] {
        self.cells
            .map(|cells| cells.map(|cell| solution.get_integer_value(cell)))
    }
}

/// Renders the givens of the puzzle, with `-` for an empty cell.
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    render(|row, column| {
        puzzle
            .given(row, column)
            .map_or_else(|| "-".to_owned(), |value| value.to_string())
    })
}

/// Renders a completely filled grid.
pub fn render_grid(grid: &[[i32; SIZE]; SIZE]) -> String {
    render(|row, column| grid[row][column].to_string())
}

fn render(cell: impl Fn(usize, usize) -> String) -> String {
    let mut rendered = String::new();
    for row in 0..SIZE {
        for column in 0..SIZE {
            let _ = write!(rendered, " {}", cell(row, column));
        }
        rendered.push('\n');
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn givens_are_read_row_by_row() {
        let puzzle = Puzzle::builtin(0).expect("puzzle 0 exists");

        assert_eq!(None, puzzle.given(0, 0));
        assert_eq!(Some(2), puzzle.given(0, 3));
        assert_eq!(Some(9), puzzle.given(1, 1));
        assert_eq!(Some(8), puzzle.given(8, 5));
    }

    #[test]
    fn there_are_eighteen_builtin_puzzles() {
        assert_eq!(18, Puzzle::num_builtin());
        assert!(Puzzle::builtin(17).is_some());
        assert!(Puzzle::builtin(18).is_none());
    }

    #[test]
    fn empty_cells_are_rendered_as_dashes() {
        let rendered = render_puzzle(&Puzzle::builtin(0).expect("puzzle 0 exists"));

        assert_eq!(
            Some(" - - - 2 - 5 - - -"),
            rendered.lines().next()
        );
        assert_eq!(SIZE, rendered.lines().count());
    }

    #[test]
    fn blocks_cover_three_rows_and_three_columns() {
        let mut solver = Solver::default();
        let model = SudokuModel::build(
            &mut solver,
            &Puzzle::from_rows([[0; SIZE]; SIZE]),
            PropagationStrength::Value,
        )
        .expect("all variables belong to the solver");

        let block = model.block(3, 6);
        assert_eq!(9, block.len());
        assert_eq!(model.cells[3][6], block[0]);
        assert_eq!(model.cells[5][8], block[8]);
        // One constraint per row, column and block.
        assert_eq!(27, solver.num_propagators());
        assert_eq!(3, solver.degree(&model.cells[4][4]));
    }
}
