#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::collections::HashSet;

use gourd_solver::core::options::BranchingOptions;
use gourd_solver::core::options::BranchingStrategy;
use gourd_solver::core::options::PropagationStrength;
use gourd_solver::core::options::SolutionLimit;
use gourd_solver::core::options::ValueSelection;
use gourd_solver::core::results::SearchOutcome;
use gourd_solver::core::termination::Indefinite;
use gourd_solver::core::Solver;
use gourd_solver::models::sudoku::Puzzle;
use gourd_solver::models::sudoku::SudokuModel;
use gourd_solver::models::sudoku::SIZE;

const COMPLETION_OF_PUZZLE_0: [[i32; SIZE]; SIZE] = [
    [3, 7, 8, 2, 6, 5, 9, 1, 4],
    [5, 9, 6, 8, 1, 4, 7, 3, 2],
    [1, 4, 2, 7, 3, 9, 5, 6, 8],
    [2, 1, 7, 3, 8, 6, 4, 5, 9],
    [8, 5, 4, 9, 7, 1, 6, 2, 3],
    [6, 3, 9, 5, 4, 2, 8, 7, 1],
    [7, 8, 5, 4, 2, 3, 1, 9, 6],
    [4, 6, 3, 1, 9, 7, 2, 8, 5],
    [9, 2, 1, 6, 5, 8, 3, 4, 7],
];

/// Solves the puzzle and returns every solution together with the outcome of the search.
fn solve(
    puzzle: &Puzzle,
    strength: PropagationStrength,
    strategy: BranchingStrategy,
) -> (Vec<[[i32; SIZE]; SIZE]>, Option<SearchOutcome>) {
    let mut solver = Solver::default();
    let model = SudokuModel::build(&mut solver, puzzle, strength).expect("valid model");

    let options = BranchingOptions {
        strategy,
        value_selection: ValueSelection::SplitMin,
        ..Default::default()
    };
    let mut brancher = solver.configured_brancher(&model.variables(), options);
    let mut termination = Indefinite;
    let mut solutions =
        solver.get_solution_iterator(&mut brancher, &mut termination, SolutionLimit::all());

    let grids = solutions
        .by_ref()
        .map(|solution| model.grid(&solution))
        .collect();
    (grids, solutions.outcome())
}

fn assert_valid_completion(puzzle: &Puzzle, grid: &[[i32; SIZE]; SIZE]) {
    let groups = (0..SIZE).flat_map(|index| {
        let row = (0..SIZE).map(|column| grid[index][column]).collect::<Vec<_>>();
        let column = (0..SIZE).map(|row| grid[row][index]).collect::<Vec<_>>();
        let block = (0..SIZE)
            .map(|cell| grid[index / 3 * 3 + cell / 3][index % 3 * 3 + cell % 3])
            .collect::<Vec<_>>();
        [row, column, block]
    });

    for group in groups {
        let values = group.into_iter().collect::<HashSet<_>>();
        assert_eq!((1..=9).collect::<HashSet<_>>(), values);
    }

    for (row, values) in grid.iter().enumerate() {
        for (column, &value) in values.iter().enumerate() {
            if let Some(given) = puzzle.given(row, column) {
                assert_eq!(given, value, "cell ({row}, {column})");
            }
        }
    }
}

#[test]
fn puzzle_0_has_exactly_the_known_completion() {
    let puzzle = Puzzle::builtin(0).expect("puzzle exists");

    let (solutions, outcome) = solve(
        &puzzle,
        PropagationStrength::Domain,
        BranchingStrategy::SizeAfc,
    );

    assert_eq!(vec![COMPLETION_OF_PUZZLE_0], solutions);
    assert_eq!(Some(SearchOutcome::Exhausted), outcome);
}

#[test]
fn every_builtin_puzzle_has_a_unique_completion() {
    for index in 0..Puzzle::num_builtin() {
        let puzzle = Puzzle::builtin(index).expect("puzzle exists");

        let (solutions, outcome) = solve(
            &puzzle,
            PropagationStrength::Domain,
            BranchingStrategy::SizeAfc,
        );

        assert_eq!(1, solutions.len(), "puzzle {index}");
        assert_eq!(Some(SearchOutcome::Exhausted), outcome);
        assert_valid_completion(&puzzle, &solutions[0]);
    }
}

#[test]
fn every_strength_agrees_on_puzzle_0() {
    let puzzle = Puzzle::builtin(0).expect("puzzle exists");

    for strength in [
        PropagationStrength::Value,
        PropagationStrength::Bounds,
        PropagationStrength::Domain,
    ] {
        let (solutions, _) = solve(&puzzle, strength, BranchingStrategy::SizeAfc);

        assert_eq!(vec![COMPLETION_OF_PUZZLE_0], solutions, "{strength:?}");
    }
}

#[test]
fn every_branching_strategy_agrees_on_puzzle_0() {
    let puzzle = Puzzle::builtin(0).expect("puzzle exists");

    for strategy in [
        BranchingStrategy::None,
        BranchingStrategy::Size,
        BranchingStrategy::SizeDegree,
        BranchingStrategy::SizeAfc,
        BranchingStrategy::Afc,
    ] {
        let (solutions, _) = solve(&puzzle, PropagationStrength::Domain, strategy);

        assert_eq!(vec![COMPLETION_OF_PUZZLE_0], solutions, "{strategy:?}");
    }
}

#[test]
fn the_first_solution_is_reported_without_exhausting_the_tree() {
    let puzzle = Puzzle::builtin(4).expect("puzzle exists");
    let mut solver = Solver::default();
    let model =
        SudokuModel::build(&mut solver, &puzzle, PropagationStrength::Domain).expect("valid model");

    let mut brancher = solver.default_brancher();
    let mut termination = Indefinite;
    let mut solutions =
        solver.get_solution_iterator(&mut brancher, &mut termination, SolutionLimit::at_most(1));

    let solution = solutions.next().expect("the puzzle is solvable");
    assert_valid_completion(&puzzle, &model.grid(&solution));
    assert!(solutions.next().is_none());
    assert_eq!(Some(SearchOutcome::SolutionLimitReached), solutions.outcome());
}
