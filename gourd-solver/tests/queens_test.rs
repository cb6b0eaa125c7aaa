#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use gourd_solver::core::options::BranchingOptions;
use gourd_solver::core::options::BranchingStrategy;
use gourd_solver::core::options::PropagationStrength;
use gourd_solver::core::options::SolutionLimit;
use gourd_solver::core::options::ValueSelection;
use gourd_solver::core::results::SearchOutcome;
use gourd_solver::core::termination::Indefinite;
use gourd_solver::core::Solver;
use gourd_solver::models::queens::Queens;
use gourd_solver::models::queens::QueensModel;

const NUM_SOLUTIONS: [usize; 8] = [1, 0, 0, 2, 10, 4, 40, 92];

fn solve(n: usize, model: QueensModel) -> Vec<Vec<usize>> {
    let mut solver = Solver::default();
    let queens =
        Queens::build(&mut solver, n, model, PropagationStrength::Domain).expect("valid model");

    let options = BranchingOptions {
        strategy: BranchingStrategy::Size,
        value_selection: ValueSelection::Min,
        ..Default::default()
    };
    let mut brancher = solver.configured_brancher(queens.variables(), options);
    let mut termination = Indefinite;
    let mut solutions =
        solver.get_solution_iterator(&mut brancher, &mut termination, SolutionLimit::all());

    let columns = solutions
        .by_ref()
        .map(|solution| queens.columns(&solution))
        .collect();
    assert_eq!(Some(SearchOutcome::Exhausted), solutions.outcome());
    columns
}

fn assert_no_attacks(columns: &[usize]) {
    for (row, &column) in columns.iter().enumerate() {
        assert!(column < columns.len());
        for (other_row, &other_column) in columns.iter().enumerate().skip(row + 1) {
            assert_ne!(column, other_column);
            assert_ne!(other_row - row, column.abs_diff(other_column));
        }
    }
}

#[test]
fn four_queens_by_columns_has_two_solutions() {
    let mut solutions = solve(4, QueensModel::Columns);
    solutions.sort();

    assert_eq!(vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]], solutions);
}

#[test]
fn two_queens_has_no_solution() {
    assert!(solve(2, QueensModel::Columns).is_empty());
    assert!(solve(2, QueensModel::Board).is_empty());
}

#[test]
fn the_column_model_finds_every_placement() {
    for (n, &expected) in (1..=8).zip(NUM_SOLUTIONS.iter()) {
        let solutions = solve(n, QueensModel::Columns);

        assert_eq!(expected, solutions.len(), "n = {n}");
        solutions.iter().for_each(|columns| assert_no_attacks(columns));
    }
}

#[test]
fn the_board_model_finds_every_placement() {
    for (n, &expected) in (1..=8).zip(NUM_SOLUTIONS.iter()) {
        let solutions = solve(n, QueensModel::Board);

        assert_eq!(expected, solutions.len(), "n = {n}");
        solutions.iter().for_each(|columns| assert_no_attacks(columns));
    }
}

#[test]
fn both_models_agree() {
    let mut board = solve(6, QueensModel::Board);
    let mut columns = solve(6, QueensModel::Columns);
    board.sort();
    columns.sort();

    assert_eq!(board, columns);
}

#[test]
fn the_board_is_rendered_row_by_row() {
    let mut solver = Solver::default();
    let queens = Queens::build(&mut solver, 4, QueensModel::Columns, PropagationStrength::Domain)
        .expect("valid model");

    let mut brancher = solver.configured_brancher(
        queens.variables(),
        BranchingOptions {
            strategy: BranchingStrategy::None,
            value_selection: ValueSelection::Min,
            ..Default::default()
        },
    );
    let solution = solver
        .get_solution_iterator(&mut brancher, &mut Indefinite, SolutionLimit::at_most(1))
        .next()
        .expect("4-queens is solvable");

    assert_eq!(
        "0 1 0 0 \n0 0 0 1 \n1 0 0 0 \n0 0 1 0 \n",
        queens.render(&solution)
    );
}
