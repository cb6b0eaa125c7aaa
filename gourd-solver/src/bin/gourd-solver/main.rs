mod os_signal_termination;
mod result;

use std::io::Write;
use std::time::Duration;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use gourd_solver::core::asserts::GOURD_ASSERT_LEVEL_DEFINITION;
use gourd_solver::core::asserts::GOURD_ASSERT_MODERATE;
use gourd_solver::core::convert_case::Case;
use gourd_solver::core::options::AfcDecay;
use gourd_solver::core::options::BranchingOptions;
use gourd_solver::core::options::BranchingStrategy;
use gourd_solver::core::options::PropagationStrength;
use gourd_solver::core::options::SolutionLimit;
use gourd_solver::core::options::ValueSelection;
use gourd_solver::core::results::SearchOutcome;
use gourd_solver::core::results::Solution;
use gourd_solver::core::statistics::configure_statistic_logging;
use gourd_solver::core::termination::Combinator;
use gourd_solver::core::termination::TerminationCondition;
use gourd_solver::core::termination::TimeBudget;
use gourd_solver::core::variables::DomainId;
use gourd_solver::core::Solver;
use gourd_solver::models::queens::Queens;
use gourd_solver::models::queens::QueensModel;
use gourd_solver::models::sudoku;
use gourd_solver::models::sudoku::Puzzle;
use gourd_solver::models::sudoku::SudokuModel;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::GourdError;
use result::GourdResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    puzzle: PuzzleCommand,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", global = true, verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", global = true, verbatim_doc_comment)]
    log_statistics: bool,
}

#[derive(Debug, Subcommand)]
enum PuzzleCommand {
    /// Solve one of the built-in 9x9 Sudoku puzzles.
    Sudoku(SudokuArgs),
    /// Place n queens on an n x n chess board such that no two queens attack each other.
    Queens(QueensArgs),
}

#[derive(Debug, Args)]
struct SudokuArgs {
    /// The index of the built-in puzzle to solve.
    ///
    /// Possible values: 0 to 17
    #[arg(long, default_value_t = 0, verbatim_doc_comment)]
    size: usize,

    /// The consistency enforced by the all-different constraints.
    #[arg(long, value_enum, default_value_t = PropagationStrength::Domain)]
    strength: PropagationStrength,

    /// The variable selection strategy; values are always split in half, lower half first.
    #[arg(long, value_enum, default_value_t = BranchingStrategy::SizeAfc)]
    branching: BranchingStrategy,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Debug, Args)]
struct QueensArgs {
    /// The number of rows and columns of the board.
    ///
    /// Possible values: u32
    #[arg(long, default_value_t = 8, verbatim_doc_comment)]
    size: u32,

    /// How the board is modelled.
    #[arg(long, value_enum, default_value_t)]
    model: QueensModel,

    /// The consistency enforced by the all-different constraints of the column model.
    #[arg(long, value_enum, default_value_t = PropagationStrength::Domain)]
    strength: PropagationStrength,

    /// The variable selection strategy; the smallest value is always tried first.
    #[arg(long, value_enum, default_value_t = BranchingStrategy::Size)]
    branching: BranchingStrategy,

    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// The number of solutions to report; 0 reports all solutions.
    ///
    /// Possible values: i64
    #[arg(
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        verbatim_doc_comment
    )]
    solutions: i64,

    /// The decay of the accumulated failure counts, used by the "sizeafc" and "afc" branchings.
    ///
    /// Possible values: f64 in (0, 1]
    #[arg(long, default_value_t = 1.0, verbatim_doc_comment)]
    decay: f64,
}

impl SearchArgs {
    /// Validates the arguments before any model is built.
    fn resolve(&self) -> GourdResult<(SolutionLimit, AfcDecay)> {
        Ok((
            SolutionLimit::from_requested(self.solutions)?,
            AfcDecay::new(self.decay)?,
        ))
    }
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging(
            "%%%gourd-stat:",
            Some("%%%gourd-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> GourdResult<()> {
    let cli = Cli::parse();

    configure_logging(cli.verbose, cli.log_statistics);

    if GOURD_ASSERT_LEVEL_DEFINITION >= GOURD_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the Gourd assert level is set to {GOURD_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let time_budget = cli
        .time_limit
        .map(|time_limit| TimeBudget::starting_now(Duration::from_millis(time_limit)));
    let mut termination = Combinator::new(OsSignal::install()?, time_budget);

    match cli.puzzle {
        PuzzleCommand::Sudoku(args) => solve_sudoku(args, &mut termination),
        PuzzleCommand::Queens(args) => solve_queens(args, &mut termination),
    }
}

fn solve_sudoku(args: SudokuArgs, termination: &mut impl TerminationCondition) -> GourdResult<()> {
    let (solution_limit, decay) = args.search.resolve()?;
    let puzzle = Puzzle::builtin(args.size).ok_or(GourdError::UnknownPuzzle {
        index: args.size,
        available: Puzzle::num_builtin(),
    })?;

    println!("Unsolved Sudoku:");
    print!("{}", sudoku::render_puzzle(&puzzle));

    let mut solver = Solver::default();
    let model = SudokuModel::build(&mut solver, &puzzle, args.strength)?;
    let options = BranchingOptions {
        strategy: args.branching,
        value_selection: ValueSelection::SplitMin,
        decay,
    };

    enumerate(
        &mut solver,
        &model.variables(),
        options,
        termination,
        solution_limit,
        |solution| {
            println!("Solved Sudoku:");
            print!("{}", sudoku::render_grid(&model.grid(solution)));
        },
    );

    Ok(())
}

fn solve_queens(args: QueensArgs, termination: &mut impl TerminationCondition) -> GourdResult<()> {
    let (solution_limit, decay) = args.search.resolve()?;
    if args.size == 0 {
        return Err(GourdError::BoardTooSmall(args.size));
    }

    let mut solver = Solver::default();
    let queens = Queens::build(&mut solver, args.size as usize, args.model, args.strength)?;
    let options = BranchingOptions {
        strategy: args.branching,
        value_selection: ValueSelection::Min,
        decay,
    };

    enumerate(
        &mut solver,
        queens.variables(),
        options,
        termination,
        solution_limit,
        |solution| {
            println!();
            print!("{}", queens.render(solution));
        },
    );

    Ok(())
}

/// Reports the solutions of the model in `solver` to `on_solution`, followed by a summary of the
/// search.
fn enumerate(
    solver: &mut Solver,
    variables: &[DomainId],
    options: BranchingOptions,
    termination: &mut impl TerminationCondition,
    solution_limit: SolutionLimit,
    mut on_solution: impl FnMut(&Solution),
) {
    if !options.strategy.uses_afc() && options.decay != AfcDecay::default() {
        warn!(
            "The decay {} is ignored by the {:?} branching strategy.",
            options.decay.value(),
            options.strategy
        );
    }

    let mut brancher = solver.configured_brancher(variables, options);
    let mut solutions = solver.get_solution_iterator(&mut brancher, termination, solution_limit);

    for solution in solutions.by_ref() {
        on_solution(&solution);
    }

    let num_solutions = solutions.num_solutions();
    let outcome = solutions.outcome();
    drop(solutions);

    println!();
    match outcome {
        Some(SearchOutcome::Interrupted) => println!("Search interrupted."),
        _ if num_solutions == 0 => println!("No solution found."),
        _ => {}
    }
    println!("Solutions: {num_solutions}");

    solver.log_statistics();
}
