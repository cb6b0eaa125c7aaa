//! Contains the structures corresponding to solution iterations.

use std::fmt::Debug;

use crate::branching::Brancher;
use crate::engine::termination::TerminationCondition;
use crate::engine::DepthFirstSearch;
use crate::engine::SearchOutcome;
use crate::engine::SearchStep;
use crate::options::SolutionLimit;
use crate::results::Solution;
use crate::Solver;

/// An [`Iterator`] over the solutions of the model in the [`Solver`], in the order in which the
/// depth-first search finds them.
///
/// The search is only advanced when the next solution is requested. Once the iterator has
/// returned [`None`], [`SolutionIterator::outcome`] reports why the search stopped. Dropping the
/// iterator at any point returns the solver to the root, after which a new iterator starts the
/// search from the beginning.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'brancher, 'termination, B, T> {
    solver: &'solver mut Solver,
    brancher: &'brancher mut B,
    termination: &'termination mut T,

    search: DepthFirstSearch,
    solution_limit: SolutionLimit,
    num_solutions: u64,
    outcome: Option<SearchOutcome>,
}

impl<'solver, 'brancher, 'termination, B: Brancher, T: TerminationCondition>
    SolutionIterator<'solver, 'brancher, 'termination, B, T>
{
    pub(crate) fn new(
        solver: &'solver mut Solver,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
        solution_limit: SolutionLimit,
    ) -> Self {
        SolutionIterator {
            solver,
            brancher,
            termination,
            search: DepthFirstSearch::default(),
            solution_limit,
            num_solutions: 0,
            outcome: None,
        }
    }

    /// The reason the search stopped, or [`None`] while it can still produce solutions.
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }

    /// The number of solutions produced so far.
    pub fn num_solutions(&self) -> u64 {
        self.num_solutions
    }

    /// The brancher which drives the search.
    pub fn brancher(&self) -> &B {
        &*self.brancher
    }

    /// Logs the statistics of the search so far.
    pub fn log_statistics(&self) {
        self.solver.log_statistics();
    }

    fn stop(&mut self, outcome: SearchOutcome) {
        self.search.release(&mut self.solver.satisfaction_solver);
        self.outcome = Some(outcome);
    }
}

impl<B: Brancher, T: TerminationCondition> Iterator for SolutionIterator<'_, '_, '_, B, T> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        if self.outcome.is_some() {
            return None;
        }

        match self.search.next_solution(
            &mut self.solver.satisfaction_solver,
            &mut *self.brancher,
            &mut *self.termination,
        ) {
            SearchStep::Solution(solution) => {
                self.num_solutions += 1;
                if self.solution_limit.is_reached(self.num_solutions) {
                    self.stop(SearchOutcome::SolutionLimitReached);
                }
                Some(solution)
            }
            SearchStep::Finished(outcome) => {
                self.stop(outcome);
                None
            }
        }
    }
}

impl<B, T> Drop for SolutionIterator<'_, '_, '_, B, T> {
    fn drop(&mut self) {
        self.search.release(&mut self.solver.satisfaction_solver);
    }
}
