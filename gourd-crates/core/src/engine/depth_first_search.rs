//! A resumable depth-first search over the decisions of a [`Brancher`].
use std::time::Instant;

use log::debug;
use log::trace;

use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::PropagationOutcome;
use crate::engine::Snapshot;
use crate::predicate;
use crate::predicates::Predicate;

/// The reason the search stopped producing solutions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The whole search tree has been explored; every solution has been reported.
    Exhausted,
    /// The requested number of solutions has been reported.
    SolutionLimitReached,
    /// The termination condition fired before the tree was exhausted.
    Interrupted,
}

/// What a call to [`DepthFirstSearch::next_solution`] produced.
#[derive(Debug)]
pub(crate) enum SearchStep {
    Solution(Solution),
    Finished(SearchOutcome),
}

/// A node on the search stack; the left branch posts `decision`, the right branch its negation.
#[derive(Clone, Copy, Debug)]
struct Node {
    checkpoint: Snapshot,
    decision: Predicate,
    right_branch_taken: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Propagate,
    Backtrack,
    Finished(SearchOutcome),
}

/// Depth-first search with binary branching.
///
/// The search is suspended after every solution so that solutions can be handed out lazily; the
/// next call resumes by backtracking from the reported leaf. The stack holds one [`Node`] per open
/// decision, so resuming never revisits a part of the tree.
#[derive(Debug)]
pub(crate) struct DepthFirstSearch {
    root: Option<Snapshot>,
    stack: Vec<Node>,
    phase: Phase,
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        DepthFirstSearch {
            root: None,
            stack: Vec::new(),
            phase: Phase::Start,
        }
    }
}

impl DepthFirstSearch {
    /// Continues the search until the next solution is found or the search is over.
    pub(crate) fn next_solution(
        &mut self,
        solver: &mut ConstraintSatisfactionSolver,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SearchStep {
        let start = Instant::now();
        let step = self.search(solver, brancher, termination);
        solver.statistics.time_spent_in_solver += start.elapsed();
        step
    }

    fn search(
        &mut self,
        solver: &mut ConstraintSatisfactionSolver,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SearchStep {
        loop {
            match self.phase {
                Phase::Start => {
                    self.root = Some(solver.checkpoint());
                    solver.enqueue_all_propagators();
                    self.phase = Phase::Propagate;
                }

                Phase::Propagate => {
                    if termination.should_stop() {
                        self.finish(solver, SearchOutcome::Interrupted);
                        continue;
                    }

                    if solver.propagate() == PropagationOutcome::Failed {
                        solver.statistics.engine_statistics.num_conflicts += 1;
                        brancher.on_conflict(solver.last_conflict_scope());
                        self.phase = Phase::Backtrack;
                        continue;
                    }

                    let decision = next_decision(solver, brancher);
                    let Some(decision) = decision else {
                        solver.statistics.engine_statistics.num_solutions += 1;
                        brancher.on_solution(solver.solution_reference());
                        debug!("Solution found at depth {}", self.stack.len());

                        self.phase = Phase::Backtrack;
                        return SearchStep::Solution(solver.solution_reference().into());
                    };

                    let checkpoint = solver.checkpoint();
                    self.stack.push(Node {
                        checkpoint,
                        decision,
                        right_branch_taken: false,
                    });

                    let statistics = &mut solver.statistics.engine_statistics;
                    statistics.num_decisions += 1;
                    statistics.peak_depth = statistics.peak_depth.max(self.stack.len() as u64);
                    termination.decision_has_been_made();

                    self.apply(solver, brancher, decision);
                }

                Phase::Backtrack => {
                    let Some(node) = self.stack.last_mut() else {
                        self.finish(solver, SearchOutcome::Exhausted);
                        continue;
                    };

                    solver.restore(node.checkpoint);
                    brancher.on_backtrack();

                    if node.right_branch_taken {
                        let _ = self.stack.pop();
                        continue;
                    }

                    node.right_branch_taken = true;
                    let decision = !node.decision;
                    trace!("Backtrack to depth {}, trying {decision}", self.stack.len());

                    // The restore undid the snapshot as well; the right branch needs its own.
                    let checkpoint = solver.checkpoint();
                    if let Some(node) = self.stack.last_mut() {
                        node.checkpoint = checkpoint;
                    }

                    self.apply(solver, brancher, decision);
                }

                Phase::Finished(outcome) => return SearchStep::Finished(outcome),
            }
        }
    }

    /// Posts `decision`; a decision which empties its domain is a conflict over that domain.
    fn apply(
        &mut self,
        solver: &mut ConstraintSatisfactionSolver,
        brancher: &mut impl Brancher,
        decision: Predicate,
    ) {
        self.phase = match solver.apply_decision(decision) {
            Ok(()) => Phase::Propagate,
            Err(_) => {
                solver.statistics.engine_statistics.num_conflicts += 1;
                brancher.on_conflict(&[decision.get_domain()]);
                Phase::Backtrack
            }
        };
    }

    fn finish(&mut self, solver: &mut ConstraintSatisfactionSolver, outcome: SearchOutcome) {
        debug!("Search finished: {outcome:?}");
        self.release(solver);
        self.phase = Phase::Finished(outcome);
    }

    /// Returns the solver to the state it was in before the search started.
    ///
    /// Calling this more than once has no effect.
    pub(crate) fn release(&mut self, solver: &mut ConstraintSatisfactionSolver) {
        self.stack.clear();
        if let Some(root) = self.root.take() {
            solver.restore(root);
        }
        if !matches!(self.phase, Phase::Finished(_)) {
            self.phase = Phase::Finished(SearchOutcome::Interrupted);
        }
    }
}

/// Asks the brancher for a decision; if it has none left while some domain is unfixed, the
/// smallest value of the first unfixed domain is tried so that every solution is complete.
fn next_decision(
    solver: &ConstraintSatisfactionSolver,
    brancher: &mut impl Brancher,
) -> Option<Predicate> {
    let assignments = solver.assignments();
    let mut context = SelectionContext::new(assignments);

    brancher.next_decision(&mut context).or_else(|| {
        assignments
            .get_domains()
            .find(|&domain_id| !assignments.is_domain_assigned(domain_id))
            .map(|domain_id| {
                let value = assignments.get_lower_bound(domain_id);
                predicate!(domain_id == value)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::ProblemSolution;
    use crate::branching::branchers::DefaultBrancher;
    use crate::engine::termination::DecisionBudget;
    use crate::engine::termination::Indefinite;
    use crate::engine::variables::DomainId;
    use crate::options::BranchingOptions;
    use crate::propagators::AllDifferentValueConstructor;
    use crate::propagators::LinearLessOrEqualConstructor;

    fn brancher_over(solver: &ConstraintSatisfactionSolver, vars: &[DomainId]) -> DefaultBrancher {
        let degrees = vars.iter().map(|&var| solver.degree(var)).collect::<Vec<_>>();
        DefaultBrancher::from_options(vars, &degrees, BranchingOptions::default())
    }

    fn all_solutions(
        solver: &mut ConstraintSatisfactionSolver,
        vars: &[DomainId],
    ) -> (Vec<Vec<i32>>, SearchOutcome) {
        let mut brancher = brancher_over(solver, vars);
        let mut search = DepthFirstSearch::default();
        let mut solutions = vec![];
        loop {
            match search.next_solution(solver, &mut brancher, &mut Indefinite) {
                SearchStep::Solution(solution) => solutions.push(solution.values_of(vars)),
                SearchStep::Finished(outcome) => return (solutions, outcome),
            }
        }
    }

    #[test]
    fn permutations_are_enumerated_exactly_once() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let vars = (0..3)
            .map(|_| solver.create_new_integer_variable(1, 3, None))
            .collect::<Vec<_>>();
        solver
            .add_propagator(
                AllDifferentValueConstructor {
                    vars: vars.clone().into(),
                },
                "all_different",
            )
            .expect("known variables");

        let (mut solutions, outcome) = all_solutions(&mut solver, &vars);
        solutions.sort();

        assert_eq!(SearchOutcome::Exhausted, outcome);
        assert_eq!(
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ],
            solutions
        );
    }

    #[test]
    fn root_failure_yields_no_solutions() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(2, 4, None);
        solver
            .add_propagator(LinearLessOrEqualConstructor::new([x].into(), 1), "linear")
            .expect("known variables");

        let (solutions, outcome) = all_solutions(&mut solver, &[x]);

        assert!(solutions.is_empty());
        assert_eq!(SearchOutcome::Exhausted, outcome);
        assert_eq!(1, solver.statistics.engine_statistics.num_conflicts);
    }

    #[test]
    fn domains_are_restored_when_the_search_finishes() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(0, 3, None);
        let y = solver.create_new_integer_variable(0, 3, None);
        solver
            .add_propagator(LinearLessOrEqualConstructor::new([x, y].into(), 1), "linear")
            .expect("known variables");

        let (solutions, _) = all_solutions(&mut solver, &[x, y]);

        assert_eq!(3, solutions.len());
        assert_eq!(0, solver.assignments().get_decision_level());
        assert_eq!(3, solver.assignments().get_upper_bound(x));
        assert_eq!(3, solver.assignments().get_upper_bound(y));
    }

    #[test]
    fn variables_outside_the_brancher_are_still_fixed() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(0, 1, None);
        let y = solver.create_new_integer_variable(5, 6, None);

        let mut brancher = brancher_over(&solver, &[x]);
        let mut search = DepthFirstSearch::default();

        let SearchStep::Solution(solution) =
            search.next_solution(&mut solver, &mut brancher, &mut Indefinite)
        else {
            panic!("expected a solution");
        };
        assert_eq!(5, solution.get_integer_value(y));

        search.release(&mut solver);
    }

    #[test]
    fn termination_interrupts_the_search() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let vars = (0..4)
            .map(|_| solver.create_new_integer_variable(0, 3, None))
            .collect::<Vec<_>>();

        let mut brancher = brancher_over(&solver, &vars);
        let mut search = DepthFirstSearch::default();
        let mut termination = DecisionBudget::new(2);

        let mut num_solutions = 0;
        let outcome = loop {
            match search.next_solution(&mut solver, &mut brancher, &mut termination) {
                SearchStep::Solution(_) => num_solutions += 1,
                SearchStep::Finished(outcome) => break outcome,
            }
        };

        assert_eq!(SearchOutcome::Interrupted, outcome);
        assert_eq!(0, num_solutions);
        assert_eq!(0, solver.assignments().get_decision_level());
    }

    /// Branches once on a decision which cannot hold, then leaves the rest to the search.
    #[derive(Debug, Default)]
    struct EmptyingBrancher {
        variable: Option<DomainId>,
        conflicts: Vec<Vec<DomainId>>,
    }

    impl Brancher for EmptyingBrancher {
        fn next_decision(&mut self, _context: &mut SelectionContext) -> Option<Predicate> {
            self.variable.take().map(|variable| predicate!(variable >= 10))
        }

        fn on_conflict(&mut self, scope: &[DomainId]) {
            self.conflicts.push(scope.to_vec());
        }
    }

    #[test]
    fn failing_decisions_are_reported_to_the_brancher() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_integer_variable(0, 3, None);

        let mut brancher = EmptyingBrancher {
            variable: Some(x),
            conflicts: vec![],
        };
        let mut search = DepthFirstSearch::default();

        let SearchStep::Solution(solution) =
            search.next_solution(&mut solver, &mut brancher, &mut Indefinite)
        else {
            panic!("expected a solution");
        };

        assert_eq!(0, solution.get_integer_value(x));
        assert_eq!(vec![vec![x]], brancher.conflicts);
        assert_eq!(1, solver.statistics.engine_statistics.num_conflicts);

        search.release(&mut solver);
    }
}
