use std::time::Duration;

use crate::create_statistics_struct;
use crate::statistics::log_statistic;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Structure responsible for storing several statistics of the solving process of the solver.
#[derive(Debug, Default)]
pub(crate) struct SolverStatistics {
    /// Core statistics of the solver engine (e.g. the number of decisions)
    pub(crate) engine_statistics: EngineStatistics,
    /// The amount of time which is spent in the solver.
    pub(crate) time_spent_in_solver: Duration,
}

impl SolverStatistics {
    pub(crate) fn log(&self, statistic_logger: StatisticLogger) {
        self.engine_statistics.log(statistic_logger);
        log_statistic("solveTime", self.time_spent_in_solver.as_secs_f64());
    }
}

create_statistics_struct!(
    /// Core statistics of the solver engine (e.g. the number of decisions)
    EngineStatistics {
        /// The number of decisions taken by the solver
        num_decisions: u64,
        /// The number of failed nodes
        num_conflicts: u64,
        /// The number of times a propagator was invoked
        num_propagations: u64,
        /// The number of solutions reported by the search
        num_solutions: u64,
        /// The peak depth of the seach tree
        peak_depth: u64,
});
