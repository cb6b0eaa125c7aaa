use crate::api::outputs::solution_iterator::SolutionIterator;
use crate::basic_types::ArityViolation;
use crate::basic_types::ConstraintOperationError;
use crate::branching::branchers::DefaultBrancher;
use crate::branching::Brancher;
use crate::constraints::Constraint;
use crate::constraints::ConstraintPoster;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::ConstraintSatisfactionSolver;
use crate::options::BranchingOptions;
use crate::options::SolutionLimit;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::StatisticLogger;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Creating Variables
/// ```rust
/// # use gourd_core::Solver;
/// # use gourd_core::variables::TransformableVariable;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10);
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
///
/// // Additionally, we can also create an affine view over a variable with both a scale and an offset (or either)
/// let view_over_integer = integer_between_bounds.scaled(-1).offset(15);
/// ```
///
/// # Solving
/// ```rust
/// # use gourd_core::constraints;
/// # use gourd_core::options::SolutionLimit;
/// # use gourd_core::results::SearchOutcome;
/// # use gourd_core::termination::Indefinite;
/// # use gourd_core::Solver;
/// let mut solver = Solver::default();
/// let variables = [
///     solver.new_bounded_integer(1, 3),
///     solver.new_bounded_integer(1, 3),
///     solver.new_bounded_integer(1, 3),
/// ];
///
/// solver
///     .add_constraint(constraints::all_different(variables))
///     .post()
///     .expect("all variables belong to the solver");
///
/// let mut brancher = solver.default_brancher();
/// let mut termination = Indefinite;
/// let mut solutions =
///     solver.get_solution_iterator(&mut brancher, &mut termination, SolutionLimit::all());
///
/// assert_eq!(6, solutions.by_ref().count());
/// assert_eq!(Some(SearchOutcome::Exhausted), solutions.outcome());
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which owns the domains and propagators.
    pub(crate) satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            log_statistic("numberOfVariables", self.num_variables());
            log_statistic("numberOfPropagators", self.num_propagators());
            self.satisfaction_solver
                .statistics
                .log(StatisticLogger::default());
            log_statistic_postfix();
        }
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower-bound of the given [`IntegerVariable`] at the root level.
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.lower_bound(self.satisfaction_solver.assignments())
    }

    /// Get the upper-bound of the given [`IntegerVariable`] at the root level.
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.upper_bound(self.satisfaction_solver.assignments())
    }

    /// Get the number of values in the domain of the given [`IntegerVariable`] at the root level.
    pub fn domain_size(&self, variable: &impl IntegerVariable) -> u32 {
        variable.size(self.satisfaction_solver.assignments())
    }

    /// The number of posted propagators in which `variable` occurs.
    pub fn degree(&self, variable: &impl IntegerVariable) -> u32 {
        self.satisfaction_solver.degree(variable.domain_id())
    }

    /// The name given to the variable in [`Solver::new_named_bounded_integer`].
    pub fn get_name(&self, domain_id: DomainId) -> Option<&str> {
        self.satisfaction_solver.get_name(domain_id)
    }

    /// Looks up a variable by the name it was created with.
    pub fn get_domain_by_name(&self, name: &str) -> Option<DomainId> {
        self.satisfaction_solver.get_domain_by_name(name)
    }

    pub fn num_variables(&self) -> usize {
        self.satisfaction_solver.assignments().num_domains() as usize
    }

    pub fn num_propagators(&self) -> usize {
        self.satisfaction_solver.num_propagators()
    }

    /// Every variable created by this solver, in creation order.
    pub fn variables(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.satisfaction_solver.assignments().get_domains()
    }
}

/// Functions to create integer variables.
impl Solver {
    /// Create a fresh integer variable with a domain of `[lower_bound, upper_bound]`.
    ///
    /// # Example
    /// ```rust
    /// # use gourd_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let integer = solver.new_bounded_integer(1, 10);
    ///
    /// assert_eq!(solver.lower_bound(&integer), 1);
    /// assert_eq!(solver.upper_bound(&integer), 10);
    /// ```
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a fresh integer variable with a domain of `[lower_bound, upper_bound]` and a
    /// provided `name`.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver.create_new_integer_variable(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`]; the constraint is
    /// only added once [`ConstraintPoster::post`] is called.
    ///
    /// If the poster is dropped without posting, the constraint _is not_ added to the solver and
    /// a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use gourd_core::constraints;
    /// # use gourd_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::equals([a, b], 0))
    ///     .post()
    ///     .expect("both variables belong to the solver");
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    pub(crate) fn add_propagator(
        &mut self,
        constructor: impl PropagatorConstructor,
        constraint: &'static str,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver
            .add_propagator(constructor, constraint)
    }

    /// Checks that every variable was created by this solver.
    pub(crate) fn check_variables<Var: IntegerVariable>(
        &self,
        variables: &[Var],
        constraint: &'static str,
    ) -> Result<(), ConstraintOperationError> {
        let num_domains = self.satisfaction_solver.assignments().num_domains();
        match variables
            .iter()
            .map(IntegerVariable::domain_id)
            .find(|domain_id| domain_id.id >= num_domains)
        {
            Some(unknown) => Err(ConstraintOperationError::InvalidConstraintArity {
                constraint,
                violation: ArityViolation::UnknownVariable(unknown),
            }),
            None => Ok(()),
        }
    }
}

/// Functions which solve the model.
impl Solver {
    /// Creates the default [`Brancher`] over every variable in the solver, see
    /// [`BranchingOptions::default`].
    pub fn default_brancher(&self) -> DefaultBrancher {
        let variables = self.variables().collect::<Vec<_>>();
        self.configured_brancher(&variables, BranchingOptions::default())
    }

    /// Creates the [`Brancher`] described by `options` over `variables`. The degree of each
    /// variable is taken from the constraints posted so far.
    pub fn configured_brancher(
        &self,
        variables: &[DomainId],
        options: BranchingOptions,
    ) -> DefaultBrancher {
        let num_occurrences = variables
            .iter()
            .map(|variable| self.degree(variable))
            .collect::<Vec<_>>();
        DefaultBrancher::from_options(variables, &num_occurrences, options)
    }

    /// Returns an [`Iterator`] over the solutions of the model, driven by a depth-first search
    /// with the provided `brancher`.
    ///
    /// The search stops once `solution_limit` solutions have been produced, the search tree is
    /// exhausted, or the `termination` condition fires.
    pub fn get_solution_iterator<
        'this,
        'brancher,
        'termination,
        B: Brancher,
        T: TerminationCondition,
    >(
        &'this mut self,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
        solution_limit: SolutionLimit,
    ) -> SolutionIterator<'this, 'brancher, 'termination, B, T> {
        SolutionIterator::new(self, brancher, termination, solution_limit)
    }
}
