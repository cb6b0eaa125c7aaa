//! Houses the solver which owns the domains, the propagators and the propagation loop.
use log::trace;

use crate::basic_types::ArityViolation;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::SolutionReference;
use crate::containers::KeyedVec;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::propagation::PropagatorId;
use crate::engine::solver_statistics::SolverStatistics;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::engine::PropagatorQueue;
use crate::engine::Snapshot;
use crate::engine::VariableNames;
use crate::engine::WatchListCP;
use crate::gourd_assert_moderate;
use crate::gourd_assert_simple;
use crate::predicates::Predicate;

/// The result of running propagation to a fixpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropagationOutcome {
    /// No domain was changed.
    NoChange,
    /// At least one domain was changed and a fixpoint was reached.
    Changed,
    /// A propagator detected that the current domains contain no solution.
    Failed,
}

/// A propagator together with the domains in its scope.
#[derive(Debug)]
struct PropagatorSlot {
    propagator: Box<dyn Propagator>,
    scope: Box<[DomainId]>,
    /// Whether one domain occupies several positions in the scope; such a propagator has to be
    /// notified of its own changes.
    has_repeated_domains: bool,
}

/// A solver which propagates constraints over finite integer domains.
///
/// It maintains the [`Assignments`], the propagators posted against them, and the watch lists
/// which map domain events to the propagators which should be enqueued. Search is driven from the
/// outside: the caller takes [`Snapshot`]s, applies decisions, and asks for a propagation
/// fixpoint.
#[derive(Debug, Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    assignments: Assignments,
    propagators: KeyedVec<PropagatorId, PropagatorSlot>,
    watch_list: WatchListCP,
    propagator_queue: PropagatorQueue,
    variable_names: VariableNames,
    pub(crate) statistics: SolverStatistics,
    /// The propagator which reported the most recent failure.
    last_conflict: Option<PropagatorId>,
}

// methods that offer basic functionality
impl ConstraintSatisfactionSolver {
    /// Create a new integer variable with the domain `[lower_bound, upper_bound]`.
    pub(crate) fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        gourd_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "variables can only be created at the root"
        );

        let domain_id = self.assignments.grow(lower_bound, upper_bound);
        self.watch_list.grow();

        if let Some(name) = name {
            self.variable_names.add_integer(domain_id, name);
        }

        domain_id
    }

    pub(crate) fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn get_name(&self, domain_id: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(domain_id)
    }

    pub(crate) fn get_domain_by_name(&self, name: &str) -> Option<DomainId> {
        self.variable_names.get_domain_by_name(name)
    }

    /// The number of propagators which have `domain_id` in their scope.
    pub(crate) fn degree(&self, domain_id: DomainId) -> u32 {
        self.watch_list.num_watchers(domain_id) as u32
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    /// The scope of the propagator which detected the most recent failure.
    pub(crate) fn last_conflict_scope(&self) -> &[DomainId] {
        self.last_conflict
            .map(|propagator_id| &*self.propagators[propagator_id].scope)
            .unwrap_or(&[])
    }

    /// A view on the current assignment; only valid when every domain is fixed.
    pub(crate) fn solution_reference(&self) -> SolutionReference<'_> {
        SolutionReference::new(&self.assignments)
    }
}

// methods for adding propagators
impl ConstraintSatisfactionSolver {
    /// Post a new propagator to the solver.
    ///
    /// The scope of the propagator is validated before anything is committed: a reference to an
    /// unknown variable is reported as an [`ArityViolation::UnknownVariable`] and leaves the
    /// solver untouched. The propagator is enqueued but not yet run; a root failure therefore
    /// surfaces during search.
    pub(crate) fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
        constraint: &'static str,
    ) -> Result<(), ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
    {
        gourd_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "propagators can only be added at the root"
        );

        let mut context = PropagatorConstructorContext::default();
        let propagator = constructor.create(&mut context);

        let num_domains = self.assignments.num_domains();
        if let Some(&(unknown, _)) = context
            .registrations()
            .iter()
            .find(|(domain_id, _)| domain_id.id >= num_domains)
        {
            return Err(ConstraintOperationError::InvalidConstraintArity {
                constraint,
                violation: ArityViolation::UnknownVariable(unknown),
            });
        }

        let propagator_id = PropagatorId(self.propagators.len() as u32);
        for &(domain_id, events) in context.registrations() {
            self.watch_list.watch_all(domain_id, events, propagator_id);
        }

        let propagator: Box<dyn Propagator> = Box::new(propagator);
        self.propagator_queue
            .enqueue_propagator(propagator_id, propagator.priority());

        let _ = self.propagators.push(PropagatorSlot {
            propagator,
            scope: context
                .registrations()
                .iter()
                .map(|&(domain_id, _)| domain_id)
                .collect(),
            has_repeated_domains: context.has_repeated_domains(),
        });

        Ok(())
    }
}

// methods used by the search
impl ConstraintSatisfactionSolver {
    /// Takes a [`Snapshot`] of the domains; everything changed afterwards is undone by
    /// [`ConstraintSatisfactionSolver::restore`].
    pub(crate) fn checkpoint(&mut self) -> Snapshot {
        gourd_assert_moderate!(!self.assignments.has_pending_events());
        self.assignments.snapshot()
    }

    /// Restores the domains to `snapshot` and discards all pending propagation.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.assignments.restore(snapshot);
        self.propagator_queue.clear();
    }

    /// Enqueues every propagator, used when search starts from the root.
    pub(crate) fn enqueue_all_propagators(&mut self) {
        for (propagator_id, slot) in self.propagators.keys().zip(self.propagators.iter()) {
            self.propagator_queue
                .enqueue_propagator(propagator_id, slot.propagator.priority());
        }
    }

    /// Applies a search decision; the propagators watching the affected domain are notified by
    /// the next call to [`ConstraintSatisfactionSolver::propagate`].
    pub(crate) fn apply_decision(&mut self, decision: Predicate) -> Result<(), EmptyDomain> {
        trace!("Decision {decision}");
        let _ = self.assignments.post_predicate(decision)?;
        Ok(())
    }

    /// Runs the enqueued propagators until a fixpoint is reached or a failure is detected.
    ///
    /// Propagators are popped in order of priority. After a propagator has run, every propagator
    /// watching a changed domain is enqueued; the propagator which caused the change is only
    /// enqueued again when one of its domains occurs several times in its scope.
    pub(crate) fn propagate(&mut self) -> PropagationOutcome {
        let num_trail_entries_before = self.assignments.num_trail_entries();

        self.notify_propagators(None);

        while let Some(propagator_id) = self.propagator_queue.pop() {
            let slot = &self.propagators[propagator_id];
            let status = slot
                .propagator
                .propagate(PropagationContextMut::new(&mut self.assignments));
            self.statistics.engine_statistics.num_propagations += 1;

            match status {
                Ok(()) => self.notify_propagators(Some(propagator_id)),
                Err(inconsistency) => {
                    trace!(
                        "{} ({propagator_id}) failed: {inconsistency:?}",
                        self.propagators[propagator_id].propagator.name()
                    );
                    self.last_conflict = Some(propagator_id);
                    self.propagator_queue.clear();
                    return PropagationOutcome::Failed;
                }
            }
        }

        if self.assignments.num_trail_entries() > num_trail_entries_before {
            PropagationOutcome::Changed
        } else {
            PropagationOutcome::NoChange
        }
    }

    /// Enqueues the propagators which watch the domain events raised since the last call.
    fn notify_propagators(&mut self, source: Option<PropagatorId>) {
        for (domain_id, events) in self.assignments.drain_domain_events() {
            for propagator_id in self.watch_list.get_affected_propagators(domain_id, events) {
                let slot = &self.propagators[propagator_id];
                if source == Some(propagator_id) && !slot.has_repeated_domains {
                    continue;
                }
                self.propagator_queue
                    .enqueue_propagator(propagator_id, slot.propagator.priority());
            }
        }
    }
}
