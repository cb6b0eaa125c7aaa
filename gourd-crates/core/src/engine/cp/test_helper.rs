#![cfg(test)]
//! This module exposes helpers that aid testing of CP propagators. The [`TestSolver`] allows
//! setting up specific scenarios under which to test the various operations of a propagator.
use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorConstructor;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// A container for CP variables, which can be used to test propagators.
#[derive(Default, Debug)]
pub(crate) struct TestSolver {
    pub(crate) assignments: Assignments,
}

type BoxedPropagator = Box<dyn Propagator>;

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.assignments.grow(lb, ub)
    }

    /// Creates the propagator and runs it once on the current domains.
    pub(crate) fn new_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<BoxedPropagator, crate::basic_types::Inconsistency>
    where
        Constructor: PropagatorConstructor,
    {
        let mut context = PropagatorConstructorContext::default();
        let propagator: BoxedPropagator = Box::new(constructor.create(&mut context));

        self.propagate(&propagator)?;

        Ok(propagator)
    }

    pub(crate) fn propagate(&mut self, propagator: &BoxedPropagator) -> PropagationStatusCP {
        propagator.propagate(PropagationContextMut::new(&mut self.assignments))
    }

    /// Propagates and reports whether any domain changed.
    pub(crate) fn propagate_and_check_change(
        &mut self,
        propagator: &BoxedPropagator,
    ) -> Result<bool, crate::basic_types::Inconsistency> {
        let _ = self.assignments.drain_domain_events().count();
        self.propagate(propagator)?;
        Ok(self.assignments.drain_domain_events().count() > 0)
    }

    pub(crate) fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(&self.assignments, value)
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_lower_bound(var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_upper_bound(var)
    }

    pub(crate) fn set_lower_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.restrict_min(var, bound).map(|_| ())
    }

    pub(crate) fn set_upper_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.restrict_max(var, bound).map(|_| ())
    }

    pub(crate) fn remove(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.remove(var, value).map(|_| ())
    }

    pub(crate) fn assign(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.assign(var, value).map(|_| ())
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var);
        let actual_ub = self.upper_bound(var);

        assert_eq!(
            (lb, ub), (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}]"
        );
    }

    pub(crate) fn domain(&self, var: DomainId) -> Vec<i32> {
        self.assignments.get_domain_iterator(var).collect()
    }
}
