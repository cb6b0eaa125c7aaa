use std::fmt::Debug;

use super::PropagationContextMut;
use crate::basic_types::PropagationStatusCP;
#[cfg(doc)]
use crate::engine::EmptyDomain;

/// The priority of a propagator; propagators with a higher priority are run before propagators
/// with a lower priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    VeryLow = 3,
}

/// The number of distinct [`Priority`] levels.
pub(crate) const NUM_PRIORITY_LEVELS: u32 = 4;

/// All propagators implement the [`Propagator`] trait.
///
/// A propagator removes values from the domains of the variables in its scope which cannot be part
/// of any solution of its constraint. Propagators hold no search-dependent state: everything they
/// know about the current node is read from the [`PropagationContextMut`].
///
/// A call to [`Propagator::propagate`] is expected to leave the propagator at its own fixpoint,
/// i.e. calling it again without an intervening domain change should not prune anything. The
/// solver relies on this to avoid re-enqueueing a propagator because of its own changes.
pub(crate) trait Propagator: Debug {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Returns the priority of the propagator represented as an integer. Lower values mean higher
    /// priority and the priority determines the order in which propagators will be asked to
    /// propagate.
    fn priority(&self) -> Priority {
        Priority::Medium
    }

    /// Propagate the constraint on the current domains.
    ///
    /// Domain changes go through the context; an [`EmptyDomain`] produced by one of them can be
    /// forwarded with `?`. A conflict which is detected without emptying a domain is reported as
    /// [`Inconsistency::Conflict`](crate::basic_types::Inconsistency::Conflict).
    fn propagate(&self, context: PropagationContextMut) -> PropagationStatusCP;
}
