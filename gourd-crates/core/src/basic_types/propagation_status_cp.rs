use crate::engine::EmptyDomain;

/// The result of invoking a constraint programming propagator. The propagation can either succeed
/// or identify a conflict.
pub(crate) type PropagationStatusCP = Result<(), Inconsistency>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// A domain change requested by the propagator would have emptied a domain.
    EmptyDomain,
    /// The propagator detected that its constraint cannot be satisfied under the current domains.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
