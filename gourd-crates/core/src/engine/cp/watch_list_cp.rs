use enumset::EnumSet;

use crate::containers::KeyedVec;
use crate::engine::propagation::PropagatorConstructorContext;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;
use crate::engine::DomainEvent;

/// For every domain, the propagators which should be enqueued when the domain changes.
#[derive(Debug, Default)]
pub(crate) struct WatchListCP {
    watchers: KeyedVec<DomainId, Vec<Watcher>>,
}

#[derive(Debug, Clone, Copy)]
struct Watcher {
    propagator_id: PropagatorId,
    events: EnumSet<DomainEvent>,
}

impl WatchListCP {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(Vec::new());
    }

    pub(crate) fn watch_all(
        &mut self,
        domain: DomainId,
        events: EnumSet<DomainEvent>,
        propagator_id: PropagatorId,
    ) {
        self.watchers[domain].push(Watcher {
            propagator_id,
            events,
        });
    }

    /// The propagators watching `domain` for at least one of `events`.
    pub(crate) fn get_affected_propagators(
        &self,
        domain: DomainId,
        events: EnumSet<DomainEvent>,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.watchers[domain]
            .iter()
            .filter(move |watcher| !watcher.events.is_disjoint(events))
            .map(|watcher| watcher.propagator_id)
    }

    /// The number of propagators which have `domain` in their scope.
    pub(crate) fn num_watchers(&self, domain: DomainId) -> usize {
        self.watchers[domain].len()
    }
}

/// Used to register a propagator for notifications about events to a particular variable.
#[derive(Debug)]
pub struct Watchers<'a> {
    context: &'a mut PropagatorConstructorContext,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(context: &'a mut PropagatorConstructorContext) -> Self {
        Watchers { context }
    }

    pub(crate) fn watch_all(&mut self, domain: DomainId, events: EnumSet<DomainEvent>) {
        self.context.add_registration(domain, events);
    }
}
