use enumset::EnumSet;

use super::Propagator;
use crate::containers::HashMap;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::DomainEvent;
use crate::engine::DomainEvents;
use crate::engine::Watchers;

/// A propagator constructor creates a fully initialized instance of a [`Propagator`].
///
/// The constructor is responsible for indicating on which events the propagator should be
/// enqueued. Additionally, the propagator can be initialized with values that come from the
/// initial domains of the variables in its scope.
pub(crate) trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator + 'static;

    /// Create the propagator instance from `Self`.
    fn create(self, context: &mut PropagatorConstructorContext) -> Self::PropagatorImpl;
}

/// [`PropagatorConstructorContext`] is used when [`Propagator`]s are initialised after creation.
///
/// It collects the domains in the scope of the propagator together with the events each of them
/// should be watched for. Nothing is committed to the solver until the scope has been validated.
#[derive(Debug, Default)]
pub(crate) struct PropagatorConstructorContext {
    registrations: Vec<(DomainId, EnumSet<DomainEvent>)>,
    positions: HashMap<DomainId, usize>,
    has_repeated_domains: bool,
}

impl PropagatorConstructorContext {
    /// Subscribes the propagator to the given [`DomainEvents`] of `var`.
    ///
    /// Returns the variable so registration can be chained while building the propagator.
    pub(crate) fn register<Var: IntegerVariable>(
        &mut self,
        var: Var,
        domain_events: DomainEvents,
    ) -> Var {
        let mut watchers = Watchers::new(self);
        var.watch_all(&mut watchers, domain_events.get_int_events());
        var
    }

    pub(crate) fn add_registration(&mut self, domain_id: DomainId, events: EnumSet<DomainEvent>) {
        if let Some(&position) = self.positions.get(&domain_id) {
            self.registrations[position].1 |= events;
            self.has_repeated_domains = true;
        } else {
            let _ = self.positions.insert(domain_id, self.registrations.len());
            self.registrations.push((domain_id, events));
        }
    }

    /// The registered domains, each listed once, in order of first registration.
    pub(crate) fn registrations(&self) -> &[(DomainId, EnumSet<DomainEvent>)] {
        &self.registrations
    }

    /// Whether some domain was registered more than once, i.e. whether a variable occupies
    /// several positions in the scope of the propagator.
    pub(crate) fn has_repeated_domains(&self) -> bool {
        self.has_repeated_domains
    }
}
