use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// A change to the domain of an integer variable.
///
/// Every value leaving the domain raises [`DomainEvent::Removal`]; bound movements additionally
/// raise [`DomainEvent::LowerBound`] or [`DomainEvent::UpperBound`], and a domain which becomes a
/// singleton raises [`DomainEvent::Assign`].
#[derive(Debug, EnumSetType, Hash)]
pub enum DomainEvent {
    /// Event where an (integer) variable domain collapses to a single value.
    Assign,
    /// Event where an (integer) variable domain tightens the lower bound.
    LowerBound,
    /// Event where an (integer) variable domain tightens the upper bound.
    UpperBound,
    /// Event where an (integer) variable domain loses at least one value.
    Removal,
}

impl DomainEvents {
    /// DomainEvents with both lower and upper bound tightening (but not other value removal).
    pub(crate) const BOUNDS: DomainEvents = DomainEvents::create_with_int_events(enum_set!(
        DomainEvent::LowerBound | DomainEvent::UpperBound
    ));
    /// DomainEvents with lower and upper bound tightening, assigning to a single value, and
    ///  single value removal.
    pub(crate) const ANY_INT: DomainEvents = DomainEvents::create_with_int_events(enum_set!(
        DomainEvent::Assign
            | DomainEvent::LowerBound
            | DomainEvent::UpperBound
            | DomainEvent::Removal
    ));
    /// DomainEvents with only lower bound tightening.
    pub(crate) const LOWER_BOUND: DomainEvents =
        DomainEvents::create_with_int_events(enum_set!(DomainEvent::LowerBound));
    /// DomainEvents with only upper bound tightening.
    pub(crate) const UPPER_BOUND: DomainEvents =
        DomainEvents::create_with_int_events(enum_set!(DomainEvent::UpperBound));
    /// DomainEvents with only assigning to a single value.
    pub(crate) const ASSIGN: DomainEvents =
        DomainEvents::create_with_int_events(enum_set!(DomainEvent::Assign));
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct DomainEvents {
    int_events: EnumSet<DomainEvent>,
}

impl DomainEvents {
    pub(crate) const fn create_with_int_events(int_events: EnumSet<DomainEvent>) -> DomainEvents {
        DomainEvents { int_events }
    }

    pub(crate) fn get_int_events(&self) -> EnumSet<DomainEvent> {
        self.int_events
    }
}
