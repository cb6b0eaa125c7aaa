use enumset::EnumSet;

use super::TransformableVariable;
use crate::containers::StorageKey;
use crate::engine::variables::AffineView;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::DomainEvent;
use crate::engine::EmptyDomain;
use crate::engine::Watchers;

/// A structure which represents the most basic [`IntegerVariable`]; it is simply the id which
/// links to a domain (hence the name).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct DomainId {
    pub id: u32,
}

impl DomainId {
    pub fn new(id: u32) -> Self {
        DomainId { id }
    }
}

impl IntegerVariable for DomainId {
    type AffineView = AffineView<Self>;

    fn lower_bound(&self, assignment: &Assignments) -> i32 {
        assignment.get_lower_bound(*self)
    }

    fn upper_bound(&self, assignment: &Assignments) -> i32 {
        assignment.get_upper_bound(*self)
    }

    fn contains(&self, assignment: &Assignments, value: i32) -> bool {
        assignment.is_value_in_domain(*self, value)
    }

    fn size(&self, assignment: &Assignments) -> u32 {
        assignment.get_domain_size(*self)
    }

    fn iterate_domain(&self, assignment: &Assignments) -> impl Iterator<Item = i32> {
        assignment.get_domain_iterator(*self)
    }

    fn set_lower_bound(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        assignment.restrict_min(*self, value)
    }

    fn set_upper_bound(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        assignment.restrict_max(*self, value)
    }

    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        assignment.remove(*self, value)
    }

    fn assign(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        assignment.assign(*self, value)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) {
        watchers.watch_all(*self, events);
    }

    fn domain_id(&self) -> DomainId {
        *self
    }

    fn map_value(&self, value: i32) -> i32 {
        value
    }
}

impl TransformableVariable<AffineView<DomainId>> for DomainId {
    fn scaled(&self, scale: i32) -> AffineView<DomainId> {
        AffineView::new(*self, scale, 0)
    }

    fn offset(&self, offset: i32) -> AffineView<DomainId> {
        AffineView::new(*self, 1, offset)
    }
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
