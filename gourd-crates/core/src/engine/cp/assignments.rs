use enumset::EnumSet;

use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::predicates::predicate::Predicate;
use crate::engine::variables::DomainId;
use crate::engine::DomainEvent;
use crate::gourd_assert_moderate;
use crate::gourd_assert_simple;

/// The domains of all integer variables, together with the trail that allows changes to them to be
/// undone.
///
/// A domain is stored as a bitset over its initial range together with its current bounds and
/// size. The bounds are always values which are present in the bitset, so removing a bound moves it
/// to the next present value.
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    trail: Trail<TrailEntry>,
    domains: KeyedVec<DomainId, IntegerDomain>,
    /// The domain events raised since the last call to [`Assignments::drain_domain_events`].
    events: Vec<(DomainId, EnumSet<DomainEvent>)>,
}

/// A point in the history of the [`Assignments`] which can be restored.
///
/// Snapshots are taken and restored in a stack-like fashion: restoring a snapshot invalidates all
/// snapshots which were taken after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    decision_level: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

impl Assignments {
    /// Creates a new variable with the domain `[lower_bound, upper_bound]`.
    pub fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        gourd_assert_simple!(
            lower_bound <= upper_bound,
            "the domain [{lower_bound}, {upper_bound}] is empty"
        );

        self.domains
            .push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    pub fn get_domain_size(&self, domain_id: DomainId) -> u32 {
        self.domains[domain_id].size
    }

    pub fn get_initial_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].initial_lower_bound
    }

    pub fn get_initial_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].initial_upper_bound
    }

    pub fn is_value_in_domain(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.domains[domain_id].size == 1
    }

    /// Returns the value of the variable if its domain is a singleton.
    pub fn get_assigned_value(&self, domain_id: DomainId) -> Option<i32> {
        let domain = &self.domains[domain_id];
        (domain.size == 1).then_some(domain.lower_bound)
    }

    /// Iterates over the values in the domain in increasing order.
    pub fn get_domain_iterator(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        let domain = &self.domains[domain_id];
        (domain.lower_bound..=domain.upper_bound).filter(move |&value| domain.is_present(value))
    }

    /// Whether every variable has a singleton domain.
    pub fn all_assigned(&self) -> bool {
        self.domains.iter().all(|domain| domain.size == 1)
    }

    /// Raise the lower bound of the domain to the smallest value in the domain which is at least
    /// `value`.
    pub fn restrict_min(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if value <= domain.lower_bound {
            return Ok(false);
        }

        let new_lower_bound = domain.next_present(value).ok_or(EmptyDomain)?;
        let removed = domain.count_present(domain.lower_bound, new_lower_bound - 1);

        self.trail.push(TrailEntry::LowerBound {
            domain_id,
            old_lower_bound: domain.lower_bound,
            old_size: domain.size,
        });
        domain.lower_bound = new_lower_bound;
        domain.size -= removed;

        let mut events = DomainEvent::LowerBound | DomainEvent::Removal;
        if domain.size == 1 {
            events |= DomainEvent::Assign;
        }
        self.events.push((domain_id, events));

        Ok(true)
    }

    /// Lower the upper bound of the domain to the largest value in the domain which is at most
    /// `value`.
    pub fn restrict_max(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let domain = &mut self.domains[domain_id];
        if value >= domain.upper_bound {
            return Ok(false);
        }

        let new_upper_bound = domain.previous_present(value).ok_or(EmptyDomain)?;
        let removed = domain.count_present(new_upper_bound + 1, domain.upper_bound);

        self.trail.push(TrailEntry::UpperBound {
            domain_id,
            old_upper_bound: domain.upper_bound,
            old_size: domain.size,
        });
        domain.upper_bound = new_upper_bound;
        domain.size -= removed;

        let mut events = DomainEvent::UpperBound | DomainEvent::Removal;
        if domain.size == 1 {
            events |= DomainEvent::Assign;
        }
        self.events.push((domain_id, events));

        Ok(true)
    }

    /// Remove a single value from the domain.
    pub fn remove(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let domain = &self.domains[domain_id];
        if !domain.contains(value) {
            return Ok(false);
        }
        if domain.size == 1 {
            return Err(EmptyDomain);
        }

        if value == domain.lower_bound {
            return self.restrict_min(domain_id, value + 1);
        }
        if value == domain.upper_bound {
            return self.restrict_max(domain_id, value - 1);
        }

        let domain = &mut self.domains[domain_id];
        domain.set_present(value, false);
        domain.size -= 1;
        self.trail.push(TrailEntry::Removal { domain_id, value });

        let mut events = EnumSet::only(DomainEvent::Removal);
        if domain.size == 1 {
            events |= DomainEvent::Assign;
        }
        self.events.push((domain_id, events));

        Ok(true)
    }

    /// Reduce the domain to the single value `value`.
    pub fn assign(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        if !self.is_value_in_domain(domain_id, value) {
            return Err(EmptyDomain);
        }

        let raised = self.restrict_min(domain_id, value)?;
        let lowered = self.restrict_max(domain_id, value)?;

        gourd_assert_moderate!(self.get_assigned_value(domain_id) == Some(value));

        Ok(raised || lowered)
    }

    /// Apply the change described by `predicate`.
    pub fn post_predicate(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.restrict_min(domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.restrict_max(domain_id, upper_bound),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => self.remove(domain_id, not_equal_constant),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.assign(domain_id, equality_constant),
        }
    }

    /// Whether the predicate holds for every value in the current domain, does not hold for any
    /// of them, or neither.
    pub fn evaluate_predicate(&self, predicate: Predicate) -> Option<bool> {
        let domain_id = predicate.get_domain();
        let lower_bound = self.get_lower_bound(domain_id);
        let upper_bound = self.get_upper_bound(domain_id);

        match predicate {
            Predicate::LowerBound {
                lower_bound: bound, ..
            } => {
                if lower_bound >= bound {
                    Some(true)
                } else if upper_bound < bound {
                    Some(false)
                } else {
                    None
                }
            }
            Predicate::UpperBound {
                upper_bound: bound, ..
            } => {
                if upper_bound <= bound {
                    Some(true)
                } else if lower_bound > bound {
                    Some(false)
                } else {
                    None
                }
            }
            Predicate::Equal {
                equality_constant, ..
            } => {
                if !self.is_value_in_domain(domain_id, equality_constant) {
                    Some(false)
                } else if lower_bound == upper_bound {
                    Some(true)
                } else {
                    None
                }
            }
            Predicate::NotEqual { .. } => self.evaluate_predicate(!predicate).map(|equal| !equal),
        }
    }

    /// Takes a [`Snapshot`] of the current state; every change made after this call is undone by
    /// [`Assignments::restore`].
    pub fn snapshot(&mut self) -> Snapshot {
        let snapshot = Snapshot {
            decision_level: self.trail.get_decision_level(),
        };
        self.trail.increase_decision_level();
        snapshot
    }

    /// Undo every change made since `snapshot` was taken.
    pub fn restore(&mut self, snapshot: Snapshot) {
        gourd_assert_simple!(snapshot.decision_level <= self.trail.get_decision_level());

        self.events.clear();

        if snapshot.decision_level == self.trail.get_decision_level() {
            return;
        }

        for entry in self.trail.synchronise(snapshot.decision_level) {
            match entry {
                TrailEntry::LowerBound {
                    domain_id,
                    old_lower_bound,
                    old_size,
                } => {
                    let domain = &mut self.domains[domain_id];
                    domain.lower_bound = old_lower_bound;
                    domain.size = old_size;
                }
                TrailEntry::UpperBound {
                    domain_id,
                    old_upper_bound,
                    old_size,
                } => {
                    let domain = &mut self.domains[domain_id];
                    domain.upper_bound = old_upper_bound;
                    domain.size = old_size;
                }
                TrailEntry::Removal { domain_id, value } => {
                    let domain = &mut self.domains[domain_id];
                    domain.set_present(value, true);
                    domain.size += 1;
                }
            }
        }
    }

    /// Returns the domain events raised since the previous call, in the order they were raised.
    pub(crate) fn drain_domain_events(
        &mut self,
    ) -> impl Iterator<Item = (DomainId, EnumSet<DomainEvent>)> + '_ {
        self.events.drain(..)
    }

    pub(crate) fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
enum TrailEntry {
    LowerBound {
        domain_id: DomainId,
        old_lower_bound: i32,
        old_size: u32,
    },
    UpperBound {
        domain_id: DomainId,
        old_upper_bound: i32,
        old_size: u32,
    },
    Removal {
        domain_id: DomainId,
        value: i32,
    },
}

#[derive(Clone, Debug)]
struct IntegerDomain {
    initial_lower_bound: i32,
    initial_upper_bound: i32,
    lower_bound: i32,
    upper_bound: i32,
    size: u32,
    /// Bit `i` is set if `initial_lower_bound + i` has not been removed as a hole.
    present: Vec<u64>,
}

impl IntegerDomain {
    fn new(lower_bound: i32, upper_bound: i32) -> IntegerDomain {
        let width = (upper_bound as i64 - lower_bound as i64 + 1) as usize;
        let mut present = vec![u64::MAX; width.div_ceil(64)];
        if width % 64 != 0 {
            if let Some(last) = present.last_mut() {
                *last = (1_u64 << (width % 64)) - 1;
            }
        }

        IntegerDomain {
            initial_lower_bound: lower_bound,
            initial_upper_bound: upper_bound,
            lower_bound,
            upper_bound,
            size: width as u32,
            present,
        }
    }

    fn offset(&self, value: i32) -> usize {
        (value as i64 - self.initial_lower_bound as i64) as usize
    }

    fn is_present(&self, value: i32) -> bool {
        let index = self.offset(value);
        self.present[index / 64] & (1 << (index % 64)) != 0
    }

    fn set_present(&mut self, value: i32, is_present: bool) {
        let index = self.offset(value);
        if is_present {
            self.present[index / 64] |= 1 << (index % 64);
        } else {
            self.present[index / 64] &= !(1 << (index % 64));
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound && self.is_present(value)
    }

    /// The smallest value in the domain which is at least `from`.
    fn next_present(&self, from: i32) -> Option<i32> {
        if from > self.upper_bound {
            return None;
        }

        let last = self.offset(self.upper_bound);
        let mut index = self.offset(from.max(self.lower_bound));
        while index <= last {
            let word = self.present[index / 64] >> (index % 64);
            if word != 0 {
                let candidate = index + word.trailing_zeros() as usize;
                return (candidate <= last)
                    .then(|| self.initial_lower_bound + candidate as i32);
            }
            index = (index / 64 + 1) * 64;
        }

        None
    }

    /// The largest value in the domain which is at most `from`.
    fn previous_present(&self, from: i32) -> Option<i32> {
        if from < self.lower_bound {
            return None;
        }

        let first = self.offset(self.lower_bound);
        let mut index = self.offset(from.min(self.upper_bound));
        loop {
            let word = self.present[index / 64] << (63 - index % 64);
            if word != 0 {
                let candidate = index - word.leading_zeros() as usize;
                return (candidate >= first)
                    .then(|| self.initial_lower_bound + candidate as i32);
            }
            if index < 64 || index / 64 * 64 <= first {
                return None;
            }
            index = index / 64 * 64 - 1;
        }
    }

    /// The number of values of the domain in `[from, to]`.
    fn count_present(&self, from: i32, to: i32) -> u32 {
        (from..=to).filter(|&value| self.is_present(value)).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate;

    #[test]
    fn new_domain_has_all_values() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(-3, 70);

        assert_eq!(-3, assignments.get_lower_bound(x));
        assert_eq!(70, assignments.get_upper_bound(x));
        assert_eq!(74, assignments.get_domain_size(x));
        assert!(assignments.is_value_in_domain(x, 64));
        assert!(!assignments.is_value_in_domain(x, 71));
    }

    #[test]
    fn removing_the_lower_bound_skips_holes() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        assert_eq!(Ok(true), assignments.remove(x, 1));
        assert_eq!(Ok(true), assignments.remove(x, 2));
        assert_eq!(Ok(true), assignments.remove(x, 0));

        assert_eq!(3, assignments.get_lower_bound(x));
        assert_eq!(8, assignments.get_domain_size(x));
    }

    #[test]
    fn lowering_the_upper_bound_skips_holes_across_words() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 200);

        for value in 60..=150 {
            let _ = assignments.remove(x, value).expect("non-empty domain");
        }

        assert_eq!(Ok(true), assignments.restrict_max(x, 140));
        assert_eq!(59, assignments.get_upper_bound(x));
        assert_eq!(60, assignments.get_domain_size(x));
    }

    #[test]
    fn removing_an_absent_value_reports_no_change() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 5);

        assert_eq!(Ok(false), assignments.remove(x, 6));
        assert_eq!(Ok(false), assignments.restrict_min(x, -1));
        assert_eq!(Ok(false), assignments.restrict_max(x, 5));
        assert!(!assignments.has_pending_events());
    }

    #[test]
    fn emptying_a_domain_fails_and_leaves_it_untouched() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(2, 4);
        let _ = assignments.remove(x, 3).expect("non-empty domain");

        assert_eq!(Err(EmptyDomain), assignments.restrict_min(x, 5));
        assert_eq!(Err(EmptyDomain), assignments.assign(x, 3));

        assert_eq!(2, assignments.get_lower_bound(x));
        assert_eq!(4, assignments.get_upper_bound(x));
        assert_eq!(2, assignments.get_domain_size(x));
    }

    #[test]
    fn removing_the_last_value_fails() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(2, 2);

        assert_eq!(Err(EmptyDomain), assignments.remove(x, 2));
        assert_eq!(Some(2), assignments.get_assigned_value(x));
    }

    #[test]
    fn assign_raises_the_assign_event() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 9);

        assert_eq!(Ok(true), assignments.assign(x, 4));

        let events = assignments
            .drain_domain_events()
            .fold(EnumSet::empty(), |acc, (_, events)| acc | events);
        assert!(events.contains(DomainEvent::Assign));
        assert!(events.contains(DomainEvent::LowerBound));
        assert!(events.contains(DomainEvent::UpperBound));
        assert_eq!(Some(4), assignments.get_assigned_value(x));
    }

    #[test]
    fn restore_undoes_changes_since_the_snapshot() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 9);
        let _ = assignments.remove(x, 5).expect("non-empty domain");

        let snapshot = assignments.snapshot();
        let _ = assignments.remove(x, 3).expect("non-empty domain");
        let _ = assignments.restrict_min(x, 2).expect("non-empty domain");
        let _ = assignments.restrict_max(x, 6).expect("non-empty domain");
        let _ = assignments.assign(x, 4).expect("non-empty domain");
        assert_eq!(Some(4), assignments.get_assigned_value(x));

        assignments.restore(snapshot);

        assert_eq!(0, assignments.get_lower_bound(x));
        assert_eq!(9, assignments.get_upper_bound(x));
        assert_eq!(9, assignments.get_domain_size(x));
        assert!(assignments.is_value_in_domain(x, 3));
        assert!(!assignments.is_value_in_domain(x, 5));
        assert_eq!(0, assignments.get_decision_level());
    }

    #[test]
    fn nested_snapshots_are_restored_in_order() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 9);

        let outer = assignments.snapshot();
        let _ = assignments.restrict_min(x, 3).expect("non-empty domain");
        let inner = assignments.snapshot();
        let _ = assignments.restrict_min(x, 6).expect("non-empty domain");

        assignments.restore(inner);
        assert_eq!(3, assignments.get_lower_bound(x));

        assignments.restore(outer);
        assert_eq!(0, assignments.get_lower_bound(x));
    }

    #[test]
    fn domain_iteration_skips_holes() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(1, 6);
        let _ = assignments.remove(x, 2).expect("non-empty domain");
        let _ = assignments.remove(x, 5).expect("non-empty domain");

        let values = assignments.get_domain_iterator(x).collect::<Vec<_>>();
        assert_eq!(vec![1, 3, 4, 6], values);
    }

    #[test]
    fn predicates_are_evaluated_against_the_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(1, 6);
        let _ = assignments.remove(x, 4).expect("non-empty domain");

        assert_eq!(Some(true), assignments.evaluate_predicate(predicate![x >= 1]));
        assert_eq!(None, assignments.evaluate_predicate(predicate![x <= 3]));
        assert_eq!(Some(false), assignments.evaluate_predicate(predicate![x == 4]));
        assert_eq!(Some(true), assignments.evaluate_predicate(predicate![x != 4]));
        assert_eq!(None, assignments.evaluate_predicate(predicate![x != 5]));
    }
}
