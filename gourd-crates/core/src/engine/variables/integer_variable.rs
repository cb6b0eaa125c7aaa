use std::fmt::Debug;

use enumset::EnumSet;

use super::DomainId;
use super::TransformableVariable;
use crate::engine::Assignments;
use crate::engine::DomainEvent;
use crate::engine::EmptyDomain;
use crate::engine::Watchers;

/// A trait specifying the required behaviour of an integer variable such as retrieving a
/// lower-bound ([`IntegerVariable::lower_bound`]).
///
/// The mutating methods return whether the domain changed, or [`EmptyDomain`] if the requested
/// change would leave no value in the domain; in the latter case the domain is left untouched.
pub trait IntegerVariable:
    Clone + Debug + TransformableVariable<Self::AffineView> + 'static
{
    type AffineView: IntegerVariable;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignment: &Assignments) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignment: &Assignments) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, assignment: &Assignments, value: i32) -> bool;

    /// The number of values in the domain of this variable.
    fn size(&self, assignment: &Assignments) -> u32;

    /// Iterate over the values of the domain.
    fn iterate_domain(&self, assignment: &Assignments) -> impl Iterator<Item = i32>;

    fn set_lower_bound(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain>;

    fn set_upper_bound(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain>;

    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain>;

    fn assign(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>);

    /// The domain underlying this variable.
    fn domain_id(&self) -> DomainId;

    /// Translate a value of [`IntegerVariable::domain_id`] into a value of this variable.
    fn map_value(&self, value: i32) -> i32;
}
