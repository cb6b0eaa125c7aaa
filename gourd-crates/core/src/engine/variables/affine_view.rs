use std::cmp::Ordering;

use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::DomainEvent;
use crate::engine::EmptyDomain;
use crate::engine::Watchers;
use crate::math::num_ext::NumExt;

/// Models the constraint `y = ax + b`, by expressing the domain of `y` as a transformation of the
/// domain of `x`.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct AffineView<Inner> {
    inner: Inner,
    scale: i32,
    offset: i32,
}

impl<Inner> AffineView<Inner> {
    pub fn new(inner: Inner, scale: i32, offset: i32) -> Self {
        assert_ne!(scale, 0, "Multiplication by zero is not invertable");
        AffineView {
            inner,
            scale,
            offset,
        }
    }

    /// Apply the inverse transformation of this view on a value, to go from the value in the domain
    /// of `self` to a value in the domain of `self.inner`.
    fn invert(&self, value: i32, rounding: Rounding) -> i32 {
        let inverted_translation = value - self.offset;

        match rounding {
            Rounding::Up => NumExt::div_ceil(inverted_translation, self.scale),
            Rounding::Down => NumExt::div_floor(inverted_translation, self.scale),
        }
    }

    /// Whether `value` is the image of some value of the inner domain.
    fn is_image(&self, value: i32) -> bool {
        (value - self.offset) % self.scale == 0
    }

    fn map(&self, value: i32) -> i32 {
        self.scale * value + self.offset
    }
}

impl<View> IntegerVariable for AffineView<View>
where
    View: IntegerVariable,
{
    type AffineView = Self;

    fn lower_bound(&self, assignment: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.upper_bound(assignment))
        } else {
            self.map(self.inner.lower_bound(assignment))
        }
    }

    fn upper_bound(&self, assignment: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.lower_bound(assignment))
        } else {
            self.map(self.inner.upper_bound(assignment))
        }
    }

    fn contains(&self, assignment: &Assignments, value: i32) -> bool {
        if self.is_image(value) {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.contains(assignment, inverted)
        } else {
            false
        }
    }

    fn size(&self, assignment: &Assignments) -> u32 {
        self.inner.size(assignment)
    }

    fn iterate_domain(&self, assignment: &Assignments) -> impl Iterator<Item = i32> {
        self.inner
            .iterate_domain(assignment)
            .map(|value| self.map(value))
    }

    fn set_lower_bound(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        if self.scale < 0 {
            let inverted_bound = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(assignment, inverted_bound)
        } else {
            let inverted_bound = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(assignment, inverted_bound)
        }
    }

    fn set_upper_bound(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        if self.scale < 0 {
            let inverted_bound = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(assignment, inverted_bound)
        } else {
            let inverted_bound = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(assignment, inverted_bound)
        }
    }

    fn remove(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        if self.is_image(value) {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.remove(assignment, inverted)
        } else {
            Ok(false)
        }
    }

    fn assign(&self, assignment: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        if self.is_image(value) {
            let inverted = self.invert(value, Rounding::Up);
            self.inner.assign(assignment, inverted)
        } else {
            Err(EmptyDomain)
        }
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, mut events: EnumSet<DomainEvent>) {
        let bound = DomainEvent::LowerBound | DomainEvent::UpperBound;
        let intersection = events.intersection(bound);
        if intersection.len() == 1 && self.scale.is_negative() {
            events = events.symmetrical_difference(bound);
        }
        self.inner.watch_all(watchers, events);
    }

    fn domain_id(&self) -> DomainId {
        self.inner.domain_id()
    }

    fn map_value(&self, value: i32) -> i32 {
        self.map(self.inner.map_value(value))
    }
}

impl<View> TransformableVariable<AffineView<View>> for AffineView<View>
where
    View: IntegerVariable,
{
    fn scaled(&self, scale: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.scale *= scale;
        result.offset *= scale;
        result
    }

    fn offset(&self, offset: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.offset += offset;
        result
    }
}

impl<Var: std::fmt::Debug> std::fmt::Debug for AffineView<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == -1 {
            write!(f, "-")?;
        } else if self.scale != 1 {
            write!(f, "{} * ", self.scale)?;
        }

        write!(f, "({:?})", self.inner)?;

        match self.offset.cmp(&0) {
            Ordering::Less => write!(f, " - {}", -self.offset)?,
            Ordering::Equal => {}
            Ordering::Greater => write!(f, " + {}", self.offset)?,
        }

        Ok(())
    }
}

impl From<DomainId> for AffineView<DomainId> {
    fn from(value: DomainId) -> Self {
        AffineView::new(value, 1, 0)
    }
}

enum Rounding {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_an_affine_view() {
        let view = AffineView::new(DomainId::new(0), 3, 4);
        assert_eq!(3, view.scale);
        assert_eq!(4, view.offset);
        let scaled_view = view.scaled(6);
        assert_eq!(18, scaled_view.scale);
        assert_eq!(24, scaled_view.offset);
    }

    #[test]
    fn offsetting_an_affine_view() {
        let view = AffineView::new(DomainId::new(0), 3, 4);
        let offset_view = view.offset(6);
        assert_eq!(3, offset_view.scale);
        assert_eq!(10, offset_view.offset);
    }

    #[test]
    fn bounds_of_a_negated_view_are_swapped() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(1, 5);
        let view = x.scaled(-2).offset(1);

        assert_eq!(-9, view.lower_bound(&assignments));
        assert_eq!(-1, view.upper_bound(&assignments));
        assert!(view.contains(&assignments, -3));
        assert!(!view.contains(&assignments, -4));
    }

    #[test]
    fn tightening_a_scaled_view_rounds_inside_the_inner_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);
        let view = x.scaled(2);

        assert_eq!(Ok(true), view.set_upper_bound(&mut assignments, 7));
        assert_eq!(3, assignments.get_upper_bound(x));

        assert_eq!(Ok(true), view.set_lower_bound(&mut assignments, 1));
        assert_eq!(1, assignments.get_lower_bound(x));
    }

    #[test]
    fn tightening_a_negated_view_moves_the_opposite_inner_bound() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);
        let view = x.scaled(-1);

        assert_eq!(Ok(true), view.set_lower_bound(&mut assignments, -4));
        assert_eq!(4, assignments.get_upper_bound(x));
        assert_eq!(0, assignments.get_lower_bound(x));
    }

    #[test]
    fn removing_a_value_outside_the_image_is_a_no_op() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 3);
        let view = x.scaled(2);

        assert_eq!(Ok(false), view.remove(&mut assignments, 3));
        assert_eq!(Err(EmptyDomain), view.assign(&mut assignments, 3));
        assert_eq!(4, assignments.get_domain_size(x));
    }

    #[test]
    fn values_of_the_domain_are_mapped_through_the_view() {
        let x = DomainId::new(0);
        let view = x.offset(3).scaled(2);

        assert_eq!(x, view.domain_id());
        assert_eq!(10, view.map_value(2));
    }
}
