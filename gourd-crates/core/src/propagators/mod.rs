//! Contains the propagators of the supported constraints.
//!
//! Every propagator is created through a [`PropagatorConstructor`] which registers the
//! [`DomainEvents`] it is interested in.
//!
//! [`PropagatorConstructor`]: crate::engine::propagation::PropagatorConstructor
//! [`DomainEvents`]: crate::engine::DomainEvents
pub(crate) mod all_different;
pub(crate) mod arithmetic;
pub(crate) mod count;

pub(crate) use all_different::*;
pub(crate) use arithmetic::*;
pub(crate) use count::*;
