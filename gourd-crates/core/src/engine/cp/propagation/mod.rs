//! Contains the main building blocks for propagators.
//!
//! A propagator is created by a [`PropagatorConstructor`], which registers the domain events on
//! which the propagator should be enqueued. During search the propagator reads and prunes domains
//! through a [`PropagationContextMut`].

pub(crate) mod propagation_context;
pub(crate) mod propagator;
pub(crate) mod propagator_constructor;
pub(crate) mod propagator_id;

pub(crate) use propagation_context::PropagationContextMut;
pub(crate) use propagation_context::ReadDomains;
pub(crate) use propagator::Priority;
pub(crate) use propagator::Propagator;
pub(crate) use propagator::NUM_PRIORITY_LEVELS;
pub(crate) use propagator_constructor::PropagatorConstructor;
pub(crate) use propagator_constructor::PropagatorConstructorContext;
pub(crate) use propagator_id::PropagatorId;
