//! Propagators for the all-different constraint at increasing strengths.
mod all_different_bounds;
mod all_different_domain;
mod all_different_value;

pub(crate) use all_different_bounds::*;
pub(crate) use all_different_domain::*;
pub(crate) use all_different_value::AllDifferentValueConstructor;
pub(crate) use all_different_value::AllDifferentValuePropagator;
