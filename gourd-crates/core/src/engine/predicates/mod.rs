//! Atomic constraints over a single domain, used to express search decisions.
pub(crate) mod predicate;
mod predicate_constructor;

pub use predicate::Predicate;
pub use predicate_constructor::PredicateConstructor;
