//! Contains structures and traits to define the decision making procedure of the search.
//!
//! In general, it provides 3 traits:
//! - The [`Brancher`] which defines how a branching decision (in the form of a [`Predicate`]) is
//!   made; the search posts the decision in the left child and its negation in the right child.
//! - A [`VariableSelector`] which defines the method required of a variable selector (e.g. the
//!   variable with the smallest domain).
//! - A [`ValueSelector`] which defines the method required of a value selector (e.g. split the
//!   domain in half).
//!
//! [`IndependentVariableValueBrancher`] combines a [`VariableSelector`] with a
//! [`ValueSelector`]; the [`DefaultBrancher`] is such a brancher whose selectors are chosen from
//! the [`BranchingOptions`] at model-build time.
//!
//! [`Predicate`]: crate::predicates::Predicate
//! [`VariableSelector`]: variable_selection::VariableSelector
//! [`ValueSelector`]: value_selection::ValueSelector
//! [`IndependentVariableValueBrancher`]: branchers::IndependentVariableValueBrancher
//! [`DefaultBrancher`]: branchers::DefaultBrancher
//! [`BranchingOptions`]: crate::options::BranchingOptions

mod brancher;
pub mod branchers;
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;
