//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait. Any
//! [`VariableSelector`] should only select variables which have a domain of size 2 or larger.
mod afc;
mod first_fail;
mod input_order;
mod most_constrained;
mod variable_selector;

pub use afc::AfcSize;
pub use afc::MaxAfc;
pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use most_constrained::MostConstrained;
pub use most_constrained::MostConstrainedValue;
pub use variable_selector::VariableSelector;
