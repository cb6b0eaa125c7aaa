//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is [`ValueSelector::select_value`].
mod in_domain_min;
mod in_domain_split;
mod value_selector;

pub use in_domain_min::InDomainMin;
pub use in_domain_split::InDomainSplit;
pub use value_selector::ValueSelector;
