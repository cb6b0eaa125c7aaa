//! A [`Brancher`] which simply uses a single [`VariableSelector`] and a single
//! [`ValueSelector`].
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::basic_types::SolutionReference;
use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::InDomainSplit;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::AfcSize;
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::MaxAfc;
use crate::branching::variable_selection::MostConstrained;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::options::BranchingOptions;
use crate::options::BranchingStrategy;
use crate::options::ValueSelection;
use crate::predicates::Predicate;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a
/// single [`ValueSelector`] independently of one another.
pub struct IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    /// The [`VariableSelector`] of the [`Brancher`], determines which (unfixed) variable to branch
    /// next on.
    pub(crate) variable_selector: VariableSelect,
    /// The [`ValueSelector`] of the [`Brancher`] determines which value in the domain to branch
    /// next on given a variable.
    pub(crate) value_selector: ValueSelect,
    /// [`PhantomData`] to ensure that the variable type is bound to the
    /// [`IndependentVariableValueBrancher`]
    pub(crate) variable_type: PhantomData<Var>,
}

impl<Var, VariableSelect, ValueSelect> Debug
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndependentVariableValueBrancher").finish()
    }
}

impl<Var, VariableSelect, ValueSelect>
    IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    pub fn new(var_selector: VariableSelect, val_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector: var_selector,
            value_selector: val_selector,
            variable_type: PhantomData,
        }
    }
}

impl<Var, VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    /// First we select a variable
    ///  - If all variables under consideration are fixed (i.e. `select_variable` return None) then
    ///    we simply return None
    ///  - Otherwise we select a value and return the corresponding predicate
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate> {
        self.variable_selector
            .select_variable(context)
            .map(|selected_variable| {
                // We have selected a variable, select a value for the PredicateReference
                self.value_selector.select_value(context, selected_variable)
            })
    }

    fn on_conflict(&mut self, scope: &[DomainId]) {
        self.variable_selector.on_conflict(scope)
    }

    fn on_solution(&mut self, _solution: SolutionReference) {}
}

/// The [`Brancher`] whose selectors are chosen from [`BranchingOptions`].
pub type DefaultBrancher = IndependentVariableValueBrancher<
    DomainId,
    Box<dyn VariableSelector<DomainId>>,
    Box<dyn ValueSelector<DomainId>>,
>;

impl DefaultBrancher {
    /// Creates the [`Brancher`] described by `options` over `variables`;
    /// `num_occurrences[i]` is the number of constraints in which `variables[i]` occurs.
    pub fn from_options(
        variables: &[DomainId],
        num_occurrences: &[u32],
        options: BranchingOptions,
    ) -> DefaultBrancher {
        let decay = options.decay.value();
        let variable_selector: Box<dyn VariableSelector<DomainId>> = match options.strategy {
            BranchingStrategy::None => Box::new(InputOrder::new(variables)),
            BranchingStrategy::Size => Box::new(FirstFail::new(variables)),
            BranchingStrategy::SizeDegree => {
                Box::new(MostConstrained::new(variables, num_occurrences))
            }
            BranchingStrategy::SizeAfc => {
                Box::new(AfcSize::new(variables, num_occurrences, decay))
            }
            BranchingStrategy::Afc => Box::new(MaxAfc::new(variables, num_occurrences, decay)),
        };
        let value_selector: Box<dyn ValueSelector<DomainId>> = match options.value_selection {
            ValueSelection::Min => Box::new(InDomainMin),
            ValueSelection::SplitMin => Box::new(InDomainSplit),
        };

        IndependentVariableValueBrancher::new(variable_selector, value_selector)
    }
}
