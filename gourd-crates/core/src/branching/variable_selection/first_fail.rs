use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::gourd_assert_eq_simple;

/// A [`VariableSelector`] which selects the variable with the smallest domain.
///
/// Uses a [`TieBreaker`] to break ties, the default is the [`InOrderTieBreaker`] but it is
/// possible to construct the variable selector with a custom [`TieBreaker`] by using
/// the method [`FirstFail::with_tie_breaker`].
pub struct FirstFail<Var, TieBreaking> {
    variables: Vec<Var>,
    tie_breaker: TieBreaking,
}

impl<Var, TieBreaking> std::fmt::Debug for FirstFail<Var, TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstFail").finish()
    }
}

impl<Var: Copy> FirstFail<Var, InOrderTieBreaker<Var, u32>> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        Self {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<Var: Copy, TieBreaking: TieBreaker<Var, u32>> FirstFail<Var, TieBreaking> {
    pub fn with_tie_breaker(variables: &[Var], tie_breaker: TieBreaking) -> Self {
        gourd_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The provided tie-breaker to FirstFail attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker");
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }

        Self {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<DomainId> for FirstFail<DomainId, TieBreaking>
where
    TieBreaking: TieBreaker<DomainId, u32>,
{
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .filter(|variable| !context.is_integer_fixed(**variable))
            .for_each(|variable| {
                self.tie_breaker
                    .consider(*variable, context.get_size_of_domain(*variable));
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correctly_selected() {
        let mut assignments = SelectionContext::create_for_testing(vec![(0, 10), (5, 20)]);
        let integer_variables = assignments.get_domains().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&integer_variables);

        {
            let context = SelectionContext::new(&assignments);
            assert_eq!(Some(integer_variables[0]), strategy.select_variable(&context));
        }

        let _ = assignments
            .restrict_min(integer_variables[1], 15)
            .expect("non-empty domain");

        let context = SelectionContext::new(&assignments);
        assert_eq!(Some(integer_variables[1]), strategy.select_variable(&context));
    }

    #[test]
    fn holes_count_towards_the_domain_size() {
        let mut assignments = SelectionContext::create_for_testing(vec![(0, 3), (0, 5)]);
        let integer_variables = assignments.get_domains().collect::<Vec<_>>();
        for value in [1, 2, 3] {
            let _ = assignments
                .remove(integer_variables[1], value)
                .expect("non-empty domain");
        }
        let mut strategy = FirstFail::new(&integer_variables);

        let context = SelectionContext::new(&assignments);
        assert_eq!(Some(integer_variables[1]), strategy.select_variable(&context));
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let assignments = SelectionContext::create_for_testing(vec![(10, 10), (20, 20)]);
        let context = SelectionContext::new(&assignments);
        let integer_variables = context.get_domains().collect::<Vec<_>>();

        let mut strategy = FirstFail::new(&integer_variables);
        assert_eq!(None, strategy.select_variable(&context));
    }
}
