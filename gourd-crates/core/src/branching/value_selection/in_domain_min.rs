use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::predicate;
use crate::predicates::Predicate;

/// [`ValueSelector`] which chooses to assign the provided variable to its lower-bound; the right
/// branch removes that value.
#[derive(Debug, Copy, Clone)]
pub struct InDomainMin;

impl ValueSelector<DomainId> for InDomainMin {
    fn select_value(&mut self, context: &SelectionContext, decision_variable: DomainId) -> Predicate {
        let lower_bound = context.lower_bound(decision_variable);
        context.check_decision(predicate!(decision_variable == lower_bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_correct_predicate() {
        let assignments = SelectionContext::create_for_testing(vec![(3, 10)]);
        let context = SelectionContext::new(&assignments);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainMin;
        let selected = selector.select_value(&context, domain_ids[0]);

        assert_eq!(predicate!(domain_ids[0] == 3), selected);
        assert_eq!(predicate!(domain_ids[0] != 3), !selected);
    }
}
