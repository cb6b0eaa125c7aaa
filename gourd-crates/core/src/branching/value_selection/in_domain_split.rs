use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::gourd_assert_advanced;
use crate::predicate;
use crate::predicates::Predicate;

/// A [`ValueSelector`] which splits the domain in half (based on the lower-bound and upper-bound,
/// disregarding holes) and removes the upper-half from the domain in the left branch.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in the
/// domain.
#[derive(Debug, Copy, Clone)]
pub struct InDomainSplit;

impl ValueSelector<DomainId> for InDomainSplit {
    fn select_value(&mut self, context: &SelectionContext, decision_variable: DomainId) -> Predicate {
        InDomainSplit::get_predicate_excluding_upper_half(context, decision_variable)
    }
}

impl InDomainSplit {
    pub fn get_predicate_excluding_upper_half(
        context: &SelectionContext,
        decision_variable: DomainId,
    ) -> Predicate {
        // The domain of the variable has at least 2 values in it, otherwise it would be fixed and
        // would not have been selected.
        let lower_bound = context.lower_bound(decision_variable);
        let upper_bound = context.upper_bound(decision_variable);
        let bound = lower_bound + ((upper_bound as i64 - lower_bound as i64) / 2) as i32;
        gourd_assert_advanced!(
            bound >= lower_bound && bound < upper_bound,
            "It should hold that {lower_bound} <= {bound} < {upper_bound}",
        );
        context.check_decision(predicate!(decision_variable <= bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_correct_predicate() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10)]);
        let context = SelectionContext::new(&assignments);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainSplit;
        let selected = selector.select_value(&context, domain_ids[0]);

        assert_eq!(predicate!(domain_ids[0] <= 5), selected);
    }

    #[test]
    fn test_domain_of_size_two() {
        let assignments = SelectionContext::create_for_testing(vec![(1, 2)]);
        let context = SelectionContext::new(&assignments);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainSplit;
        let selected = selector.select_value(&context, domain_ids[0]);

        assert_eq!(predicate!(domain_ids[0] <= 1), selected);
        assert_eq!(predicate!(domain_ids[0] >= 2), !selected);
    }

    #[test]
    fn test_negative_domain() {
        let assignments = SelectionContext::create_for_testing(vec![(-5, 0)]);
        let context = SelectionContext::new(&assignments);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainSplit;
        let selected = selector.select_value(&context, domain_ids[0]);

        assert_eq!(predicate!(domain_ids[0] <= -3), selected);
    }
}
