use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::containers::HashMap;
use crate::engine::variables::DomainId;
use crate::gourd_assert_eq_simple;
use crate::gourd_assert_simple;

/// Weights above this value trigger a rescaling of all weights.
const RESCALE_THRESHOLD: f64 = 1e100;

/// The accumulated failure count (AFC) of a set of variables.
///
/// The weight of a variable starts at the number of constraints it occurs in. Every conflict adds
/// the current increment to the weight of each variable in the scope of the failing constraint,
/// after which the increment is divided by the decay. Dividing the increment instead of
/// multiplying every weight by the decay yields the same ordering.
#[derive(Debug)]
struct AfcWeights {
    variables: Vec<DomainId>,
    weights: Vec<f64>,
    positions: HashMap<DomainId, usize>,
    increment: f64,
    decay: f64,
}

impl AfcWeights {
    fn new(variables: &[DomainId], num_occurrences: &[u32], decay: f64) -> Self {
        gourd_assert_eq_simple!(
            variables.len(),
            num_occurrences.len(),
            "Every variable requires an initial number of occurrences"
        );
        gourd_assert_simple!(
            decay > 0.0 && decay <= 1.0,
            "The decay {decay} lies outside of (0, 1]"
        );

        AfcWeights {
            variables: variables.to_vec(),
            weights: num_occurrences.iter().map(|&count| count as f64).collect(),
            positions: variables
                .iter()
                .enumerate()
                .map(|(index, &variable)| (variable, index))
                .collect(),
            increment: 1.0,
            decay,
        }
    }

    fn on_conflict(&mut self, scope: &[DomainId]) {
        let mut needs_rescale = false;
        for variable in scope {
            if let Some(&index) = self.positions.get(variable) {
                self.weights[index] += self.increment;
                needs_rescale |= self.weights[index] > RESCALE_THRESHOLD;
            }
        }

        self.increment /= self.decay;
        needs_rescale |= self.increment > RESCALE_THRESHOLD;

        if needs_rescale {
            self.weights
                .iter_mut()
                .for_each(|weight| *weight /= RESCALE_THRESHOLD);
            self.increment /= RESCALE_THRESHOLD;
        }
    }

    fn candidates<'a>(
        &'a self,
        context: &'a SelectionContext<'a>,
    ) -> impl Iterator<Item = (DomainId, f64)> + 'a {
        self.variables
            .iter()
            .zip(self.weights.iter())
            .filter(|(variable, _)| !context.is_integer_fixed(**variable))
            .map(|(&variable, &weight)| (variable, weight))
    }
}

/// A [`VariableSelector`] which selects the variable with the largest ratio between its
/// accumulated failure count and its domain size.
#[derive(Debug)]
pub struct AfcSize {
    weights: AfcWeights,
    tie_breaker: InOrderTieBreaker<DomainId, f64>,
}

impl AfcSize {
    /// Creates the selector; `num_occurrences[i]` is the number of constraints `variables[i]`
    /// occurs in and `decay` lies in `(0, 1]`.
    pub fn new(variables: &[DomainId], num_occurrences: &[u32], decay: f64) -> Self {
        if variables.is_empty() {
            warn!("The AfcSize variable selector was not provided with any variables");
        }
        AfcSize {
            weights: AfcWeights::new(variables, num_occurrences, decay),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl VariableSelector<DomainId> for AfcSize {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        for (variable, weight) in self.weights.candidates(context) {
            let size = context.get_size_of_domain(variable) as f64;
            self.tie_breaker.consider(variable, weight / size);
        }
        self.tie_breaker.select()
    }

    fn on_conflict(&mut self, scope: &[DomainId]) {
        self.weights.on_conflict(scope);
    }
}

/// A [`VariableSelector`] which selects the variable with the largest accumulated failure count.
#[derive(Debug)]
pub struct MaxAfc {
    weights: AfcWeights,
    tie_breaker: InOrderTieBreaker<DomainId, f64>,
}

impl MaxAfc {
    /// Creates the selector; `num_occurrences[i]` is the number of constraints `variables[i]`
    /// occurs in and `decay` lies in `(0, 1]`.
    pub fn new(variables: &[DomainId], num_occurrences: &[u32], decay: f64) -> Self {
        if variables.is_empty() {
            warn!("The MaxAfc variable selector was not provided with any variables");
        }
        MaxAfc {
            weights: AfcWeights::new(variables, num_occurrences, decay),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl VariableSelector<DomainId> for MaxAfc {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        for (variable, weight) in self.weights.candidates(context) {
            self.tie_breaker.consider(variable, weight);
        }
        self.tie_breaker.select()
    }

    fn on_conflict(&mut self, scope: &[DomainId]) {
        self.weights.on_conflict(scope);
    }
}
