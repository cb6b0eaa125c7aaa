//! Configuration of the solver which is resolved once at model-build time.
//!
//! With the `clap` feature enabled the enumerations can be parsed directly from the command line.
use thiserror::Error;

/// An invalid configuration which is detected before solving begins.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("the decay {0} lies outside of (0, 1]")]
    InvalidDecay(f64),
    #[error("the solution limit {0} is negative")]
    NegativeSolutionLimit(i64),
}

/// The level of consistency which the all-different constraint enforces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagationStrength {
    /// Removes the value of every fixed variable from the other variables.
    Value,
    /// Additionally makes the bounds of every variable consistent using Hall intervals.
    Bounds,
    /// Removes every value which does not occur in any solution of the constraint in isolation.
    #[default]
    Domain,
}

/// The variable selection strategy used during search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum BranchingStrategy {
    /// The first unassigned variable in input order.
    None,
    /// The variable with the smallest domain.
    Size,
    /// The variable with the smallest domain, preferring variables in more constraints on ties.
    #[cfg_attr(feature = "clap", value(name = "sizedeg"))]
    SizeDegree,
    /// The variable with the largest accumulated failure count relative to its domain size.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "sizeafc"))]
    SizeAfc,
    /// The variable with the largest accumulated failure count.
    Afc,
}

impl BranchingStrategy {
    /// Whether the strategy relies on accumulated failure counts, and therefore on a decay.
    pub fn uses_afc(self) -> bool {
        matches!(self, BranchingStrategy::SizeAfc | BranchingStrategy::Afc)
    }
}

/// The value selection strategy used during search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// Branch on `x = min(x)` and `x != min(x)`.
    Min,
    /// Branch on the lower and the upper half of the bounds of the domain.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "split"))]
    SplitMin,
}

/// The decay applied to accumulated failure counts after every conflict; lies in `(0, 1]`, where
/// `1` means failures never decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AfcDecay(f64);

impl AfcDecay {
    pub fn new(decay: f64) -> Result<AfcDecay, ConfigurationError> {
        if decay > 0.0 && decay <= 1.0 {
            Ok(AfcDecay(decay))
        } else {
            Err(ConfigurationError::InvalidDecay(decay))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for AfcDecay {
    fn default() -> Self {
        AfcDecay(1.0)
    }
}

impl TryFrom<f64> for AfcDecay {
    type Error = ConfigurationError;

    fn try_from(decay: f64) -> Result<Self, Self::Error> {
        AfcDecay::new(decay)
    }
}

/// The number of solutions after which the search stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SolutionLimit(Option<u64>);

impl SolutionLimit {
    /// Enumerate all solutions.
    pub fn all() -> SolutionLimit {
        SolutionLimit(None)
    }

    /// Stop after `limit` solutions; a limit of `0` enumerates all solutions.
    pub fn at_most(limit: u64) -> SolutionLimit {
        SolutionLimit((limit > 0).then_some(limit))
    }

    /// Interprets a limit given by the user, where `0` means all solutions.
    pub fn from_requested(limit: i64) -> Result<SolutionLimit, ConfigurationError> {
        u64::try_from(limit)
            .map(SolutionLimit::at_most)
            .map_err(|_| ConfigurationError::NegativeSolutionLimit(limit))
    }

    pub fn get(self) -> Option<u64> {
        self.0
    }

    /// Whether `num_solutions` solutions exhaust the limit.
    pub fn is_reached(self, num_solutions: u64) -> bool {
        self.0.is_some_and(|limit| num_solutions >= limit)
    }
}

/// The combination of variable selection, value selection and decay which determines the
/// [`DefaultBrancher`].
///
/// [`DefaultBrancher`]: crate::branching::branchers::DefaultBrancher
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BranchingOptions {
    pub strategy: BranchingStrategy,
    pub value_selection: ValueSelection,
    pub decay: AfcDecay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_must_lie_in_the_half_open_unit_interval() {
        assert!(AfcDecay::new(1.0).is_ok());
        assert!(AfcDecay::new(0.5).is_ok());
        assert_eq!(Err(ConfigurationError::InvalidDecay(0.0)), AfcDecay::new(0.0));
        assert_eq!(Err(ConfigurationError::InvalidDecay(1.5)), AfcDecay::new(1.5));
        assert!(AfcDecay::new(f64::NAN).is_err());
    }

    #[test]
    fn zero_solution_limit_enumerates_everything() {
        let limit = SolutionLimit::from_requested(0).expect("non-negative limit");

        assert_eq!(SolutionLimit::all(), limit);
        assert!(!limit.is_reached(1_000_000));
    }

    #[test]
    fn solution_limit_is_reached_at_the_limit() {
        let limit = SolutionLimit::from_requested(2).expect("non-negative limit");

        assert!(!limit.is_reached(1));
        assert!(limit.is_reached(2));
    }

    #[test]
    fn negative_solution_limit_is_rejected() {
        assert_eq!(
            Err(ConfigurationError::NegativeSolutionLimit(-1)),
            SolutionLimit::from_requested(-1)
        );
    }
}
