use super::Constraint;
use crate::options::PropagationStrength;
use crate::propagators::AllDifferentBoundsConstructor;
use crate::propagators::AllDifferentDomainConstructor;
use crate::propagators::AllDifferentValueConstructor;
use crate::variables::IntegerVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// The constraint that all of its variables take pairwise distinct values.
///
/// Created by [`all_different`]; the consistency which is enforced is chosen with
/// [`AllDifferent::with_strength`].
#[derive(Clone, Debug)]
pub struct AllDifferent<Var> {
    variables: Box<[Var]>,
    strength: PropagationStrength,
}

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
///
/// By default the constraint is propagated to domain consistency.
pub fn all_different<Var: IntegerVariable>(variables: impl Into<Box<[Var]>>) -> AllDifferent<Var> {
    AllDifferent {
        variables: variables.into(),
        strength: PropagationStrength::default(),
    }
}

impl<Var> AllDifferent<Var> {
    pub fn with_strength(self, strength: PropagationStrength) -> Self {
        AllDifferent { strength, ..self }
    }
}

impl<Var: IntegerVariable> Constraint for AllDifferent<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let vars = self.variables;
        match self.strength {
            PropagationStrength::Value => {
                solver.add_propagator(AllDifferentValueConstructor { vars }, "all_different")
            }
            PropagationStrength::Bounds => {
                solver.add_propagator(AllDifferentBoundsConstructor { vars }, "all_different")
            }
            PropagationStrength::Domain => {
                solver.add_propagator(AllDifferentDomainConstructor { vars }, "all_different")
            }
        }
    }
}
