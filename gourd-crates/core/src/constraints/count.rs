use super::Constraint;
use super::Relation;
use crate::propagators::CountConstructor;
use crate::propagators::CountRelation;
use crate::variables::IntegerVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// The constraint `|{ i | variables_i = value }| <relation> target`.
#[derive(Clone, Debug)]
pub struct Count<Var> {
    variables: Box<[Var]>,
    value: i32,
    relation: Relation,
    target: i32,
}

/// Creates the [`Constraint`] `|{ i | variables_i = value }| <relation> target`.
pub fn count<Var: IntegerVariable>(
    variables: impl Into<Box<[Var]>>,
    value: i32,
    relation: Relation,
    target: i32,
) -> Count<Var> {
    Count {
        variables: variables.into(),
        value,
        relation,
        target,
    }
}

/// Creates the [`Constraint`] that exactly `target` of the `variables` take `value`.
pub fn exactly<Var: IntegerVariable>(
    variables: impl Into<Box<[Var]>>,
    value: i32,
    target: i32,
) -> Count<Var> {
    count(variables, value, Relation::Equal, target)
}

/// Creates the [`Constraint`] that at most `target` of the `variables` take `value`.
pub fn at_most<Var: IntegerVariable>(
    variables: impl Into<Box<[Var]>>,
    value: i32,
    target: i32,
) -> Count<Var> {
    count(variables, value, Relation::LessOrEqual, target)
}

/// Creates the [`Constraint`] that at least `target` of the `variables` take `value`.
pub fn at_least<Var: IntegerVariable>(
    variables: impl Into<Box<[Var]>>,
    value: i32,
    target: i32,
) -> Count<Var> {
    count(variables, value, Relation::GreaterOrEqual, target)
}

impl<Var: IntegerVariable> Constraint for Count<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        // Strict relations are tightened into their non-strict counterparts.
        let (relation, target) = match self.relation {
            Relation::Equal => (CountRelation::Exactly, self.target),
            Relation::NotEqual => (CountRelation::NotEqual, self.target),
            Relation::Less => (CountRelation::AtMost, self.target.saturating_sub(1)),
            Relation::LessOrEqual => (CountRelation::AtMost, self.target),
            Relation::Greater => (CountRelation::AtLeast, self.target.saturating_add(1)),
            Relation::GreaterOrEqual => (CountRelation::AtLeast, self.target),
        };

        solver.add_propagator(
            CountConstructor::new(self.variables, self.value, relation, target),
            "count",
        )
    }
}
