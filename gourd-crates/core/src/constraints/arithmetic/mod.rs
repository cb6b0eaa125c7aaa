mod linear;

pub use linear::*;

use super::Relation;
use crate::variables::IntegerVariable;

/// Creates the [`Constraint`](super::Constraint) `\sum terms_i = rhs`.
pub fn equals<Var: IntegerVariable>(terms: impl Into<Box<[Var]>>, rhs: i32) -> Linear<Var> {
    unit_linear(terms, Relation::Equal, rhs)
}

/// Creates the [`Constraint`](super::Constraint) `\sum terms_i != rhs`.
pub fn not_equals<Var: IntegerVariable>(terms: impl Into<Box<[Var]>>, rhs: i32) -> Linear<Var> {
    unit_linear(terms, Relation::NotEqual, rhs)
}

/// Creates the [`Constraint`](super::Constraint) `\sum terms_i <= rhs`.
pub fn less_than_or_equals<Var: IntegerVariable>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> Linear<Var> {
    unit_linear(terms, Relation::LessOrEqual, rhs)
}

/// Creates the [`Constraint`](super::Constraint) `\sum terms_i >= rhs`.
pub fn greater_than_or_equals<Var: IntegerVariable>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> Linear<Var> {
    unit_linear(terms, Relation::GreaterOrEqual, rhs)
}

fn unit_linear<Var: IntegerVariable>(
    terms: impl Into<Box<[Var]>>,
    relation: Relation,
    rhs: i32,
) -> Linear<Var> {
    let terms: Box<[Var]> = terms.into();
    let coefficients = vec![1; terms.len()];
    linear(terms, coefficients, relation, rhs)
}
