//! Key structures, such as formulas, literals, clauses, and beliefs.
//!
//! ## Formulas and clauses
//!
//! A [formula] is a tree built from atoms with negation, conjunction, disjunction, implication, and the biconditional.
//! Normalization rewrites a formula to conjunctive normal form, at which point it may be read as a [set of clauses](clause::ClauseSet):
//! the conjunction of some collection of [clauses](clause::Clause), each the disjunction of some collection of [literals](literal).
//!
//! ## Beliefs
//!
//! A [belief] is a formula as entered, paired with the (cached) normal form of the formula.
//! A base of beliefs is an ordered collection of beliefs, unique by the text entered.

pub mod atom;
pub mod belief;
pub mod clause;
pub mod formula;
pub mod literal;
