/*!
Procedures over formulas, clauses, and bases of beliefs.

- [normalize] rewrites a formula to conjunctive normal form.
- [resolution] decides the consistency of a set of clauses.
- [entailment] decides entailment, by refutation.
- [revision] revises a base of beliefs by a new belief.
- [models] decides satisfiability by enumeration, as an independent check on resolution.
*/

pub mod entailment;
pub mod models;
pub mod normalize;
pub mod resolution;
pub mod revision;
