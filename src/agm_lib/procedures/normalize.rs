/*!
Normalization of a formula to conjunctive normal form.

Normalization is a pipeline of structural rewrites, each consuming a formula and returning a new one:

1. [Eliminate](eliminate_implications) implication and the biconditional:
   - A→B ⇒ ¬A∨B
   - A↔B ⇒ (¬A∨B)∧(¬B∨A)
2. [Fold](fold_constants) the constants ⊤ and ⊥ into their surroundings, so either the formula is a constant or no constant remains.
3. [Push negation](push_negations) down to atoms:
   - ¬¬A ⇒ A
   - ¬(A∧B) ⇒ ¬A∨¬B
   - ¬(A∨B) ⇒ ¬A∧¬B
4. [Distribute](distribute) disjunction over conjunction:
   - (A∧B)∨C ⇒ (A∨C)∧(B∨C)
   - A∨(B∧C) ⇒ (A∨B)∧(A∨C)

Each rewrite is a single recursive pass.
As operands are rewritten before the node above them, no rule needs to be applied twice at the same node.

```rust
# use agm_lib::procedures::normalize::to_cnf;
assert_eq!(to_cnf("A").unwrap(), "A");
assert_eq!(to_cnf("¬(A∨B)").unwrap(), "¬A∧¬B");
assert_eq!(to_cnf("A↔B").unwrap(), "(¬A∨B)∧(¬B∨A)");
assert_eq!(to_cnf("(A∧B)∨(C∧D)").unwrap(), "(A∨C)∧(A∨D)∧(B∨C)∧(B∨D)");
```

The size of a normal form may be exponential in the size of the formula.
*/

use crate::{
    misc::log::targets::{self},
    parse,
    structures::formula::Formula,
    types::err::{self},
};

/// Parses and normalizes the text, returning the normal form as a string.
pub fn to_cnf(text: &str) -> Result<String, err::ParseError> {
    let formula = parse::parse(text)?;
    Ok(cnf_formula(&formula).to_string())
}

/// The normal form of a formula.
pub fn cnf_formula(formula: &Formula) -> Formula {
    let eliminated = eliminate_implications(formula.clone());
    let folded = fold_constants(eliminated);
    let nnf = push_negations(folded);
    log::trace!(target: targets::NORMALIZE, "NNF of {formula}: {nnf}");

    let cnf = distribute(nnf);
    log::debug!(target: targets::NORMALIZE, "CNF of {formula}: {cnf}");
    cnf
}

/// Rewrites implications and biconditionals in terms of negation, conjunction, and disjunction.
pub fn eliminate_implications(formula: Formula) -> Formula {
    match formula {
        Formula::Not(inner) => eliminate_implications(*inner).not(),
        Formula::And(l, r) => eliminate_implications(*l).and(eliminate_implications(*r)),
        Formula::Or(l, r) => eliminate_implications(*l).or(eliminate_implications(*r)),
        Formula::Implies(l, r) => eliminate_implications(*l)
            .not()
            .or(eliminate_implications(*r)),
        Formula::Iff(l, r) => {
            let l = eliminate_implications(*l);
            let r = eliminate_implications(*r);
            (l.clone().not().or(r.clone())).and(r.not().or(l))
        }
        atomic => atomic,
    }
}

/// Folds ⊤ and ⊥ into their surroundings.
///
/// Requires implications to have been eliminated.
pub fn fold_constants(formula: Formula) -> Formula {
    match formula {
        Formula::Not(inner) => match fold_constants(*inner) {
            Formula::Top => Formula::Bottom,
            Formula::Bottom => Formula::Top,
            other => other.not(),
        },
        Formula::And(l, r) => match (fold_constants(*l), fold_constants(*r)) {
            (Formula::Bottom, _) | (_, Formula::Bottom) => Formula::Bottom,
            (Formula::Top, other) | (other, Formula::Top) => other,
            (l, r) => l.and(r),
        },
        Formula::Or(l, r) => match (fold_constants(*l), fold_constants(*r)) {
            (Formula::Top, _) | (_, Formula::Top) => Formula::Top,
            (Formula::Bottom, other) | (other, Formula::Bottom) => other,
            (l, r) => l.or(r),
        },
        other => other,
    }
}

/// Pushes negation down to atoms, giving negation normal form.
///
/// Requires implications to have been eliminated.
pub fn push_negations(formula: Formula) -> Formula {
    match formula {
        Formula::Not(inner) => negate(*inner),
        Formula::And(l, r) => push_negations(*l).and(push_negations(*r)),
        Formula::Or(l, r) => push_negations(*l).or(push_negations(*r)),
        other => other,
    }
}

/// The negation normal form of the negation of the formula.
fn negate(formula: Formula) -> Formula {
    match formula {
        Formula::Not(inner) => push_negations(*inner),
        Formula::And(l, r) => negate(*l).or(negate(*r)),
        Formula::Or(l, r) => negate(*l).and(negate(*r)),
        Formula::Top => Formula::Bottom,
        Formula::Bottom => Formula::Top,
        Formula::Atom(atom) => Formula::Atom(atom).not(),
        Formula::Implies(l, r) => push_negations(*l).and(negate(*r)),
        Formula::Iff(l, r) => {
            let l = *l;
            let r = *r;
            (push_negations(l.clone()).and(negate(r.clone()))).or(negate(l).and(push_negations(r)))
        }
    }
}

/// Distributes disjunction over conjunction, so no disjunction has a conjunction below it.
///
/// Requires negation normal form.
pub fn distribute(formula: Formula) -> Formula {
    match formula {
        Formula::And(l, r) => distribute(*l).and(distribute(*r)),
        Formula::Or(l, r) => disjoin(distribute(*l), distribute(*r)),
        other => other,
    }
}

/// The disjunction of two formulas in normal form, in normal form.
fn disjoin(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (Formula::And(ll, lr), right) => disjoin(*ll, right.clone()).and(disjoin(*lr, right)),
        (left, Formula::And(rl, rr)) => disjoin(left.clone(), *rl).and(disjoin(left, *rr)),
        (left, right) => left.or(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::ClauseSet;

    fn cnf(text: &str) -> String {
        to_cnf(text).unwrap()
    }

    #[test]
    fn atoms_are_unchanged() {
        assert_eq!(cnf("A"), "A");
        assert_eq!(cnf("RAIN"), "RAIN");
        assert_eq!(cnf("¬A"), "¬A");
    }

    #[test]
    fn implication() {
        assert_eq!(cnf("A→B"), "¬A∨B");
        assert_eq!(cnf("(A∧B)→C"), "¬A∨¬B∨C");
        assert_eq!(cnf("A→(B→C)"), "¬A∨¬B∨C");
        assert_eq!(cnf("(A→B)→C"), "(A∨C)∧(¬B∨C)");
    }

    #[test]
    fn nested_implication_scopes() {
        assert_eq!(cnf("¬(A→B)"), "A∧¬B");
        assert_eq!(cnf("(A∨B)→(C∧D)"), "(¬A∨C)∧(¬A∨D)∧(¬B∨C)∧(¬B∨D)");
    }

    #[test]
    fn negation() {
        assert_eq!(cnf("¬¬A"), "A");
        assert_eq!(cnf("¬¬¬A"), "¬A");
        assert_eq!(cnf("¬(A∧B)"), "¬A∨¬B");
        assert_eq!(cnf("¬(A∧(B∨¬C))"), "(¬A∨¬B)∧(¬A∨C)");
    }

    #[test]
    fn distribution() {
        assert_eq!(cnf("(A∧B)∨C"), "(A∨C)∧(B∨C)");
        assert_eq!(cnf("A∨(B∧C)"), "(A∨B)∧(A∨C)");
        assert_eq!(cnf("A∨B∧C∨D"), "(A∨B∨D)∧(A∨C∨D)");
    }

    #[test]
    fn constants() {
        assert_eq!(cnf("A∧⊤"), "A");
        assert_eq!(cnf("A∨⊤"), "⊤");
        assert_eq!(cnf("A∧¬⊤"), "⊥");
        assert_eq!(cnf("⊥→A"), "⊤");
        assert_eq!(cnf("A↔⊥"), "¬A");
    }

    #[test]
    fn idempotent_on_clauses() {
        for text in [
            "A↔B",
            "(A∧B)∨(C∧D)",
            "¬(A→(B∨¬C))",
            "(A→B)∧(B→C)→(A→C)",
            "A∨B∧C∨D",
            "¬(A↔¬B)∨C",
        ] {
            let once = cnf(text);
            let twice = cnf(&once);
            let mut once_clauses = ClauseSet::from_cnf(&once).unwrap().into_iter().collect::<Vec<_>>();
            let mut twice_clauses = ClauseSet::from_cnf(&twice).unwrap().into_iter().collect::<Vec<_>>();
            once_clauses.sort();
            twice_clauses.sort();
            assert_eq!(once_clauses, twice_clauses, "{text}");
        }
    }
}
