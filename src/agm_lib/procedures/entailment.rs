/*!
Entailment, by refutation.

Some clauses entail φ exactly when the clauses together with ¬φ are inconsistent.
The negation is normalized as a formula in its own right, so a compound φ is negated as a whole.

```rust
# use agm_lib::procedures::entailment::is_entailed;
# use agm_lib::structures::clause::ClauseSet;
let a_implies_b = ClauseSet::from_cnf("¬A∨B").unwrap();
let a = ClauseSet::from_cnf("A").unwrap();

assert!(is_entailed(&[&a_implies_b, &a], "B").unwrap());
assert!(!is_entailed(&[&a], "B").unwrap());
```
*/

use crate::{
    config::defaults,
    misc::log::targets::{self},
    parse,
    procedures::{normalize, resolution},
    structures::{clause::ClauseSet, formula::Formula},
    types::err::{self},
};

/// Whether the conjunction of the sets of clauses entails the formula written in `text`.
pub fn is_entailed(beliefs: &[&ClauseSet], text: &str) -> Result<bool, err::ErrorKind> {
    let formula = parse::parse(text)?;
    Ok(entails(beliefs, &formula, defaults::TAUTOLOGY_PRUNING)?)
}

/// Whether the conjunction of the sets of clauses entails the formula.
pub fn entails(
    beliefs: &[&ClauseSet],
    formula: &Formula,
    tautology_pruning: bool,
) -> Result<bool, err::ClausalError> {
    let negation = normalize::cnf_formula(&formula.clone().not());
    let mut clauses = ClauseSet::try_from(&negation)?;
    log::trace!(target: targets::ENTAILMENT, "Refuting ¬({formula}) as {clauses}");

    for belief in beliefs {
        clauses.extend_from(belief);
    }

    let entailed =
        resolution::saturate(&clauses, tautology_pruning) == resolution::Saturation::Refuted;
    log::debug!(target: targets::ENTAILMENT, "{formula} entailed: {entailed}");
    Ok(entailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clauses(text: &str) -> ClauseSet {
        ClauseSet::from_cnf(&normalize::to_cnf(text).unwrap()).unwrap()
    }

    #[test]
    fn modus_ponens() {
        let base = [clauses("A→B"), clauses("A")];
        let base = base.iter().collect::<Vec<_>>();
        assert!(is_entailed(&base, "B").unwrap());
        assert!(!is_entailed(&base, "¬B").unwrap());
    }

    #[test]
    fn compound_goals() {
        let base = [clauses("A"), clauses("B")];
        let base = base.iter().collect::<Vec<_>>();
        assert!(is_entailed(&base, "A∧B").unwrap());
        assert!(is_entailed(&base, "A∨C").unwrap());
        assert!(is_entailed(&base, "C→A").unwrap());
        assert!(!is_entailed(&base, "A∧C").unwrap());
    }

    #[test]
    fn tautologies_from_nothing() {
        assert!(is_entailed(&[], "A∨¬A").unwrap());
        assert!(is_entailed(&[], "⊤").unwrap());
        assert!(!is_entailed(&[], "A").unwrap());
    }

    #[test]
    fn malformed_goal() {
        assert!(is_entailed(&[], "A∧").is_err());
    }
}
