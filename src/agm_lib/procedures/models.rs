/*!
Satisfiability by enumeration of valuations.

An independent check on [resolution](crate::procedures::resolution), which reads formulas directly rather than through their normal forms.
The number of valuations is exponential in the number of atoms, so this is only of use on very small inputs.

```rust
# use agm_lib::procedures::models::is_satisfiable;
# use agm_lib::structures::formula::Formula;
let formulas: Vec<Formula> = ["A→B", "A", "¬B"].iter().map(|t| t.parse().unwrap()).collect();
assert!(!is_satisfiable(&formulas));
assert!(is_satisfiable(&formulas[..2]));
```
*/

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    formula::{Formula, Valuation},
};

/// Every valuation of the atoms, starting from all false.
pub fn valuations(atoms: &BTreeSet<Atom>) -> Vec<Valuation> {
    let mut result = vec![Valuation::new()];
    for atom in atoms {
        let mut extended = Vec::with_capacity(result.len() * 2);
        for valuation in result {
            let mut negative = valuation.clone();
            negative.insert(atom.clone(), false);
            extended.push(negative);

            let mut positive = valuation;
            positive.insert(atom.clone(), true);
            extended.push(positive);
        }
        result = extended;
    }
    result
}

/// Some valuation on which every formula is true, if one exists.
pub fn model(formulas: &[Formula]) -> Option<Valuation> {
    let atoms = formulas
        .iter()
        .flat_map(Formula::atoms)
        .collect::<BTreeSet<_>>();

    valuations(&atoms)
        .into_iter()
        .find(|valuation| formulas.iter().all(|formula| formula.evaluate(valuation)))
}

/// Whether some valuation makes every formula true.
pub fn is_satisfiable(formulas: &[Formula]) -> bool {
    model(formulas).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valuation_count() {
        let atoms = ["A", "B", "C"]
            .into_iter()
            .map(|name| Atom::try_from(name).unwrap())
            .collect::<BTreeSet<_>>();
        assert_eq!(valuations(&atoms).len(), 8);
        assert_eq!(valuations(&BTreeSet::new()).len(), 1);
    }

    #[test]
    fn found_model_satisfies() {
        let formulas: Vec<Formula> = ["A∨B", "¬A"].iter().map(|t| t.parse().unwrap()).collect();
        let model = model(&formulas).unwrap();
        assert_eq!(model.get(&Atom::try_from("B").unwrap()), Some(&true));
    }

    #[test]
    fn constants() {
        assert!(is_satisfiable(&[Formula::Top]));
        assert!(!is_satisfiable(&[Formula::Bottom]));
        assert!(is_satisfiable(&[]));
    }
}
