/*!
Revision of a base of beliefs, following the Levi identity.

To revise a base *B* by φ is to contract *B* by ¬φ and then expand by φ.
In detail, a revision takes the first of the following which applies:

1. If φ is in *B* (by text), nothing is done.
2. If *B* is consistent and entails φ, nothing is done (see [Config::entailment_check]).
3. If *B* with φ is consistent, φ is added.
4. Otherwise, the smallest collection of beliefs whose removal allows φ to be added consistently is removed, and φ is added.
5. If there is no such collection, nothing is done and the conflict is reported as unresolved.

# Entrenchment

Contraction prefers to give up weakly held beliefs.
The entrenchment of a belief is 1 / *w*, where *w* is the size of the largest clause of the belief.
So atomic beliefs are most entrenched, and wide disjunctions are least entrenched.

Collections are tried by size, smallest first.
Within a size, collections are tried in order of combined entrenchment, least first, and ties are broken by the order of beliefs sorted by entrenchment (in turn with ties broken by the order of the base).

Note, the first collection which works is taken, so a collection of weakly entrenched beliefs is passed over if it does not resolve the conflict, regardless of the entrenchment of what is eventually removed.

```rust
# use agm_lib::config::Config;
# use agm_lib::procedures::revision::revise;
# use agm_lib::structures::belief::{Belief, BeliefBase};
let base: BeliefBase = ["A", "A∨B"].iter().map(|t| Belief::new(t).unwrap()).collect();

let revision = revise(&base, "¬A", &Config::default()).unwrap();
assert_eq!(revision.base.texts().collect::<Vec<_>>(), vec!["A∨B", "¬A"]);
```
*/

use crate::{
    config::{defaults, Config},
    misc::log::targets::{self},
    parse,
    procedures::{entailment, resolution},
    reports::{Revision, RevisionOutcome, RevisionStep},
    structures::belief::{Belief, BeliefBase},
    types::err::{self},
};

/// The entrenchment of a belief, in (0, 1].
pub fn entrenchment(belief: &Belief) -> f64 {
    match belief.clauses().width() {
        0 => defaults::FULL_ENTRENCHMENT,
        width => 1.0 / width as f64,
    }
}

/// Indices of the base, by ascending entrenchment and then position in the base.
pub fn removal_order(base: &BeliefBase) -> Vec<usize> {
    let scores = base.beliefs().map(entrenchment).collect::<Vec<_>>();
    let mut order = (0..base.len()).collect::<Vec<_>>();
    // A stable sort, so equal entrenchment keeps the order of the base.
    order.sort_by(|a, b| scores[*a].total_cmp(&scores[*b]));
    order
}

/// Every collection of `size` indices from `0..count`, in lexicographic order.
fn combinations(count: usize, size: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::default();
    if size > count {
        return result;
    }

    let mut current = (0..size).collect::<Vec<_>>();
    loop {
        result.push(current.clone());

        // Advance the rightmost index which has room to move.
        let Some(pivot) = (0..size).rev().find(|&i| current[i] < count - size + i) else {
            return result;
        };
        current[pivot] += 1;
        for i in pivot + 1..size {
            current[i] = current[i - 1] + 1;
        }
    }
}

/// The collections of beliefs of the given size, as indices of the base, in the order they are tried during contraction.
pub fn candidate_collections(base: &BeliefBase, size: usize) -> Vec<Vec<usize>> {
    let order = removal_order(base);
    let scores = base.beliefs().map(entrenchment).collect::<Vec<_>>();

    let mut collections = combinations(order.len(), size)
        .into_iter()
        .map(|positions| positions.into_iter().map(|p| order[p]).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let combined = |collection: &Vec<usize>| collection.iter().map(|i| scores[*i]).sum::<f64>();
    collections.sort_by(|a, b| combined(a).total_cmp(&combined(b)));
    collections
}

fn consistent_with(base: &BeliefBase, belief: &Belief, config: &Config) -> bool {
    let mut clauses = base.clauses();
    clauses.extend_from(belief.clauses());
    resolution::saturate(&clauses, config.tautology_pruning) == resolution::Saturation::Saturated
}

/// The indices of the beliefs to remove so that `belief` may be added consistently, if some such collection exists.
///
/// Returned indices are in ascending order.
pub fn find_contraction(base: &BeliefBase, belief: &Belief, config: &Config) -> Option<Vec<usize>> {
    if !consistent_with(&BeliefBase::new(), belief, config) {
        log::debug!(target: targets::CONTRACTION, "{belief} is inconsistent by itself");
        return None;
    }

    let limit = config.contraction_limit.unwrap_or(base.len()).min(base.len());

    for size in 1..=limit {
        for mut collection in candidate_collections(base, size) {
            let remaining = base.without_indices(&collection);
            if consistent_with(&remaining, belief, config) {
                collection.sort_unstable();
                log::debug!(target: targets::CONTRACTION, "Removing {collection:?} to admit {belief}");
                return Some(collection);
            }
            log::trace!(target: targets::CONTRACTION, "Removing {collection:?} does not admit {belief}");
        }
    }

    None
}

/// Revises the base by the formula written in `text`.
///
/// The base given is not changed, and the revised base is returned as part of the [Revision].
/// Malformed text is an error, and no revision takes place.
pub fn revise(base: &BeliefBase, text: &str, config: &Config) -> Result<Revision, err::ErrorKind> {
    let text = text.trim();
    let formula = parse::parse(text)?;
    let belief = Belief::from_formula(text, &formula)?;
    log::info!(target: targets::REVISION, "Revising {base} by {text}");

    if base.contains(text) {
        return Ok(Revision {
            base: base.clone(),
            steps: vec![RevisionStep::AlreadyExists(text.to_owned())],
            outcome: RevisionOutcome::Duplicate,
        });
    }

    if config.entailment_check {
        let base_clauses = base.clauses();
        // An inconsistent base entails everything, and so is revised as usual.
        let base_consistent = resolution::saturate(&base_clauses, config.tautology_pruning)
            == resolution::Saturation::Saturated;

        if base_consistent
            && entailment::entails(&[&base_clauses], &formula, config.tautology_pruning)?
        {
            return Ok(Revision {
                base: base.clone(),
                steps: vec![RevisionStep::AlreadyEntailed(text.to_owned())],
                outcome: RevisionOutcome::Entailed,
            });
        }
    }

    if consistent_with(base, &belief, config) {
        let mut revised = base.clone();
        revised.push(belief);
        log::info!(target: targets::REVISION, "Expanded to {revised}");
        return Ok(Revision {
            base: revised,
            steps: vec![RevisionStep::Added(text.to_owned())],
            outcome: RevisionOutcome::Expanded,
        });
    }

    let mut steps = vec![RevisionStep::ConflictDetected(text.to_owned())];

    match find_contraction(base, &belief, config) {
        Some(collection) => {
            let removed = collection
                .iter()
                .filter_map(|index| base.get(*index))
                .map(|removed| removed.text().to_owned())
                .collect::<Vec<_>>();

            let mut revised = base.without_indices(&collection);
            revised.push(belief);

            steps.extend(removed.iter().cloned().map(RevisionStep::Removed));
            steps.push(RevisionStep::Added(text.to_owned()));
            log::info!(target: targets::REVISION, "Contracted to {revised}");

            Ok(Revision {
                base: revised,
                steps,
                outcome: RevisionOutcome::Contracted(removed),
            })
        }

        None => {
            steps.push(RevisionStep::Unresolved(text.to_owned()));
            log::info!(target: targets::REVISION, "Unable to admit {text}");

            Ok(Revision {
                base: base.clone(),
                steps,
                outcome: RevisionOutcome::Unresolved,
            })
        }
    }
}

/// The base without the belief with exactly the (trimmed) text, if any.
pub fn contract(base: &BeliefBase, text: &str) -> BeliefBase {
    let mut contracted = base.clone();
    contracted.remove(text);
    contracted
}
