/*!
Consistency of a set of clauses, by saturation under resolution.

Given clauses *C* ∨ *l* and *D* ∨ ¬*l*, resolution derives *C* ∨ *D*.
A set of clauses is inconsistent exactly when the empty clause can be derived by some sequence of resolutions.

The procedure here is naive:
- Every pair of clauses is resolved on every complementary pair of literals.
- New resolvents are added to the working set, and pairs involving a new clause are considered on the next pass.
- If the empty clause is derived the set is inconsistent, and otherwise when a pass adds nothing the set is consistent.

As atoms are finite, so are the possible clauses, and so the procedure terminates.
Still, the working set may grow exponentially with the number of atoms, and the procedure is only intended for small sets of clauses.

```rust
# use agm_lib::procedures::resolution::is_consistent;
# use agm_lib::structures::clause::ClauseSet;
assert!(!is_consistent(&ClauseSet::from_cnf("A∧¬A").unwrap()));
assert!(is_consistent(&ClauseSet::from_cnf("A∧B").unwrap()));
```
*/

use std::collections::HashSet;

use crate::{
    config::defaults,
    misc::log::targets::{self},
    structures::clause::{Clause, ClauseSet},
};

/// The result of saturating a set of clauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saturation {
    /// The empty clause was derived.
    Refuted,

    /// No new clause can be derived, and the empty clause is not among the clauses.
    Saturated,
}

/// Whether no contradiction follows from the clauses.
pub fn is_consistent(clauses: &ClauseSet) -> bool {
    saturate(clauses, defaults::TAUTOLOGY_PRUNING) == Saturation::Saturated
}

/// Saturates the clauses under resolution, stopping early on deriving the empty clause.
///
/// If `tautology_pruning` is set, tautological resolvents are discarded.
/// As a tautology is true on every valuation, this has no effect on the result.
pub fn saturate(clauses: &ClauseSet, tautology_pruning: bool) -> Saturation {
    let mut working: Vec<Clause> = Vec::with_capacity(clauses.len());
    let mut known: HashSet<Clause> = HashSet::default();

    for clause in clauses.clauses() {
        if clause.is_empty() {
            log::debug!(target: targets::RESOLUTION, "Empty clause given");
            return Saturation::Refuted;
        }
        if tautology_pruning && clause.is_tautology() {
            continue;
        }
        if known.insert(clause.clone()) {
            working.push(clause.clone());
        }
    }

    let given = working.len();
    // Pairs with both clauses before the frontier have already been resolved.
    let mut frontier = 0;

    loop {
        let pass_end = working.len();
        let mut fresh = Vec::default();

        for j in frontier.max(1)..pass_end {
            for i in 0..j {
                for resolvent in working[i].resolvents(&working[j]) {
                    if resolvent.is_empty() {
                        log::debug!(
                            target: targets::RESOLUTION,
                            "Refuted: {} and {} resolve to ⊥ ({} clauses derived)",
                            working[i],
                            working[j],
                            working.len() + fresh.len() - given
                        );
                        return Saturation::Refuted;
                    }
                    if tautology_pruning && resolvent.is_tautology() {
                        continue;
                    }
                    if known.insert(resolvent.clone()) {
                        log::trace!(target: targets::RESOLUTION, "{} from {} and {}", resolvent, working[i], working[j]);
                        fresh.push(resolvent);
                    }
                }
            }
        }

        if fresh.is_empty() {
            log::debug!(
                target: targets::RESOLUTION,
                "Saturated with {} clauses ({} derived)",
                working.len(),
                working.len() - given
            );
            return Saturation::Saturated;
        }

        frontier = pass_end;
        working.extend(fresh);
    }
}
