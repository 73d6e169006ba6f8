/*!
Beliefs, and bases of beliefs.

A [Belief] is the text of a formula as entered together with its normal form, computed once when the belief is made.
The clauses of the normal form are kept alongside, so checks of consistency never return to the text.

A [BeliefBase] is an ordered sequence of beliefs, unique by text.
Order carries no meaning, but is kept for display and to break ties when deciding which beliefs to give up.

# Serialization

A base serializes as an ordered list of `{ "text", "cnf" }` records.
On deserialization the clauses of each belief are rebuilt from the stored normal form, and a record whose normal form cannot be read is rejected.
Texts are trimmed as they are read, and a record repeating an earlier text is dropped, so a loaded base is unique by text as any other base.

```rust
# use agm_lib::structures::belief::{Belief, BeliefBase};
let mut base = BeliefBase::default();
base.push(Belief::new("A → B").unwrap());

let json = serde_json::to_string(&base).unwrap();
assert_eq!(json, r#"[{"text":"A → B","cnf":"¬A∨B"}]"#);

let read: BeliefBase = serde_json::from_str(&json).unwrap();
assert_eq!(read, base);
```
*/

use serde::{Deserialize, Serialize};

use crate::{
    misc::log::targets::{self},
    parse,
    procedures::normalize,
    structures::{clause::ClauseSet, formula::Formula},
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BeliefRecord", into = "BeliefRecord")]
pub struct Belief {
    text: String,
    cnf: String,
    clauses: ClauseSet,
}

/// The stored form of a belief.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeliefRecord {
    #[serde(alias = "belief")]
    pub text: String,
    pub cnf: String,
}

impl Belief {
    /// A belief from the text of a formula, with surrounding whitespace trimmed.
    pub fn new(text: &str) -> Result<Self, err::ErrorKind> {
        let text = text.trim();
        let formula = parse::parse(text)?;
        Ok(Belief::from_formula(text, &formula)?)
    }

    /// A belief from a formula already read from `text`.
    pub fn from_formula(text: &str, formula: &Formula) -> Result<Self, err::ClausalError> {
        let cnf = normalize::cnf_formula(formula);
        let clauses = ClauseSet::try_from(&cnf)?;
        Ok(Belief {
            text: text.trim().to_owned(),
            cnf: cnf.to_string(),
            clauses,
        })
    }

    /// The text of the belief, as entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The normal form of the belief.
    pub fn cnf(&self) -> &str {
        &self.cnf
    }

    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }
}

impl TryFrom<BeliefRecord> for Belief {
    type Error = err::ErrorKind;

    fn try_from(record: BeliefRecord) -> Result<Self, Self::Error> {
        let clauses = ClauseSet::from_cnf(&record.cnf)?;
        Ok(Belief {
            text: record.text.trim().to_owned(),
            cnf: record.cnf,
            clauses,
        })
    }
}

impl From<Belief> for BeliefRecord {
    fn from(belief: Belief) -> Self {
        BeliefRecord {
            text: belief.text,
            cnf: belief.cnf,
        }
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Belief>", into = "Vec<Belief>")]
pub struct BeliefBase {
    beliefs: Vec<Belief>,
}

impl BeliefBase {
    pub fn new() -> Self {
        BeliefBase::default()
    }

    pub fn beliefs(&self) -> impl Iterator<Item = &Belief> {
        self.beliefs.iter()
    }

    /// The texts of the beliefs, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.beliefs.iter().map(Belief::text)
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Belief> {
        self.beliefs.get(index)
    }

    /// Whether some belief has exactly the (trimmed) text.
    pub fn contains(&self, text: &str) -> bool {
        let text = text.trim();
        self.beliefs.iter().any(|belief| belief.text == text)
    }

    /// Appends the belief, unless a belief with the same text is present.
    /// Returns true if the belief was appended.
    pub fn push(&mut self, belief: Belief) -> bool {
        if self.contains(&belief.text) {
            return false;
        }
        self.beliefs.push(belief);
        true
    }

    /// Removes the belief with exactly the (trimmed) text, if present.
    pub fn remove(&mut self, text: &str) -> Option<Belief> {
        let text = text.trim();
        let index = self.beliefs.iter().position(|belief| belief.text == text)?;
        Some(self.beliefs.remove(index))
    }

    /// The clauses of each belief, in order.
    pub fn clause_sets(&self) -> Vec<&ClauseSet> {
        self.beliefs.iter().map(Belief::clauses).collect()
    }

    /// The conjunction of the clauses of every belief.
    pub fn clauses(&self) -> ClauseSet {
        ClauseSet::union(self.beliefs.iter().map(Belief::clauses))
    }

    /// A base of the beliefs whose indices are not in `excluded`, in order.
    pub fn without_indices(&self, excluded: &[usize]) -> BeliefBase {
        BeliefBase {
            beliefs: self
                .beliefs
                .iter()
                .enumerate()
                .filter(|(index, _)| !excluded.contains(index))
                .map(|(_, belief)| belief.clone())
                .collect(),
        }
    }
}

impl FromIterator<Belief> for BeliefBase {
    fn from_iter<T: IntoIterator<Item = Belief>>(iter: T) -> Self {
        let mut base = BeliefBase::new();
        for belief in iter {
            base.push(belief);
        }
        base
    }
}

/// Records are read in order, and a record repeating the text of an earlier record is dropped.
impl From<Vec<Belief>> for BeliefBase {
    fn from(beliefs: Vec<Belief>) -> Self {
        let mut base = BeliefBase::new();
        for belief in beliefs {
            if !base.contains(belief.text()) {
                base.beliefs.push(belief);
            } else {
                log::warn!(target: targets::STORE, "Dropped a repeated record of {belief}");
            }
        }
        base
    }
}

impl From<BeliefBase> for Vec<Belief> {
    fn from(base: BeliefBase) -> Self {
        base.beliefs
    }
}

impl std::fmt::Display for BeliefBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut sep = false;
        for belief in &self.beliefs {
            if sep {
                write!(f, ", ")?;
            } else {
                sep = true;
            }
            write!(f, "{belief}")?;
        }
        write!(f, "}}")
    }
}
