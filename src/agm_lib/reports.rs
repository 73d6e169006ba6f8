/*!
Reports of what happened during a revision.

A revision produces an ordered trace of [RevisionStep]s, each a kind paired with the text of the belief involved.
Steps are plain data: rendering is left to the caller, perhaps keyed on [StepKind].

Steps serialize with a kebab-case kind:

```rust
# use agm_lib::reports::RevisionStep;
let step = RevisionStep::ConflictDetected("¬A".to_owned());
assert_eq!(
    serde_json::to_string(&step).unwrap(),
    r#"{"kind":"conflict-detected","belief":"¬A"}"#
);
```
*/

use serde::{Deserialize, Serialize};

use crate::structures::belief::BeliefBase;

/// A single step of a revision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "belief", rename_all = "kebab-case")]
pub enum RevisionStep {
    /// The belief is already in the base, by text.
    AlreadyExists(String),

    /// The belief already follows from the base.
    AlreadyEntailed(String),

    /// Adding the belief would make the base inconsistent.
    ConflictDetected(String),

    /// The belief was removed from the base.
    Removed(String),

    /// The belief was added to the base.
    Added(String),

    /// No removal of beliefs allows the belief to be added consistently.
    Unresolved(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    AlreadyExists,
    AlreadyEntailed,
    ConflictDetected,
    Removed,
    Added,
    Unresolved,
}

impl RevisionStep {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::AlreadyExists(_) => StepKind::AlreadyExists,
            Self::AlreadyEntailed(_) => StepKind::AlreadyEntailed,
            Self::ConflictDetected(_) => StepKind::ConflictDetected,
            Self::Removed(_) => StepKind::Removed,
            Self::Added(_) => StepKind::Added,
            Self::Unresolved(_) => StepKind::Unresolved,
        }
    }

    /// The text of the belief involved in the step.
    pub fn belief(&self) -> &str {
        match self {
            Self::AlreadyExists(text)
            | Self::AlreadyEntailed(text)
            | Self::ConflictDetected(text)
            | Self::Removed(text)
            | Self::Added(text)
            | Self::Unresolved(text) => text,
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists => write!(f, "already-exists"),
            Self::AlreadyEntailed => write!(f, "already-entailed"),
            Self::ConflictDetected => write!(f, "conflict-detected"),
            Self::Removed => write!(f, "removed"),
            Self::Added => write!(f, "added"),
            Self::Unresolved => write!(f, "unresolved"),
        }
    }
}

impl std::fmt::Display for RevisionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.belief())
    }
}

/// How a revision ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevisionOutcome {
    /// The belief was already present, and the base is unchanged.
    Duplicate,

    /// The belief already followed from the base, and the base is unchanged.
    Entailed,

    /// The belief was added without removing anything.
    Expanded,

    /// The beliefs with the given texts were removed, and the belief added.
    Contracted(Vec<String>),

    /// The belief could not be added consistently, and the base is unchanged.
    Unresolved,
}

/// The result of a revision: the revised base, the steps taken, and a summary of the steps.
#[derive(Clone, Debug)]
pub struct Revision {
    pub base: BeliefBase,
    pub steps: Vec<RevisionStep>,
    pub outcome: RevisionOutcome,
}

impl Revision {
    /// The kinds of the steps, in order.
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(RevisionStep::kind).collect()
    }

    /// Whether the base was changed by the revision.
    pub fn changed(&self) -> bool {
        matches!(
            self.outcome,
            RevisionOutcome::Expanded | RevisionOutcome::Contracted(_)
        )
    }
}
