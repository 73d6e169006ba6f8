/*!
A context, holding a base of beliefs and the configuration used to revise it.

Revisions made through a context replace the held base with the revised base.
The free functions of [revision](crate::procedures::revision) are available for callers who prefer to hold bases themselves.

```rust
# use agm_lib::config::Config;
# use agm_lib::context::Context;
let mut the_context = Context::from_config(Config::default());
the_context.revise("A→B").unwrap();
the_context.revise("A").unwrap();

assert!(the_context.entails("B").unwrap());
assert!(!the_context.entails("¬B").unwrap());
assert!(the_context.is_consistent());
```
*/

use crate::{
    config::Config,
    misc::log::targets::{self},
    parse,
    procedures::{entailment, normalize, resolution, revision},
    reports::{Revision, RevisionStep},
    structures::belief::BeliefBase,
    types::err::{self},
};

pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    base: BeliefBase,
}

impl Context {
    /// A context with an empty base.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            base: BeliefBase::default(),
        }
    }

    /// A context holding the given base, e.g. as read from a store.
    pub fn with_base(config: Config, base: BeliefBase) -> Self {
        Context { config, base }
    }

    pub fn base(&self) -> &BeliefBase {
        &self.base
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Revises the held base by the formula written in `text`, keeping the revised base.
    pub fn revise(&mut self, text: &str) -> Result<Revision, err::ErrorKind> {
        let revision = revision::revise(&self.base, text, &self.config)?;
        if revision.changed() {
            self.base = revision.base.clone();
        }
        Ok(revision)
    }

    /// Removes the belief with exactly the (trimmed) text, without any check of consistency.
    ///
    /// Returns a single [Removed](RevisionStep::Removed) step if some belief was removed, and no steps otherwise.
    pub fn contract(&mut self, text: &str) -> Vec<RevisionStep> {
        match self.base.remove(text) {
            Some(belief) => {
                log::info!(target: targets::CONTRACTION, "Removed {belief}");
                vec![RevisionStep::Removed(belief.text().to_owned())]
            }
            None => {
                log::debug!(target: targets::CONTRACTION, "No belief {} to remove", text.trim());
                Vec::default()
            }
        }
    }

    /// Whether the held base entails the formula written in `text`.
    pub fn entails(&self, text: &str) -> Result<bool, err::ErrorKind> {
        let formula = parse::parse(text)?;
        Ok(entailment::entails(
            &self.base.clause_sets(),
            &formula,
            self.config.tautology_pruning,
        )?)
    }

    pub fn is_consistent(&self) -> bool {
        resolution::saturate(&self.base.clauses(), self.config.tautology_pruning)
            == resolution::Saturation::Saturated
    }

    /// The conjunctive normal form of the formula written in `text`.
    pub fn cnf(&self, text: &str) -> Result<String, err::ErrorKind> {
        Ok(normalize::to_cnf(text)?)
    }
}
