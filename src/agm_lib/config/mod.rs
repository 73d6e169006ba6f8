/*!
Configuration of a context.

All configuration for revision is contained within a [Config].
Defaults are fixed in [defaults].
*/

pub mod defaults;

/// An upper bound on the size of a subset of beliefs removed during contraction.
pub type ContractionLimit = usize;

#[derive(Debug, Clone)]
pub struct Config {
    /// Treat a belief already entailed by a (consistent) base as a no-op.
    pub entailment_check: bool,

    /// The largest number of beliefs contraction may remove, if bounded.
    pub contraction_limit: Option<ContractionLimit>,

    /// Discard tautological resolvents during resolution.
    pub tautology_pruning: bool,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            entailment_check: ENTAILMENT_CHECK,
            contraction_limit: CONTRACTION_LIMIT,
            tautology_pruning: TAUTOLOGY_PRUNING,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "entailment check:  {}", self.entailment_check)?;
        match self.contraction_limit {
            Some(limit) => writeln!(f, "contraction limit: {limit}")?,
            None => writeln!(f, "contraction limit: none")?,
        }
        write!(f, "tautology pruning: {}", self.tautology_pruning)
    }
}
