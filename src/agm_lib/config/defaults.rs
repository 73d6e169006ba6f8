use crate::config::{self};

pub const ENTAILMENT_CHECK: bool = true;
pub const CONTRACTION_LIMIT: Option<config::ContractionLimit> = None;
pub const TAUTOLOGY_PRUNING: bool = true;

/// Entrenchment of a belief with no non-empty clause.
pub const FULL_ENTRENCHMENT: f64 = 1.0;
