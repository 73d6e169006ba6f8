//! A library for maintaining a consistent base of propositional beliefs, and revising it when new (possibly conflicting) beliefs arrive.
//!
//! Beliefs are propositional formulas over uppercase atoms, written with `¬ ∧ ∨ → ↔ ⊤ ⊥` (or the ASCII forms `! & | -> <->`).
//! Each belief is normalized once, on arrival, to conjunctive normal form, and questions of consistency and entailment are then settled by resolution over the resulting clauses.
//!
//! # Orientation
//!
//! The pipeline from text to verdict is:
//! - [parse] text into a [Formula](structures::formula::Formula).
//! - [Normalize](procedures::normalize) the formula to CNF, by eliminating implications, folding constants, pushing negations inward, and distributing disjunction over conjunction.
//! - Read the CNF as a [ClauseSet](structures::clause::ClauseSet).
//! - Ask the [resolution](procedures::resolution) procedure whether the empty clause can be derived.
//!
//! On top of this sits [revision](procedures::revision), following the Levi identity: to revise by φ, contract by ¬φ and then expand by φ.
//! Contraction searches for the smallest collection of beliefs whose removal restores consistency, preferring to give up weakly entrenched beliefs.
//!
//! A [context] owns a base and a [configuration](config), and is the natural entry point for a caller holding a single base.
//!
//! # Examples
//!
//! ```rust
//! # use agm_lib::config::Config;
//! # use agm_lib::context::Context;
//! # use agm_lib::reports::StepKind;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let revision = the_context.revise("A").unwrap();
//! assert_eq!(revision.kinds(), vec![StepKind::Added]);
//!
//! let revision = the_context.revise("¬A").unwrap();
//! assert_eq!(
//!     revision.kinds(),
//!     vec![StepKind::ConflictDetected, StepKind::Removed, StepKind::Added]
//! );
//!
//! assert_eq!(the_context.base().texts().collect::<Vec<_>>(), vec!["¬A"]);
//! ```
//!
//! ```rust
//! # use agm_lib::procedures::normalize::to_cnf;
//! assert_eq!(to_cnf("A→B").unwrap(), "¬A∨B");
//! assert_eq!(to_cnf("(A∧B)∨C").unwrap(), "(A∨C)∧(B∨C)");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! No logger is installed by the library.

pub mod config;
pub mod context;
pub mod io;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
