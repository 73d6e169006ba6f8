use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::{self, Config};

/// The level of detail to print, if not given.
pub const DETAIL: u8 = 0;

pub fn cli() -> Command {
    Command::new("agm_reviser")
        .about("Maintains a consistent base of propositional beliefs, revising it by new beliefs")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("no_entailment_check")
            .long("no-entailment-check")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Add a belief even if it already follows from the base.")
            .long_help("Add a belief even if it already follows from the base.

By default, a belief which follows from a consistent base is not added, as adding the belief would not change what follows from the base."))

        .arg(Arg::new("contraction_limit")
            .long("contraction-limit")
            .short('k')
            .value_name("N")
            .value_parser(value_parser!(config::ContractionLimit))
            .required(false)
            .num_args(1)
            .help("The largest number of beliefs to remove when resolving a conflict.
Default: No limit")
            .long_help("The largest number of beliefs to remove when resolving a conflict.
Default: No limit

Collections of beliefs are tried smallest first, so a limit bounds the work done on a conflict.
If no collection within the limit resolves the conflict, the new belief is not added."))

        .arg(Arg::new("keep_tautologies")
            .long("keep-tautologies")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Keep tautological clauses derived during resolution.")
            .long_help(format!("Keep tautological clauses derived during resolution.
Default: {}

Tautologies are true on every valuation, and so keeping them has no effect on any verdict.", !config::defaults::TAUTOLOGY_PRUNING)))

        .arg(Arg::new("store")
            .long("store")
            .short('s')
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("A JSON file to load the base from, and to save the base to on change."))

        .arg(Arg::new("detail")
            .long("detail")
            .short('d')
            .value_name("LEVEL")
            .value_parser(value_parser!(u8))
            .required(false)
            .num_args(1)
            .help(format!("The level of detail to print.
Default: {DETAIL}

  - 0: Revision steps
  - 1: And the base after each revision
  - 2: And the normal form of each belief")))

        .arg(Arg::new("formulas")
            .required(false)
            .trailing_var_arg(true)
            .num_args(0..)
            .help("Formulas to revise by, in order.
If none are given, formulas are read from standard input."))
}

impl Config {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = Config::default();

        if let Ok(Some(value)) = args.try_get_one::<bool>("no_entailment_check") {
            the_config.entailment_check = !*value
        };

        if let Ok(Some(limit)) = args.try_get_one::<config::ContractionLimit>("contraction_limit") {
            the_config.contraction_limit = Some(*limit)
        };

        if let Ok(Some(value)) = args.try_get_one::<bool>("keep_tautologies") {
            the_config.tautology_pruning = !*value
        };

        the_config
    }
}

/// Configuration of the front end, apart from the configuration of revision.
#[derive(Clone, Debug)]
pub struct ConfigIO {
    pub store: Option<PathBuf>,
    pub detail: u8,
    pub formulas: Vec<String>,
}

impl Default for ConfigIO {
    fn default() -> Self {
        ConfigIO {
            store: None,
            detail: DETAIL,
            formulas: Vec::default(),
        }
    }
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let mut the_config = ConfigIO::default();

        if let Ok(Some(path)) = args.try_get_one::<PathBuf>("store") {
            the_config.store = Some(path.clone())
        };

        if let Ok(Some(detail)) = args.try_get_one::<u8>("detail") {
            the_config.detail = *detail
        };

        if let Ok(Some(formulas)) = args.try_get_many::<String>("formulas") {
            the_config.formulas = formulas.cloned().collect()
        };

        the_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let matches = cli().get_matches_from(["agm_reviser"]);
        let the_config = Config::from_args(&matches);
        assert!(the_config.entailment_check);
        assert!(the_config.tautology_pruning);
        assert_eq!(the_config.contraction_limit, None);

        let the_config_io = ConfigIO::from_args(&matches);
        assert!(the_config_io.formulas.is_empty());
        assert_eq!(the_config_io.detail, DETAIL);
    }

    #[test]
    fn flags_and_formulas() {
        let matches = cli().get_matches_from([
            "agm_reviser",
            "--no-entailment-check",
            "--contraction-limit",
            "2",
            "--keep-tautologies",
            "--store",
            "base.json",
            "A",
            "¬A∨B",
        ]);

        let the_config = Config::from_args(&matches);
        assert!(!the_config.entailment_check);
        assert!(!the_config.tautology_pruning);
        assert_eq!(the_config.contraction_limit, Some(2));

        let the_config_io = ConfigIO::from_args(&matches);
        assert_eq!(the_config_io.store, Some(PathBuf::from("base.json")));
        assert_eq!(the_config_io.formulas, vec!["A", "¬A∨B"]);
    }
}
