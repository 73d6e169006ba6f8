/*!
Loading and saving a base of beliefs as JSON.

A store is a file holding an ordered list of `{ "text", "cnf" }` records, as described in [belief](crate::structures::belief).
A missing file is read as an empty base, so a store need not exist before the first save.
*/

use std::{fs, io::ErrorKind, path::Path};

use crate::{
    misc::log::targets::{self},
    structures::belief::BeliefBase,
    types::err::{self},
};

/// Reads a base from the file at `path`, or an empty base if there is no such file.
pub fn load(path: &Path) -> Result<BeliefBase, err::StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!(target: targets::STORE, "No store at {}, starting from an empty base", path.display());
            return Ok(BeliefBase::default());
        }
        Err(e) => return Err(e.into()),
    };

    let base = from_json(&json)?;
    log::info!(target: targets::STORE, "Loaded {} beliefs from {}", base.len(), path.display());
    Ok(base)
}

/// Writes the base to the file at `path`, replacing any existing contents.
pub fn save(path: &Path, base: &BeliefBase) -> Result<(), err::StoreError> {
    fs::write(path, to_json(base)?)?;
    log::info!(target: targets::STORE, "Saved {} beliefs to {}", base.len(), path.display());
    Ok(())
}

pub fn from_json(json: &str) -> Result<BeliefBase, err::StoreError> {
    if json.trim().is_empty() {
        return Ok(BeliefBase::default());
    }
    Ok(serde_json::from_str(json)?)
}

pub fn to_json(base: &BeliefBase) -> Result<String, err::StoreError> {
    Ok(serde_json::to_string_pretty(base)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context, reports::RevisionStep, structures::belief::Belief};

    #[test]
    fn records_with_belief_field() {
        let base = from_json(r#"[{"belief":"A → B","cnf":"¬A∨B"},{"text":"A","cnf":"A"}]"#).unwrap();
        assert_eq!(base.texts().collect::<Vec<_>>(), vec!["A → B", "A"]);
        assert_eq!(base.get(0).unwrap().clauses().width(), 2);
    }

    #[test]
    fn repeated_and_padded_records() {
        let base = from_json(r#"[{"text":"A","cnf":"A"},{"text":"A","cnf":"A"},{"text":" B ","cnf":"B"},{"text":"B","cnf":"B"}]"#).unwrap();
        assert_eq!(base.texts().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(base.contains("B"));

        let mut the_context = Context::with_base(Config::default(), base);
        assert_eq!(the_context.contract("A"), vec![RevisionStep::Removed("A".to_owned())]);
        assert_eq!(the_context.contract(" B "), vec![RevisionStep::Removed("B".to_owned())]);
        assert!(the_context.base().is_empty());
    }

    #[test]
    fn malformed_records() {
        assert!(matches!(from_json("{"), Err(err::StoreError::Format(_))));
        assert!(matches!(
            from_json(r#"[{"text":"A","cnf":"A∨(B∧C)"}]"#),
            Err(err::StoreError::Format(_))
        ));
        assert_eq!(from_json("  ").unwrap(), BeliefBase::default());
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("agm_store_{}.json", std::process::id()));

        let base: BeliefBase = ["A∨B", "¬C"].iter().map(|t| Belief::new(t).unwrap()).collect();
        save(&path, &base).unwrap();
        assert_eq!(load(&path).unwrap(), base);

        fs::remove_file(&path).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }
}
