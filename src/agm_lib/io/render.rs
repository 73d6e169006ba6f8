/*!
Writing revision steps to a terminal, coloured by kind.
*/

use std::io::Write;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::{
    reports::{RevisionStep, StepKind},
    structures::belief::BeliefBase,
};

pub fn colour(kind: StepKind) -> Color {
    match kind {
        StepKind::AlreadyExists => Color::DarkRed,
        StepKind::AlreadyEntailed => Color::DarkGreen,
        StepKind::ConflictDetected => Color::Red,
        StepKind::Removed => Color::Cyan,
        StepKind::Added => Color::Green,
        StepKind::Unresolved => Color::Yellow,
    }
}

/// A line describing the step.
pub fn message(step: &RevisionStep) -> String {
    match step {
        RevisionStep::AlreadyExists(belief) => format!("{belief} is already in the base"),
        RevisionStep::AlreadyEntailed(belief) => format!("{belief} already follows from the base"),
        RevisionStep::ConflictDetected(belief) => format!("{belief} conflicts with the base"),
        RevisionStep::Removed(belief) => format!("Removed {belief}"),
        RevisionStep::Added(belief) => format!("Added {belief}"),
        RevisionStep::Unresolved(belief) => format!("Unable to add {belief} consistently"),
    }
}

pub fn write_steps(out: &mut impl Write, steps: &[RevisionStep]) -> std::io::Result<()> {
    for step in steps {
        out.queue(SetForegroundColor(colour(step.kind())))?;
        out.queue(Print(message(step)))?;
        out.queue(ResetColor)?;
        out.queue(Print("\n"))?;
    }
    out.flush()
}

pub fn write_base(out: &mut impl Write, base: &BeliefBase, with_cnf: bool) -> std::io::Result<()> {
    if base.is_empty() {
        writeln!(out, "  (no beliefs)")?;
    }
    for belief in base.beliefs() {
        match with_cnf {
            true => writeln!(out, "  {belief}  ≡  {}", belief.cnf())?,
            false => writeln!(out, "  {belief}")?,
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::belief::Belief;

    #[test]
    fn steps_are_printed_in_order() {
        let steps = vec![
            RevisionStep::ConflictDetected("¬A".to_owned()),
            RevisionStep::Removed("A".to_owned()),
            RevisionStep::Added("¬A".to_owned()),
        ];
        let mut out = Vec::default();
        write_steps(&mut out, &steps).unwrap();
        let out = String::from_utf8(out).unwrap();

        let conflict = out.find("¬A conflicts with the base").unwrap();
        let removed = out.find("Removed A").unwrap();
        let added = out.find("Added ¬A").unwrap();
        assert!(conflict < removed && removed < added);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn base_with_normal_forms() {
        let base: BeliefBase = [Belief::new("A→B").unwrap()].into_iter().collect();
        let mut out = Vec::default();
        write_base(&mut out, &base, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  A→B  ≡  ¬A∨B\n");
    }
}
