use std::fmt::Write;

use pedigree::{Individual, Pedigree};
use located_error::prelude::*;

use crate::ProfilerError;

/// Render a plain-text summary of `pedigree`: one line per member, the affected and unaffected
/// members, and the modes of inheritance that survived screening.
///
/// # Errors
/// - if the pedigree fails structural validation.
pub fn report(pedigree: &Pedigree) -> Result<String> {
    let candidates  = pedigree.find_mode_of_inheritance().loc(ProfilerError::Report)?;
    let generations = pedigree.generations().loc(ProfilerError::Report)?;
    let carriers    = pedigree.carrier_statuses().loc(ProfilerError::Report)?;

    let mut out = String::new();
    writeln!(out, "{: <8} {: <6} {: <6} {: <10} {: <10} {: <8}", "id", "sex", "symbol", "status", "generation", "carrier")?;
    for ((ind, generation), (_, carrier)) in generations.into_iter().zip(carriers) {
        let carrier = match carrier {
            _ if ind.is_affected() => "-",
            Some(true)             => "likely",
            Some(false)            => "no",
            None                   => "unknown",
        };
        let status = if ind.is_affected() { "affected" } else { "unaffected" };
        writeln!(out, "{: <8} {: <6} {: <6} {: <10} {: <10} {: <8}",
            ind.id(), ind.sex(), ind.sex().symbol(), status, generation, carrier
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Affected  : {}", join_ids(&pedigree.find_affected()))?;
    writeln!(out, "Unaffected: {}", join_ids(&pedigree.find_unaffected()))?;
    writeln!(out, "Candidate modes of inheritance: {candidates}")?;
    if let Some(mode) = candidates.conclusive() {
        writeln!(out, "Only {mode} remains compatible with this pedigree.")?;
    }
    write!(out, "Note: candidates are modes that no parent-child trio contradicts. They are compatible with, not proven by, the pedigree.")?;
    Ok(out)
}

fn join_ids(individuals: &[&Individual]) -> String {
    match individuals.is_empty() {
        true  => String::from("none"),
        false => individuals.iter().map(|ind| ind.id()).collect::<Vec<_>>().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree::Sex;

    fn trio() -> Result<Pedigree> {
        let mut father = Individual::new("father", Sex::Male)?;
        let mut mother = Individual::new("mother", Sex::Female)?;
        let mut child  = Individual::new("child", Sex::Female)?.with_status(true);
        child.add_parent(&mut father)?;
        child.add_parent(&mut mother)?;
        Pedigree::from_individuals([father, mother, child])
    }

    #[test]
    fn report_lists_members_and_candidates() -> Result<()> {
        let report = report(&trio()?)?;
        let lines = report.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].starts_with("father"));
        assert!(lines[3].starts_with("child"));
        assert!(lines[3].contains("affected"));
        assert!(report.contains("Affected  : child"));
        assert!(report.contains("Unaffected: father, mother"));
        assert!(report.contains("Candidate modes of inheritance: {Autosomal Recessive}"));
        assert!(report.contains("Only Autosomal Recessive remains"));
        Ok(())
    }

    #[test]
    fn report_empty_pedigree() -> Result<()> {
        let report = report(&Pedigree::new())?;
        assert!(report.contains("Affected  : none"));
        assert!(!report.contains("Only"));
        Ok(())
    }

    #[test]
    fn report_invalid_pedigree() -> Result<()> {
        let mut mother = Individual::new("mother", Sex::Female)?;
        let mut child  = Individual::new("child", Sex::Male)?;
        child.add_parent(&mut mother)?;
        let pedigree = Pedigree::from_individuals([child])?;
        assert!(report(&pedigree).is_err());
        Ok(())
    }
}
