extern crate parser;
extern crate logger;

use std::str::FromStr;

use parser::{Cli, Commands::*, IndividualArg, LinkArg, TextbookPedigree};
use pedigree::{Individual, Pedigree, Sex};
use located_error::prelude::*;

#[macro_use]
extern crate log;

pub mod textbook;

mod report;
pub use report::report;

#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("Failed to build the {0}")]
    Textbook(TextbookPedigree),

    #[error("Failed to build a pedigree from the command line")]
    BuildPedigree,

    #[error("Failed to report on the pedigree")]
    Report,
}

/// Assemble a pedigree from user-declared individuals and links. Links are applied in order,
/// through [`Pedigree::set_relationship`]: re-linking a child to a second parent of the same sex
/// replaces the first one.
///
/// # Errors
/// - if an individual carries an invalid sex or identifier, or is declared twice.
/// - if a link points to an undeclared individual, or links an individual to itself.
pub fn build_pedigree(individuals: &[IndividualArg], links: &[LinkArg]) -> Result<Pedigree> {
    let mut pedigree = Pedigree::new();
    for IndividualArg { id, sex, affected } in individuals {
        let sex = Sex::from_str(sex).with_loc(|| format!("While parsing the sex of {id}"))?;
        let individual = Individual::new(id, sex)?.with_status(*affected);
        pedigree.add_individual(individual).loc(ProfilerError::BuildPedigree)?;
    }

    for LinkArg { child, parent } in links {
        pedigree.set_relationship(child, parent).loc(ProfilerError::BuildPedigree)?;
    }
    Ok(pedigree)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Textbook { pedigree } => {
            let selected = pedigree.map_or_else(|| TextbookPedigree::ALL.to_vec(), |which| vec![which]);
            for which in selected {
                info!("Screening the {which}...");
                let pedigree = textbook::build(which).with_loc(|| ProfilerError::Textbook(which))?;
                println!("==== {which} ====\n{}\n", report(&pedigree)?);
            }
        },

        Infer { individuals, links } => {
            info!("Building a pedigree of {} individuals...", individuals.len());
            let pedigree = build_pedigree(&individuals, &links)?;
            println!("{}", report(&pedigree)?);
        },
    };
    Ok(())
}
