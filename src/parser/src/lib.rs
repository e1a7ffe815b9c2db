use std::fmt::{self, Display, Formatter};

use located_error::prelude::*;

use clap::{Parser, Subcommand, ArgEnum};
use serde::Serialize;
use log::debug;

mod error;
pub use error::ParserError;

#[derive(Parser, Debug, Serialize)]
#[clap(name="pedigree-profiler", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Pedigree Profiler: screen family pedigrees for compatible modes of inheritance
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Serialize command line arguments to yaml, and print them at the debug level.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to serialize `Self`.
    pub fn serialize(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self).loc(ParserError::SerializeArgs)?;
        debug!("\n---- Command line args ----\n{}\n---", serialized);
        Ok(())
    }

    /// Verbosity level handed to the logger. `--quiet` takes precedence and only lets errors through.
    pub fn verbosity(&self) -> u8 {
        match self.quiet {
            true  => 0,
            false => self.verbose.saturating_add(1),
        }
    }
}

#[derive(Subcommand, Debug, Serialize)]
pub enum Commands {
    /// Screen the built-in textbook pedigrees.
    ///
    /// Runs the inference over each of the four classical textbook pedigrees (one per mode of
    /// inheritance), and prints a report for each. Use --pedigree to select a single one.
    Textbook {
        /// Only screen the given textbook pedigree.
        #[clap(short, long, arg_enum)]
        pedigree: Option<TextbookPedigree>,
    },

    /// Build a pedigree from the command line, and screen it.
    ///
    /// Individuals are declared first, then linked to their parents. The parent's sex decides whether
    /// it becomes the mother or the father of the child.
    Infer {
        /// Declare an individual, as ID:SEX[:STATUS]
        ///
        /// SEX is one of 'M', 'male', '1', 'F', 'female' or '2'. {n}
        /// STATUS is one of 'affected', 'a', 'unaffected' or 'u'. Defaults to 'unaffected'. {n}
        /// e.g. '--individual I1:M I2:F I3:F:affected'
        #[clap(short='i', long="individual", required(true), multiple_values(true), parse(try_from_str=parse_individual))]
        individuals: Vec<IndividualArg>,

        /// Link a child to one of its parents, as CHILD:PARENT
        ///
        /// Both identifiers must have been declared with --individual. {n}
        /// e.g. '--link I3:I1 I3:I2'
        #[clap(short='l', long="link", required(false), multiple_values(true), parse(try_from_str=parse_link))]
        links: Vec<LinkArg>,
    },
}

/// The four classical textbook pedigrees, named after the mode of inheritance they illustrate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ArgEnum, Serialize)]
pub enum TextbookPedigree {
    #[clap(name = "ar")]
    AutosomalRecessive,
    #[clap(name = "xld")]
    XLinkedDominant,
    #[clap(name = "ad")]
    AutosomalDominant,
    #[clap(name = "xlr")]
    XLinkedRecessive,
}

impl TextbookPedigree {
    pub const ALL: [TextbookPedigree; 4] = [
        Self::AutosomalRecessive,
        Self::XLinkedDominant,
        Self::AutosomalDominant,
        Self::XLinkedRecessive,
    ];
}

impl Display for TextbookPedigree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AutosomalRecessive => "Autosomal Recessive",
            Self::XLinkedDominant    => "X-Linked Dominant",
            Self::AutosomalDominant  => "Autosomal Dominant",
            Self::XLinkedRecessive   => "X-Linked Recessive",
        };
        write!(f, "{name} textbook pedigree")
    }
}

/// A user-declared individual. `sex` is kept raw, and validated once the individual is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualArg {
    pub id      : String,
    pub sex     : String,
    pub affected: bool,
}

/// A user-declared `child -> parent` relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkArg {
    pub child : String,
    pub parent: String,
}

/// Parse an `ID:SEX[:STATUS]` triplet. A missing status defaults to unaffected.
fn parse_individual(s: &str) -> Result<IndividualArg> {
    let fields = s.split(':').map(str::trim).collect::<Vec<&str>>();
    let (id, sex, status) = match fields.as_slice() {
        [id, sex]         => (*id, *sex, None),
        [id, sex, status] => (*id, *sex, Some(*status)),
        _                 => return loc!(ParserError::ParseIndividual(s.to_string())),
    };

    if id.is_empty() || sex.is_empty() {
        return loc!(ParserError::ParseIndividual(s.to_string()))
    }

    let affected = match status {
        Some(status) => parse_status(status).with_loc(|| format!("While parsing the provided string: {s}"))?,
        None         => false,
    };
    Ok(IndividualArg { id: id.to_string(), sex: sex.to_string(), affected })
}

fn parse_status(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "affected"   | "a" => Ok(true),
        "unaffected" | "u" => Ok(false),
        _                  => loc!(ParserError::ParseStatus(s.to_string())),
    }
}

/// Parse a `CHILD:PARENT` pair.
fn parse_link(s: &str) -> Result<LinkArg> {
    match s.split_once(':') {
        Some((child, parent)) if !child.trim().is_empty() && !parent.trim().is_empty() && !parent.contains(':') => {
            Ok(LinkArg { child: child.trim().to_string(), parent: parent.trim().to_string() })
        },
        _ => loc!(ParserError::ParseLink(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_cause(err: &anyhow::Error) -> Option<&ParserError> {
        err.root_cause().downcast_ref::<ParserError>()
    }

    #[test]
    fn individual_without_status() -> Result<()> {
        let ind = parse_individual("I1:M")?;
        assert_eq!(ind, IndividualArg { id: "I1".into(), sex: "M".into(), affected: false });
        Ok(())
    }

    #[test]
    fn individual_with_status() -> Result<()> {
        for (status, want) in [("affected", true), ("a", true), ("A", true), ("unaffected", false), ("u", false)] {
            let ind = parse_individual(&format!("proband:female:{status}"))?;
            assert_eq!(ind.affected, want);
            assert_eq!(ind.sex, "female");
        }
        Ok(())
    }

    #[test]
    fn invalid_individual() {
        for raw in ["I1", "I1:M:a:extra", ":M", "I1:", ""] {
            let err = parse_individual(raw).expect_err("Malformed individual should be rejected");
            assert_eq!(root_cause(&err), Some(&ParserError::ParseIndividual(raw.to_string())));
        }
    }

    #[test]
    fn invalid_status() {
        let err = parse_individual("I1:M:sick").expect_err("Unknown status should be rejected");
        assert_eq!(root_cause(&err), Some(&ParserError::ParseStatus("sick".into())));
    }

    #[test]
    fn link() -> Result<()> {
        assert_eq!(parse_link("I3:I1")?, LinkArg { child: "I3".into(), parent: "I1".into() });
        for raw in ["I3", "I3:", ":I1", "I3:I1:I2"] {
            let err = parse_link(raw).expect_err("Malformed link should be rejected");
            assert_eq!(root_cause(&err), Some(&ParserError::ParseLink(raw.to_string())));
        }
        Ok(())
    }

    #[test]
    fn cli_infer() -> Result<()> {
        let cli = Cli::try_parse_from([
            "pedigree-profiler", "-vv", "infer",
            "--individual", "I1:M", "I2:F", "I3:F:a",
            "--link", "I3:I1", "I3:I2",
        ])?;
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.verbosity(), 3);
        match cli.commands {
            Commands::Infer { individuals, links } => {
                assert_eq!(individuals.len(), 3);
                assert!(individuals[2].affected);
                assert_eq!(links[1], LinkArg { child: "I3".into(), parent: "I2".into() });
            },
            other => panic!("Expected the infer subcommand. Got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn cli_infer_requires_individuals() {
        assert!(Cli::try_parse_from(["pedigree-profiler", "infer"]).is_err());
        assert!(Cli::try_parse_from(["pedigree-profiler", "infer", "--individual", "I1"]).is_err());
    }

    #[test]
    fn cli_textbook() -> Result<()> {
        let cli = Cli::try_parse_from(["pedigree-profiler", "textbook", "--pedigree", "xld", "-q"])?;
        assert!(cli.quiet);
        assert_eq!(cli.verbosity(), 0);
        assert!(matches!(cli.commands, Commands::Textbook { pedigree: Some(TextbookPedigree::XLinkedDominant) }));

        let cli = Cli::try_parse_from(["pedigree-profiler", "textbook"])?;
        assert!(matches!(cli.commands, Commands::Textbook { pedigree: None }));
        assert!(Cli::try_parse_from(["pedigree-profiler", "textbook", "--pedigree", "mito"]).is_err());
        Ok(())
    }

    #[test]
    fn serialize() -> Result<()> {
        let cli = Cli::try_parse_from(["pedigree-profiler", "infer", "-i", "I1:M:u"])?;
        cli.serialize()
    }
}
