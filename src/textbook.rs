//! The four classical textbook pedigrees, one per mode of inheritance.
//!
//! Each is twelve members long (`I1`..`I12`). Members are created first, linked to their parents at
//! the record level, and only then handed over to a [`Pedigree`].

use pedigree::{Individual, IndividualError, Pedigree, PedigreeError, Sex};
use parser::TextbookPedigree;
use located_error::prelude::*;

/// `(id, sex, affected)`
type Member<'a> = (&'a str, Sex, bool);

/// `(child, parent)`
type Link<'a> = (&'a str, &'a str);

/// Build the requested textbook pedigree.
///
/// # Errors
/// - if any of the records cannot be created or linked.
pub fn build(which: TextbookPedigree) -> Result<Pedigree> {
    match which {
        TextbookPedigree::AutosomalRecessive => autosomal_recessive(),
        TextbookPedigree::XLinkedDominant    => x_linked_dominant(),
        TextbookPedigree::AutosomalDominant  => autosomal_dominant(),
        TextbookPedigree::XLinkedRecessive   => x_linked_recessive(),
    }
}

/// Two unaffected carriers (I3 x I4, themselves siblings) with an affected daughter.
pub fn autosomal_recessive() -> Result<Pedigree> {
    use Sex::{Female as F, Male as M};
    assemble(
        &[
            ("I1", M, false), ("I2", F, false), ("I3", F, false), ("I4", M, false),
            ("I5", F, true),  ("I6", M, false), ("I7", F, false), ("I8", M, true),
            ("I9", F, false), ("I10", M, false), ("I11", F, true), ("I12", M, false),
        ],
        &[
            ("I3", "I1"), ("I3", "I2"), ("I4", "I1"), ("I4", "I2"),
            ("I5", "I3"), ("I5", "I4"), ("I6", "I3"), ("I6", "I4"), ("I7", "I3"), ("I7", "I4"),
            ("I8", "I5"), ("I9", "I5"), ("I10", "I5"), ("I11", "I6"), ("I12", "I7"),
        ],
    )
}

/// An affected grandmother, transmitting through affected mothers.
pub fn x_linked_dominant() -> Result<Pedigree> {
    use Sex::{Female as F, Male as M};
    assemble(
        &[
            ("I1", M, false), ("I2", F, true),  ("I3", F, false), ("I4", M, false),
            ("I5", F, true),  ("I6", M, false), ("I7", F, true),  ("I8", F, false),
            ("I9", M, false), ("I10", F, true), ("I11", M, false), ("I12", F, true),
        ],
        &[
            ("I3", "I1"), ("I3", "I2"), ("I4", "I1"), ("I4", "I2"), ("I5", "I2"),
            ("I6", "I3"), ("I7", "I3"), ("I8", "I4"), ("I9", "I4"),
            ("I10", "I5"), ("I11", "I6"), ("I12", "I7"),
        ],
    )
}

/// An affected founder, with the trait expressed in every generation.
pub fn autosomal_dominant() -> Result<Pedigree> {
    use Sex::{Female as F, Male as M};
    assemble(
        &[
            ("I1", M, true),  ("I2", F, false), ("I3", F, true),  ("I4", M, false),
            ("I5", M, true),  ("I6", F, false), ("I7", M, true),  ("I8", F, false),
            ("I9", M, true),  ("I10", F, false), ("I11", M, true), ("I12", F, false),
        ],
        &[
            ("I3", "I1"), ("I3", "I2"), ("I4", "I1"), ("I4", "I2"),
            ("I5", "I3"), ("I6", "I4"), ("I7", "I3"), ("I8", "I4"),
            ("I9", "I5"), ("I10", "I6"), ("I11", "I7"), ("I12", "I8"),
        ],
    )
}

/// An affected grandfather, with affected grandsons through unaffected daughters.
pub fn x_linked_recessive() -> Result<Pedigree> {
    use Sex::{Female as F, Male as M};
    assemble(
        &[
            ("I1", F, false), ("I2", M, true),  ("I3", M, false), ("I4", F, false),
            ("I5", M, true),  ("I6", F, false), ("I7", M, false), ("I8", F, false),
            ("I9", M, true),  ("I10", F, false), ("I11", M, false), ("I12", F, false),
        ],
        &[
            ("I3", "I1"), ("I3", "I2"), ("I4", "I1"), ("I4", "I2"), ("I5", "I4"),
            ("I6", "I3"), ("I7", "I3"), ("I8", "I4"), ("I9", "I6"),
            ("I10", "I7"), ("I11", "I8"), ("I12", "I8"),
        ],
    )
}

fn assemble(members: &[Member], links: &[Link]) -> Result<Pedigree> {
    let mut individuals = members.iter()
        .map(|(id, sex, affected)| Individual::new(id, *sex).map(|ind| ind.with_status(*affected)))
        .collect::<Result<Vec<Individual>>>()?;

    for (child, parent) in links {
        link(&mut individuals, child, parent)
            .with_loc(|| PedigreeError::FailedRelationship{child: child.to_string(), parent: parent.to_string()})?;
    }
    Pedigree::from_individuals(individuals)
}

/// Link two records of `individuals`, on both sides.
pub(crate) fn link(individuals: &mut [Individual], child: &str, parent: &str) -> Result<Option<String>> {
    let position = |id: &str| individuals.iter()
        .position(|ind| ind.id() == id)
        .ok_or_else(|| PedigreeError::MissingIndividual(id.to_string()))
        .loc("While looking up a record to link");

    let (c, p) = (position(child)?, position(parent)?);
    let (child, parent) = match c.cmp(&p) {
        std::cmp::Ordering::Less => {
            let (head, tail) = individuals.split_at_mut(p);
            (&mut head[c], &mut tail[0])
        },
        std::cmp::Ordering::Greater => {
            let (head, tail) = individuals.split_at_mut(c);
            (&mut tail[0], &mut head[p])
        },
        std::cmp::Ordering::Equal => return loc!(IndividualError::SelfParentage(child.to_string())),
    };
    child.add_parent(parent)
}
