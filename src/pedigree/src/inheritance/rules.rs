//! Necessary-condition checks, one per mode of inheritance.
//!
//! Each predicate answers a single question: does this trio contradict the mode? A parent that is not
//! known never contradicts anything, and neither does an ambiguous case: only an explicit contradiction
//! excludes a mode.

use crate::{Individual, Sex};

use super::Trio;

/// An affected child requires at least one affected parent.
pub(crate) fn dominant_violated(trio: &Trio) -> bool {
    trio.child().is_affected() && parents_unaffected(trio)
}

/// An affected child with one affected and one unaffected parent needs the unaffected parent to be a carrier.
/// Only a parent that is demonstrably not a carrier excludes the mode: indeterminable carrier status does not.
pub(crate) fn autosomal_recessive_violated(trio: &Trio) -> bool {
    let (Some(mother), Some(father)) = (trio.mother(), trio.father()) else {
        return false
    };
    if !trio.child().is_affected() || mother.is_affected() == father.is_affected() {
        return false
    }
    let unaffected = if mother.is_affected() { father } else { mother };
    trio.carrier_status(unaffected) == Some(false)
}

/// Dominant transmission, and an affected father passes his single X to all of his daughters.
pub(crate) fn x_linked_dominant_violated(trio: &Trio) -> bool {
    dominant_violated(trio) || unaffected_daughter_of_affected_father(trio)
}

/// An affected daughter needs a recessive X from each parent: with an unaffected father, the mother must
/// be affected. An affected son gets his only X from his mother, who must be affected or a carrier.
pub(crate) fn x_linked_recessive_violated(trio: &Trio) -> bool {
    affected_daughter_of_unaffected_parents(trio) || affected_son_of_non_carrier_mother(trio)
}

fn parents_unaffected(trio: &Trio) -> bool {
    match (trio.mother(), trio.father()) {
        (Some(mother), Some(father)) => !mother.is_affected() && !father.is_affected(),
        _                            => false,
    }
}

fn affected_daughter_of_unaffected_parents(trio: &Trio) -> bool {
    let child = trio.child();
    child.sex() == Sex::Female && child.is_affected() && parents_unaffected(trio)
}

/// Only a mother that is demonstrably not a carrier counts: an unknown mother, or an indeterminable
/// carrier status, does not.
fn affected_son_of_non_carrier_mother(trio: &Trio) -> bool {
    let child = trio.child();
    if child.sex() != Sex::Male || !child.is_affected() {
        return false
    }
    trio.mother().is_some_and(|mother| !mother.is_affected() && trio.carrier_status(mother) == Some(false))
}

fn unaffected_daughter_of_affected_father(trio: &Trio) -> bool {
    let child = trio.child();
    child.sex() == Sex::Female && !child.is_affected() && trio.father().is_some_and(Individual::is_affected)
}
