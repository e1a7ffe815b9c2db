use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use located_error::prelude::*;
use log::{debug, trace};

use crate::{Individual, IndividualError, Relation, Sex};

mod error;
pub use error::PedigreeError;

/// A family pedigree.
/// # Fields:
/// - `individuals`: IndexMap containing all members of the pedigree (founders and offspring), in insertion order.
///                  - Key  : (String)     - Identifier of the individual
///                  - Value: (Individual) - The individual. Its relatives are stored as identifiers, resolved
///                                          through this map.
///
/// The pedigree is the sole owner of its members. Every analysis method takes `&self`, never mutates any
/// member, and returns the same answer when called repeatedly on an unmodified pedigree.
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    individuals: IndexMap<String, Individual>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    New,
    Visiting,
    Done,
}

impl Pedigree {
    /// Instantiate a blank pedigree.
    pub fn new() -> Pedigree {
        Pedigree { individuals: IndexMap::new() }
    }

    /// Assemble a pedigree from a finalized list of individuals, keeping their order.
    /// Relationship links are taken as-is: they are only checked by [`Pedigree::validate`].
    ///
    /// # Errors
    /// - if two individuals share the same identifier.
    pub fn from_individuals<I>(individuals: I) -> Result<Pedigree>
    where
        I: IntoIterator<Item = Individual>,
    {
        let mut pedigree = Pedigree::new();
        for individual in individuals {
            pedigree.add_individual(individual).loc("While assembling a pedigree")?;
        }
        debug!("Assembled a pedigree of {} individuals", pedigree.len());
        Ok(pedigree)
    }

    /// Include a new individual within this pedigree.
    ///
    /// # Errors
    /// - returns `PedigreeError::DuplicateIndividual` if an individual with the same identifier is already a member.
    pub fn add_individual(&mut self, individual: Individual) -> Result<()> {
        if self.individuals.contains_key(individual.id()) {
            return loc!(PedigreeError::DuplicateIndividual(individual.id().to_string()))
        }
        self.individuals.insert(individual.id().to_string(), individual);
        Ok(())
    }

    /// Link two members of this pedigree. The mother or father slot of `child` is selected by the sex of
    /// `parent`. When that slot was already filled, the previous parent loses `child` from its children,
    /// and its identifier is returned (last write wins).
    ///
    /// # Errors
    /// - returns `PedigreeError::MissingIndividual` if `child` or `parent` cannot be found within `self.individuals`
    /// - returns `IndividualError::SelfParentage` if `child` and `parent` are the same individual.
    pub fn set_relationship(&mut self, child: &str, parent: &str) -> Result<Option<String>> {
        use PedigreeError::{FailedRelationship, MissingIndividual};
        let context = || FailedRelationship { child: child.to_string(), parent: parent.to_string() };

        if child == parent {
            return Err(IndividualError::SelfParentage(child.to_string())).with_loc(context)
        }

        let relation = self.individuals.get(parent)
            .map(|parent| parent.sex().parent_relation())
            .ok_or_else(|| MissingIndividual(parent.to_string()))
            .with_loc(context)?;

        let displaced = self.individuals.get_mut(child)
            .ok_or_else(|| MissingIndividual(child.to_string()))
            .with_loc(context)?
            .assign_parent(relation, parent);

        // ---- Keep the displaced parent consistent with its former child.
        if let Some(previous) = displaced.as_deref().and_then(|id| self.individuals.get_mut(id)) {
            previous.remove_child(child);
        }

        if let Some(parent) = self.individuals.get_mut(parent) {
            parent.push_child(child);
        }
        Ok(displaced)
    }

    /// Return a reference to the member carrying identifier `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Iterate over all members, in insertion order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Members expressing the trait, in insertion order.
    pub fn find_affected(&self) -> Vec<&Individual> {
        self.individuals().filter(|ind| ind.is_affected()).collect()
    }

    /// Members not expressing the trait, in insertion order.
    pub fn find_unaffected(&self) -> Vec<&Individual> {
        self.individuals().filter(|ind| !ind.is_affected()).collect()
    }

    /// Check the structural integrity of this pedigree. Checks are run in the following order, and the
    /// first failure is returned:
    /// 1. every mother, father and child identifier points to a member (`PedigreeError::DanglingReference`)
    /// 2. mothers are female and fathers are male (`PedigreeError::ParentSexMismatch`)
    /// 3. parent and child links are mutual (`PedigreeError::InconsistentLink`)
    /// 4. no individual is its own ancestor (`PedigreeError::CyclicLineage`)
    pub fn validate(&self) -> Result<()> {
        self.check_references()
            .and_then(|()| self.check_parent_sexes())
            .and_then(|()| self.check_mutual_links())
            .and_then(|()| self.check_acyclic())
            .with_loc(|| PedigreeError::InvalidStructure)?;
        trace!("Pedigree of {} individuals passed structural validation", self.len());
        Ok(())
    }

    /// Ancestors of `id`: depth-first, mother line before father line. Each ancestor is listed once, even
    /// when it can be reached through several lines of descent.
    ///
    /// # Errors
    /// - if the pedigree fails validation, or `id` is not a member.
    pub fn ancestors(&self, id: &str) -> Result<Vec<&Individual>> {
        self.validate()?;
        let individual = self.member(id)?;
        let mut ancestors = IndexSet::new();
        self.collect_ancestors(individual, &mut ancestors);
        Ok(ancestors.into_iter().collect())
    }

    /// Generation depth of `id`: 0 for a founder, otherwise one more than its deepest known parent.
    ///
    /// # Errors
    /// - if the pedigree fails validation, or `id` is not a member.
    pub fn generation(&self, id: &str) -> Result<usize> {
        self.validate()?;
        let individual = self.member(id)?;
        Ok(self.generation_of(individual, &mut HashMap::new()))
    }

    /// Generation depth of every member, in insertion order.
    ///
    /// # Errors
    /// - if the pedigree fails validation.
    pub fn generations(&self) -> Result<Vec<(&Individual, usize)>> {
        self.validate()?;
        let mut memo = HashMap::new();
        Ok(self.individuals().map(|ind| (ind, self.generation_of(ind, &mut memo))).collect())
    }

    /// Members sharing at least one known parent with `id` (half-siblings included), in insertion order.
    ///
    /// # Errors
    /// - if the pedigree fails validation, or `id` is not a member.
    pub fn siblings(&self, id: &str) -> Result<Vec<&Individual>> {
        self.validate()?;
        let individual = self.member(id)?;
        Ok(self.siblings_of(individual).collect())
    }

    /// Qualitative evidence that `id` carries a recessive allele without expressing the trait.
    /// - `Some(true)` : plausible carrier. The individual is unaffected and either has an affected child whose
    ///                  other parent is known and unaffected, has an affected parent, or has both parents known
    ///                  and unaffected along with an affected sibling.
    /// - `Some(false)`: not a carrier on the available evidence. Affected individuals always land here.
    /// - `None`       : indeterminable, because a parent is unknown or the individual has no children.
    ///
    /// # Errors
    /// - if the pedigree fails validation, or `id` is not a member.
    pub fn carrier_status(&self, id: &str) -> Result<Option<bool>> {
        self.validate()?;
        let individual = self.member(id)?;
        Ok(self.carrier_evidence(individual))
    }

    /// Carrier evidence of every member, in insertion order. See [`Pedigree::carrier_status`].
    ///
    /// # Errors
    /// - if the pedigree fails validation.
    pub fn carrier_statuses(&self) -> Result<Vec<(&Individual, Option<bool>)>> {
        self.validate()?;
        Ok(self.individuals().map(|ind| (ind, self.carrier_evidence(ind))).collect())
    }

    pub(crate) fn carrier_evidence(&self, ind: &Individual) -> Option<bool> {
        if ind.is_affected() {
            return Some(false)
        }

        let affected_child_of_unaffected_mate = self.children_of(ind)
            .any(|child| child.is_affected() && self.mate_of(child, ind).is_some_and(|mate| !mate.is_affected()));
        let affected_parent = self.parents_of(ind).any(Individual::is_affected);
        let affected_sibling = self.parents_are_unaffected(ind) && self.siblings_of(ind).any(Individual::is_affected);

        if affected_child_of_unaffected_mate || affected_parent || affected_sibling {
            return Some(true)
        }

        if !ind.parents().is_complete() || ind.children().is_empty() {
            return None
        }
        Some(false)
    }

    pub(crate) fn mother_of(&self, ind: &Individual) -> Option<&Individual> {
        ind.mother().and_then(|id| self.individuals.get(id))
    }

    pub(crate) fn father_of(&self, ind: &Individual) -> Option<&Individual> {
        ind.father().and_then(|id| self.individuals.get(id))
    }

    fn parents_of<'a>(&'a self, ind: &'a Individual) -> impl Iterator<Item = &'a Individual> + 'a {
        ind.parents().iter().filter_map(|(_, id)| self.individuals.get(id))
    }

    fn children_of<'a>(&'a self, ind: &'a Individual) -> impl Iterator<Item = &'a Individual> + 'a {
        ind.children().iter().filter_map(|id| self.individuals.get(id))
    }

    fn siblings_of<'a>(&'a self, ind: &'a Individual) -> impl Iterator<Item = &'a Individual> + 'a {
        self.individuals().filter(move |other| {
            other.id() != ind.id()
                && ind.parents().iter().any(|(relation, id)| other.parents().get(relation) == Some(id))
        })
    }

    /// The other known parent of `child`, when `parent` is one of its parents.
    fn mate_of(&self, child: &Individual, parent: &Individual) -> Option<&Individual> {
        match parent.sex() {
            Sex::Male   => self.mother_of(child),
            Sex::Female => self.father_of(child),
        }
    }

    fn parents_are_unaffected(&self, ind: &Individual) -> bool {
        match (self.mother_of(ind), self.father_of(ind)) {
            (Some(mother), Some(father)) => !mother.is_affected() && !father.is_affected(),
            _                            => false,
        }
    }

    fn member(&self, id: &str) -> Result<&Individual> {
        self.individuals.get(id)
            .ok_or_else(|| PedigreeError::MissingIndividual(id.to_string()))
            .loc("While looking up a pedigree member")
    }

    fn collect_ancestors<'a>(&'a self, ind: &'a Individual, ancestors: &mut IndexSet<&'a Individual>) {
        for parent in self.parents_of(ind) {
            if ancestors.insert(parent) {
                self.collect_ancestors(parent, ancestors);
            }
        }
    }

    fn generation_of<'a>(&'a self, ind: &'a Individual, memo: &mut HashMap<&'a str, usize>) -> usize {
        if let Some(generation) = memo.get(ind.id()) {
            return *generation
        }
        let generation = self.parents_of(ind)
            .map(|parent| self.generation_of(parent, memo) + 1)
            .max()
            .unwrap_or(0);
        memo.insert(ind.id(), generation);
        generation
    }

    fn check_references(&self) -> std::result::Result<(), PedigreeError> {
        for ind in self.individuals() {
            let children = ind.children().iter().map(|id| (Relation::Child, id.as_str()));
            for (relation, target) in ind.parents().iter().chain(children) {
                if !self.individuals.contains_key(target) {
                    return Err(PedigreeError::DanglingReference {
                        individual: ind.id().to_string(), relation, target: target.to_string()
                    })
                }
            }
        }
        Ok(())
    }

    fn check_parent_sexes(&self) -> std::result::Result<(), PedigreeError> {
        for ind in self.individuals() {
            for (relation, parent) in ind.parents().iter() {
                if self.individuals.get(parent).is_some_and(|parent| parent.sex().parent_relation() != relation) {
                    return Err(PedigreeError::ParentSexMismatch {
                        individual: ind.id().to_string(), parent: parent.to_string(), relation
                    })
                }
            }
        }
        Ok(())
    }

    fn check_mutual_links(&self) -> std::result::Result<(), PedigreeError> {
        let inconsistent = |parent: &str, child: &str| PedigreeError::InconsistentLink {
            parent: parent.to_string(), child: child.to_string()
        };
        for ind in self.individuals() {
            // ---- Each known parent should list `ind` among its children.
            for parent in self.parents_of(ind) {
                if !parent.children().iter().any(|child| child == ind.id()) {
                    return Err(inconsistent(parent.id(), ind.id()))
                }
            }
            // ---- Each child should point back to `ind` in the slot matching its sex.
            let relation = ind.sex().parent_relation();
            for child in self.children_of(ind) {
                if child.parents().get(relation) != Some(ind.id()) {
                    return Err(inconsistent(ind.id(), child.id()))
                }
            }
        }
        Ok(())
    }

    fn check_acyclic(&self) -> std::result::Result<(), PedigreeError> {
        let mut marks = vec![Mark::New; self.len()];
        for idx in 0..self.len() {
            if marks[idx] == Mark::New {
                self.visit_lineage(idx, &mut marks)?;
            }
        }
        Ok(())
    }

    /// Depth-first walk through the parents of the member at `idx`. Reaching a member which is still being
    /// visited means it is its own ancestor.
    fn visit_lineage(&self, idx: usize, marks: &mut [Mark]) -> std::result::Result<(), PedigreeError> {
        let Some((_, ind)) = self.individuals.get_index(idx) else {
            return Ok(())
        };
        marks[idx] = Mark::Visiting;
        for (_, parent) in ind.parents().iter() {
            let Some(parent_idx) = self.individuals.get_index_of(parent) else {
                continue
            };
            match marks[parent_idx] {
                Mark::Visiting => return Err(PedigreeError::CyclicLineage(parent.to_string())),
                Mark::New      => self.visit_lineage(parent_idx, marks)?,
                Mark::Done     => {},
            }
        }
        marks[idx] = Mark::Done;
        Ok(())
    }
}
