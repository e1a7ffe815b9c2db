use std::{
    cmp::{Ord, Ordering, PartialOrd},
    hash::{Hash, Hasher},
};

use located_error::prelude::*;
use log::{trace, warn};

use crate::Sex;

mod parents;
pub use parents::{Parents, Relation};

mod error;
pub use error::IndividualError;

/// Space padding lengths used for `std::fmt::Display` of Individual
const ID_DISPLAY_LEN     : usize = 6;  // Space padding of `self.id`
const SEX_DISPLAY_LEN    : usize = 6;  // Space padding of `self.sex`
const STATUS_DISPLAY_LEN : usize = 10; // Space padding of the affected status
const PARENTS_DISPLAY_LEN: usize = 16; // Space padding of `self.parents`

/// Pedigree Individual.
/// # Fields:
/// - `id`      : Unique, user-defined identifier of the individual (e.g. 'I1', 'proband', 'mother')
/// - `sex`     : Biological sex. Fixed at construction, and used to decide which parent slot this
///               individual fills when linked to a child.
/// - `affected`: Whether the individual expresses the trait under study.
/// - `parents` : Identifiers of the known mother and father. Either may be missing.
/// - `children`: Identifiers of this individual's children, in linking order.
///
/// Relationship fields only hold identifiers: the owning [`crate::Pedigree`] resolves them.
#[derive(Debug, Clone)]
pub struct Individual {
    id      : String,
    sex     : Sex,
    affected: bool,
    parents : Parents,
    children: Vec<String>,
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = if self.affected { "affected" } else { "unaffected" };
        write!(f, "id: {: <ID_DISPLAY_LEN$} sex: {: <SEX_DISPLAY_LEN$} status: {: <STATUS_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$}",
            self.id, self.sex, status, self.parents
        )
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Individual) -> bool {
        self.id == other.id
    }
}

impl Eq for Individual {}

impl Hash for Individual {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::borrow::Borrow<str> for Individual {
    fn borrow(&self) -> &str {
        &self.id
    }
}

impl Ord for Individual {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.id).cmp(&(other.id))
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Individual {
    /// Instantiate a new, unaffected individual without any known relative.
    /// # Arguments
    /// - `id` : User-defined identifier of the individual (e.g. "I1", "mother", "proband", etc.)
    /// - `sex`: Biological sex of the individual.
    ///
    /// # Errors
    /// - if `id` is empty or only made of whitespace.
    pub fn new(id: &str, sex: Sex) -> Result<Individual> {
        if id.trim().is_empty() {
            return loc!(IndividualError::MissingIdentifier)
        }
        Ok(Individual { id: id.to_string(), sex, affected: false, parents: Parents::default(), children: Vec::new() })
    }

    /// Consume and return this individual with its affected status set to `affected`.
    #[must_use]
    pub fn with_status(mut self, affected: bool) -> Individual {
        self.affected = affected;
        self
    }

    pub fn set_affected(&mut self, affected: bool) {
        self.affected = affected;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn is_affected(&self) -> bool {
        self.affected
    }

    pub fn parents(&self) -> &Parents {
        &self.parents
    }

    pub fn mother(&self) -> Option<&str> {
        self.parents.mother()
    }

    pub fn father(&self) -> Option<&str> {
        self.parents.father()
    }

    /// Identifiers of this individual's children, in the order they were linked.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Check whether or not this individual is a founder. Returns `true` if neither parent is known.
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_empty()
    }

    #[inline(always)]
    pub fn has_known_parent(&self) -> bool {
        !self.is_founder()
    }

    /// Link `parent` to this individual, on both sides: the parent gains `self` as a child, and the
    /// mother or father slot of `self` (selected by the parent's sex) now points to `parent`.
    ///
    /// Re-linking an already filled slot replaces the previous parent, which is then returned.
    /// Note that the displaced parent cannot be reached from here and still lists `self` as a child:
    /// use [`crate::Pedigree::set_relationship`] to relink members while keeping both sides consistent.
    ///
    /// # Errors
    /// - if `parent` and `self` share the same identifier.
    pub fn add_parent(&mut self, parent: &mut Individual) -> Result<Option<String>> {
        if parent.id == self.id {
            return Err(IndividualError::SelfParentage(self.id.clone()))
                .with_loc(|| IndividualError::InvalidRelationship{child: self.id.clone(), parent: parent.id.clone()})
        }
        let relation  = parent.sex.parent_relation();
        let displaced = self.assign_parent(relation, &parent.id);
        parent.push_child(&self.id);
        Ok(displaced)
    }

    /// Fill one of the parent slots of `self`. Returns the displaced parent identifier, if any.
    pub(crate) fn assign_parent(&mut self, relation: Relation, parent_id: &str) -> Option<String> {
        let displaced = self.parents.set(relation, parent_id)
            .filter(|previous| previous != parent_id);
        match &displaced {
            Some(previous) => warn!("Overwriting the {relation} of {}: {previous} is replaced by {parent_id}", self.id),
            None           => trace!("{} now has {parent_id} as its {relation}", self.id),
        }
        displaced
    }

    /// Register `child_id` as a child of `self`. Linking the same child twice is a no-op.
    pub(crate) fn push_child(&mut self, child_id: &str) {
        if !self.children.iter().any(|child| child == child_id) {
            self.children.push(child_id.to_string());
        }
    }

    /// Forget `child_id` as a child of `self`. Returns `true` if it was listed.
    pub(crate) fn remove_child(&mut self, child_id: &str) -> bool {
        let len = self.children.len();
        self.children.retain(|child| child != child_id);
        len != self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common;

    #[test]
    fn new_defaults() -> Result<()> {
        let ind = Individual::new("I1", Sex::Female)?;
        assert_eq!(ind.id(), "I1");
        assert_eq!(ind.sex(), Sex::Female);
        assert!(!ind.is_affected());
        assert!(ind.is_founder());
        assert!(ind.children().is_empty());
        Ok(())
    }

    #[test]
    fn new_missing_identifier() {
        for id in ["", "   ", "\t"] {
            let err = Individual::new(id, Sex::Male).expect_err("Blank identifiers should be rejected");
            assert_eq!(err.root_cause().downcast_ref::<IndividualError>(), Some(&IndividualError::MissingIdentifier));
        }
    }

    #[test]
    fn status_setters() {
        let mut ind = common::mock_individual("I1", Sex::Male, true);
        assert!(ind.is_affected());
        ind.set_affected(false);
        assert!(!ind.is_affected());
    }

    #[test]
    fn add_parent_fills_slot_by_parent_sex() -> Result<()> {
        let mut child  = common::mock_individual("child", Sex::Female, false);
        let mut father = common::mock_individual("father", Sex::Male, false);
        let mut mother = common::mock_individual("mother", Sex::Female, true);

        assert_eq!(child.add_parent(&mut father)?, None);
        assert_eq!(child.add_parent(&mut mother)?, None);

        assert_eq!(child.father(), Some("father"));
        assert_eq!(child.mother(), Some("mother"));
        assert_eq!(father.children(), ["child"]);
        assert_eq!(mother.children(), ["child"]);
        assert!(child.has_known_parent());
        assert!(child.parents().is_complete());
        Ok(())
    }

    #[test]
    fn add_parent_twice_is_idempotent() -> Result<()> {
        let mut child  = common::mock_individual("child", Sex::Male, false);
        let mut mother = common::mock_individual("mother", Sex::Female, false);
        child.add_parent(&mut mother)?;
        assert_eq!(child.add_parent(&mut mother)?, None);
        assert_eq!(mother.children(), ["child"]);
        Ok(())
    }

    #[test]
    fn add_parent_last_write_wins() -> Result<()> {
        let mut child    = common::mock_individual("child", Sex::Male, false);
        let mut father_1 = common::mock_individual("father-1", Sex::Male, false);
        let mut father_2 = common::mock_individual("father-2", Sex::Male, true);

        child.add_parent(&mut father_1)?;
        let displaced = child.add_parent(&mut father_2)?;

        assert_eq!(displaced.as_deref(), Some("father-1"));
        assert_eq!(child.father(), Some("father-2"));
        assert_eq!(father_2.children(), ["child"]);
        // The displaced parent is out of reach and keeps a stale child entry.
        assert_eq!(father_1.children(), ["child"]);
        Ok(())
    }

    #[test]
    fn add_parent_self_parentage() {
        let mut ind  = common::mock_individual("I1", Sex::Female, false);
        let mut twin = ind.clone();
        let err = ind.add_parent(&mut twin).expect_err("Self parentage should be rejected");
        assert_eq!(err.root_cause().downcast_ref::<IndividualError>(), Some(&IndividualError::SelfParentage("I1".into())));
        assert!(ind.is_founder());
        assert!(twin.children().is_empty());
    }

    #[test]
    fn remove_child() {
        let mut parent = common::mock_individual("parent", Sex::Female, false);
        parent.push_child("a");
        parent.push_child("b");
        assert!(parent.remove_child("a"));
        assert!(!parent.remove_child("a"));
        assert_eq!(parent.children(), ["b"]);
    }

    #[test]
    fn ind_equality() {
        let ind1 = common::mock_individual("parent", Sex::Male, false);
        let ind2 = common::mock_individual("parent", Sex::Female, true);
        assert_eq!(ind1, ind2)
    }

    #[test]
    fn ind_inequality() {
        let ind1 = common::mock_individual("ind1", Sex::Male, false);
        let ind2 = common::mock_individual("ind2", Sex::Male, false);
        assert_ne!(ind1, ind2)
    }

    #[test]
    fn hashable() {
        let mut ind_set = std::collections::HashSet::new();
        let n_iters: u32 = 1_000;
        for i in 0..n_iters {
            let new_ind = common::mock_individual(&i.to_string(), Sex::Female, false);
            assert!(ind_set.insert(new_ind.clone()));
            assert!(ind_set.contains(&new_ind));
            assert!(ind_set.contains(i.to_string().as_str()));
        }
    }

    #[test]
    fn ordering() {
        let ind_a = common::mock_individual("A", Sex::Male, false);
        let ind_b = common::mock_individual("B", Sex::Male, false);
        assert!(ind_a <  ind_b);
        assert!(ind_b <= ind_b);
        assert!(ind_b >= ind_a);
        assert!(ind_b >  ind_a);

        // Sex and status should not impact ordering. What matters is the ID.
        let ind_a_prime = ind_a.clone().with_status(true);
        assert!(ind_a <= ind_a_prime);
        assert!(ind_a >= ind_a_prime);
    }

    #[test]
    fn display() -> Result<()> {
        let (child_id, father_id, mother_id) = ("ind1", "ind2", "ind3");
        let mut child  = common::mock_individual(child_id, Sex::Female, true);
        let mut father = common::mock_individual(father_id, Sex::Male, false);
        let mut mother = common::mock_individual(mother_id, Sex::Female, false);
        child.add_parent(&mut father)?;
        child.add_parent(&mut mother)?;

        let display = format!("{child}");
        assert!(display.contains(child_id));
        assert!(display.contains("female"));
        assert!(display.contains("affected"));
        assert!(display.contains(&format!("{mother_id} <-> {father_id}")));
        Ok(())
    }
}
