//! The in-memory family registry
//!
//! A registry is the full set of known people keyed by name, rebuilt from
//! disk on every invocation. Mutations append tags; entries are never
//! deleted and tags are never removed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::person::{self, Person};

/// Raised when an operation names a person with no registry entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} is not in the family tree.")]
    UnknownPerson(String),
}

/// The full set of known people, keyed by name.
///
/// Serializes as a single JSON object mapping each name to its person
/// record, with keys in sorted order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    people: BTreeMap<String, Person>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of people in the registry
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Whether `name` has an entry
    pub fn contains(&self, name: &str) -> bool {
        self.people.contains_key(name)
    }

    /// Look up a person by name
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    /// Insert a new person with no relations.
    ///
    /// Returns `true` if the person was inserted, `false` if the name was
    /// already present (the existing entry is left untouched).
    pub fn add_person(&mut self, name: &str) -> bool {
        if self.people.contains_key(name) {
            return false;
        }
        self.people.insert(name.to_string(), Person::new(name));
        true
    }

    /// Append a relation tag to an existing person.
    ///
    /// The tag is recorded verbatim; nothing checks its value or whether
    /// it duplicates an earlier tag.
    pub fn add_relation(&mut self, name: &str, relation: &str) -> Result<(), RegistryError> {
        match self.people.get_mut(name) {
            Some(p) => {
                p.relations.push(relation.to_string());
                Ok(())
            }
            None => Err(RegistryError::UnknownPerson(name.to_string())),
        }
    }

    /// Link two existing people: append `relationship` to `name1` and the
    /// fixed reverse tag to `name2`.
    ///
    /// Both people must already exist; the error names whichever is
    /// missing (`name1` checked first) and nothing is mutated.
    pub fn connect(
        &mut self,
        name1: &str,
        relationship: &str,
        name2: &str,
    ) -> Result<(), RegistryError> {
        if !self.people.contains_key(name1) {
            return Err(RegistryError::UnknownPerson(name1.to_string()));
        }
        if !self.people.contains_key(name2) {
            return Err(RegistryError::UnknownPerson(name2.to_string()));
        }

        if let Some(p) = self.people.get_mut(name1) {
            p.relations.push(relationship.to_string());
        }
        if let Some(p) = self.people.get_mut(name2) {
            p.relations.push(person::reverse_tag(relationship).to_string());
        }

        Ok(())
    }

    /// Count exact matches of `tag` in a person's relation list.
    ///
    /// Unlike the father lookup, an unknown name here is an error rather
    /// than a zero.
    pub fn count_relation(&self, name: &str, tag: &str) -> Result<usize, RegistryError> {
        self.people
            .get(name)
            .map(|p| p.count_tag(tag))
            .ok_or_else(|| RegistryError::UnknownPerson(name.to_string()))
    }

    /// Find the father of `name`, if one can be resolved.
    ///
    /// The lookup only arms when the queried person carries a `father`
    /// tag. It then scans for an entry stored under a different key whose
    /// `name` field equals the queried person's own name. Since every
    /// entry created through [`add_person`](Self::add_person) is keyed by
    /// its own `name` field, the scan matches only entries whose key and
    /// name disagree; on normally-built data it finds nothing and the
    /// caller reports that the father is not in the tree.
    pub fn find_father(&self, name: &str) -> Option<&str> {
        let queried = self.people.get(name)?;
        if !queried.has_tag(person::FATHER) {
            return None;
        }

        self.people
            .iter()
            .find(|(key, candidate)| key.as_str() != name && candidate.name == queried.name)
            .map(|(key, _)| key.as_str())
    }
}
