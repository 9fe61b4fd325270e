//! Person records and relation tags
//!
//! A person is a name plus the ordered list of kinship tags recorded
//! against it. Tags are free-form strings; only the conventional ones
//! below carry meaning for the query commands.

use serde::{Deserialize, Serialize};

/// Tag counted by `countsons`.
pub const SON: &str = "son";
/// Tag counted by `countdaughters`.
pub const DAUGHTER: &str = "daughter";
/// Tag counted by `countwives`.
pub const WIFE: &str = "wife";
/// Tag that arms the `father of` lookup.
pub const FATHER: &str = "father";
/// Tag recorded on the second party of every `connect`.
pub const PARENT: &str = "parent";

/// One individual in the family tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name, identical to the registry key under normal operation
    pub name: String,
    /// Outgoing relation tags in insertion order; duplicates are allowed
    pub relations: Vec<String>,
}

impl Person {
    /// Create a person with no recorded relations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: Vec::new(),
        }
    }

    /// Number of relation tags exactly equal to `tag`
    pub fn count_tag(&self, tag: &str) -> usize {
        self.relations.iter().filter(|r| r.as_str() == tag).count()
    }

    /// Whether any relation tag exactly equals `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.relations.iter().any(|r| r == tag)
    }
}

/// Reverse tag recorded on the second party of a `connect`.
///
/// The policy is a fixed table: every forward relation maps to the literal
/// `parent` tag, never a computed inverse. `connect Bob as son of Alice`
/// leaves Alice tagged `parent`, not `father` or `mother`.
pub fn reverse_tag(_relation: &str) -> &'static str {
    PARENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_has_no_relations() {
        let person = Person::new("Alice");
        assert_eq!(person.name, "Alice");
        assert!(person.relations.is_empty());
    }

    #[test]
    fn test_count_tag_counts_duplicates() {
        let mut person = Person::new("Alice");
        person.relations.push(SON.to_string());
        person.relations.push(WIFE.to_string());
        person.relations.push(SON.to_string());

        assert_eq!(person.count_tag(SON), 2);
        assert_eq!(person.count_tag(WIFE), 1);
        assert_eq!(person.count_tag(DAUGHTER), 0);
    }

    #[test]
    fn test_count_tag_is_exact_match() {
        let mut person = Person::new("Alice");
        person.relations.push("sons".to_string());
        person.relations.push("Son".to_string());

        assert_eq!(person.count_tag(SON), 0);
    }

    #[test]
    fn test_has_tag() {
        let mut person = Person::new("Bob");
        assert!(!person.has_tag(FATHER));

        person.relations.push(FATHER.to_string());
        assert!(person.has_tag(FATHER));
    }

    #[test]
    fn test_reverse_tag_is_always_parent() {
        assert_eq!(reverse_tag(SON), PARENT);
        assert_eq!(reverse_tag(DAUGHTER), PARENT);
        assert_eq!(reverse_tag(WIFE), PARENT);
        assert_eq!(reverse_tag("second cousin"), PARENT);
    }
}
