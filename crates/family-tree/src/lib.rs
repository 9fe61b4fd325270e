//! family-tree - record people and kinship relations in a flat file
//!
//! The tree is a single JSON document mapping each person's name to the
//! relation tags recorded against them. Every command loads the whole
//! file, applies one operation, and writes the whole file back if it
//! mutated anything.
//!
//! Commands:
//! - add person <NAME>: Add a person to the family tree
//! - add relationship <NAME> <RELATION>: Tag a person with a relation
//! - connect <NAME1> as <RELATIONSHIP> of <NAME2>: Link two people
//! - countsons / countdaughters / countwives <NAME>: Count matching tags
//! - father of <NAME>: Find the father of an individual
//! - help: Show available commands

pub mod person;
pub mod registry;
pub mod store;

pub use person::Person;
pub use registry::{Registry, RegistryError};
pub use store::TreeStore;
