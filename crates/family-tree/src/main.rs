//! family-tree - record people and kinship relations in a flat file
//!
//! Usage:
//!   family-tree add person <NAME>                           Add a person
//!   family-tree add relationship <NAME> <RELATION>          Tag a person
//!   family-tree connect <NAME1> as <RELATIONSHIP> of <NAME2>
//!   family-tree countsons <NAME>                            Count son tags
//!   family-tree countdaughters <NAME>                       Count daughter tags
//!   family-tree countwives <NAME>                           Count wife tags
//!   family-tree father of <NAME>                            Find the father
//!   family-tree help                                        Show commands

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::Path;
use std::process;

use family_tree::person;
use family_tree::registry::RegistryError;
use family_tree::store::{TreeStore, DEFAULT_STORE_FILE};

#[derive(Parser)]
#[command(name = "family-tree")]
#[command(about = "Record people and kinship relations in a flat JSON file")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    # Add two people
    family-tree add person "Kk Dhakad"
    family-tree add person "Amit Dhakad"

    # Link them (the second party is always tagged 'parent')
    family-tree connect "Amit Dhakad" as son of "Kk Dhakad"

    # Tag someone directly, no counterpart recorded
    family-tree add relationship "Kk Dhakad" wife

    # Queries
    family-tree countsons "Kk Dhakad"
    family-tree father of "Amit Dhakad"

STORAGE:
    The tree is kept in 'family_tree.json' in the working directory, one
    JSON object mapping each name to its relation tags. The file is
    created on first use and rewritten whole on every mutation.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a person or a relationship to the family tree
    Add {
        #[command(subcommand)]
        what: AddCommands,
    },

    /// Connect two people in the family tree
    Connect {
        /// Person receiving the relationship tag
        #[arg(value_name = "NAME1")]
        name1: String,

        /// The literal word 'as'
        #[arg(value_name = "as")]
        as_keyword: String,

        /// Relationship tag to record on NAME1 (e.g. son, wife)
        #[arg(value_name = "RELATIONSHIP")]
        relationship: String,

        /// The literal word 'of'
        #[arg(value_name = "of")]
        of_keyword: String,

        /// The other party; always tagged 'parent'
        #[arg(value_name = "NAME2")]
        name2: String,
    },

    /// Count the number of sons for an individual
    #[command(name = "countsons")]
    CountSons {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Count the number of daughters for an individual
    #[command(name = "countdaughters")]
    CountDaughters {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Count the number of wives for an individual
    #[command(name = "countwives")]
    CountWives {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Find the father of an individual
    Father {
        /// The literal word 'of'
        #[arg(value_name = "of")]
        of_keyword: String,

        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Subcommand)]
enum AddCommands {
    /// Add a person to the family tree
    Person {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Add a relationship tag to a person in the family tree
    Relationship {
        #[arg(value_name = "NAME")]
        name: String,

        /// Relation tag to append (e.g. father, son)
        #[arg(value_name = "RELATION")]
        relation: Option<String>,
    },
}

/// Parse argv, keeping a single failure exit status.
///
/// Help and version requests exit 0; every malformed invocation prints
/// the usage message and exits 1.
fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
            _ => process::exit(1),
        }
    })
}

fn main() -> Result<()> {
    let cli = parse_cli();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        process::exit(1);
    };

    let store = TreeStore::open(Path::new(DEFAULT_STORE_FILE))?;

    match command {
        Commands::Add { what } => match what {
            AddCommands::Person { name } => cmd_add_person(&store, &name),
            AddCommands::Relationship { name, relation } => {
                cmd_add_relationship(&store, &name, relation)
            }
        },
        Commands::Connect {
            name1,
            as_keyword,
            relationship,
            of_keyword,
            name2,
        } => cmd_connect(&store, &name1, &as_keyword, &relationship, &of_keyword, &name2),
        Commands::CountSons { name } => cmd_count(&store, &name, person::SON, "sons"),
        Commands::CountDaughters { name } => cmd_count(&store, &name, person::DAUGHTER, "daughters"),
        Commands::CountWives { name } => cmd_count(&store, &name, person::WIFE, "wives"),
        Commands::Father { of_keyword, name } => cmd_father(&store, &of_keyword, &name),
    }
}

/// Add a person with no relations; reports if the name is already present
fn cmd_add_person(store: &TreeStore, name: &str) -> Result<()> {
    let mut registry = store.load()?;

    if registry.add_person(name) {
        store.save(&registry)?;
        println!("Added {} to the family tree.", name);
    } else {
        println!("{} is already in the family tree.", name);
    }

    Ok(())
}

/// Append a bare relation tag to an existing person
fn cmd_add_relationship(store: &TreeStore, name: &str, relation: Option<String>) -> Result<()> {
    let mut registry = store.load()?;

    if !registry.contains(name) {
        bail!(
            "{} is not in the family tree. You can add the person using 'add person' first.",
            name
        );
    }

    let Some(relation) = relation else {
        bail!("Please provide a relationship (e.g., father, son).");
    };

    registry.add_relation(name, &relation)?;
    store.save(&registry)?;

    println!("Added {} as {}'s {}.", relation, name, relation);
    Ok(())
}

/// Link two existing people; both tags land in one file rewrite
fn cmd_connect(
    store: &TreeStore,
    name1: &str,
    as_keyword: &str,
    relationship: &str,
    of_keyword: &str,
    name2: &str,
) -> Result<()> {
    if as_keyword != "as" || of_keyword != "of" {
        bail!("Usage: family-tree connect <name1> as <relationship> of <name2>");
    }

    let mut registry = store.load()?;

    match registry.connect(name1, relationship, name2) {
        Ok(()) => {
            store.save(&registry)?;
            println!("Connected {} as {} of {}.", name1, relationship, name2);
            Ok(())
        }
        Err(RegistryError::UnknownPerson(missing)) => bail!(
            "{} is not in the family tree. You can add the person using 'add person' first.",
            missing
        ),
    }
}

/// Count exact matches of `tag`; an unknown name is fatal here
fn cmd_count(store: &TreeStore, name: &str, tag: &str, noun: &str) -> Result<()> {
    let registry = store.load()?;
    let count = registry.count_relation(name, tag)?;

    println!("{} has {} {}.", name, count, noun);
    Ok(())
}

/// Father lookup; an unresolved father is a message, not a failure
fn cmd_father(store: &TreeStore, of_keyword: &str, name: &str) -> Result<()> {
    if of_keyword != "of" {
        bail!("Usage: family-tree father of <name>");
    }

    let registry = store.load()?;

    match registry.find_father(name) {
        Some(father) => println!("Father of {} is {}.", name, father),
        None => println!("Father of {} is not in the family tree.", name),
    }

    Ok(())
}
