use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foldertree::tree::AccessLevel;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Search and reorganise a folder tree snapshot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Snapshot file holding the tree [default: ./tree.yaml]
    #[clap(long, short, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Permission level of the caller: read, write or readWrite
    #[clap(long, short, global = true, default_value = "read")]
    pub permission: AccessLevel,

    #[clap(long, short, global = true, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the whole tree
    Show,
    /// Print the nodes whose name contains QUERY, with the folders leading to them
    Search { query: String },
    /// Print the subtree rooted at node ID
    Find { id: String },
    /// Delete node ID and everything below it
    Remove { id: String },
    /// Move node SOURCE into folder DESTINATION
    Move { source: String, destination: String },
    /// Print the folders that can receive a moved node
    Folders,
}
