use std::path::{Path, PathBuf};

use foldertree::snapshot::default_snapshot_path;
use foldertree::tree::AccessLevel;

use crate::cli::{Cli, Command};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub snapshot: PathBuf,
    pub permission: AccessLevel,
    pub command: Command,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            snapshot: cli
                .snapshot
                .unwrap_or_else(|| default_snapshot_path(Path::new("."))),
            permission: cli.permission,
            command: cli.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn falls_back_to_tree_yaml_in_the_working_directory() {
        let cli = Cli::try_parse_from(["foldertree", "folders"]).unwrap();
        let config = RuntimeConfig::from(cli);
        assert_eq!(config.snapshot, PathBuf::from("./tree.yaml"));
        assert_eq!(config.command, Command::Folders);
    }
}
