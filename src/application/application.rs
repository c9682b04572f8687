use foldertree::mutation::{Outcome, move_with_authorization, remove_with_authorization};
use foldertree::query::{filter_tree, find_node, folder_tree};
use foldertree::snapshot::{SnapshotError, read_snapshot};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::report::print_outcome;
use crate::cli::Command;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let tree = read_snapshot(&app_config.snapshot)
            .await
            .context(LoadSnafu)?;
        info!(
            "Loaded {} nodes from {}",
            tree.len(),
            app_config.snapshot.display()
        );
        debug!(
            "Running {:?} with '{}' permission",
            app_config.command, app_config.permission
        );

        match &app_config.command {
            Command::Show => print!("{tree}"),
            Command::Search { query } => print!("{}", filter_tree(&tree, query)),
            Command::Folders => print!("{}", folder_tree(&tree)),
            Command::Find { id } => match find_node(&tree, id) {
                Some(node) => print!("{node}"),
                None => print_outcome(
                    &Outcome::NotFound {
                        id: id.as_str().into(),
                    },
                    "find",
                ),
            },
            Command::Remove { id } => {
                let (tree, outcome) = remove_with_authorization(&tree, id, app_config.permission);
                print_outcome(&outcome, "delete");
                print!("{tree}");
            }
            Command::Move {
                source,
                destination,
            } => {
                let (tree, outcome) =
                    move_with_authorization(&tree, source, destination, app_config.permission);
                print_outcome(&outcome, "move");
                print!("{tree}");
            }
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the tree snapshot"))]
    LoadError { source: SnapshotError },
}
