//! Loading the initial tree from a YAML (or JSON) snapshot file.

mod snapshot;

pub use snapshot::{SnapshotError, default_snapshot_path, parse_snapshot, read_snapshot};
