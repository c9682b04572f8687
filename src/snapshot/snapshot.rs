use std::borrow::Cow;
use std::path::{Path, PathBuf};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::tree::{
    AccessLevel, InvalidTreeError, Node, NodeKind, Tree, UnknownAccessLevelError,
    UnknownNodeKindError,
};

const SNAPSHOT_FILE_NAME: &str = "tree.yaml";

pub fn default_snapshot_path(root: &Path) -> PathBuf {
    root.join(SNAPSHOT_FILE_NAME)
}

/// Reads and validates a tree snapshot.
///
/// The file holds either a list of root nodes or a map whose `nodes` key
/// holds that list. Every node is a map with `id`, `name`, `type`
/// (`folder`/`file`), `access` (`read`/`write`/`readWrite`) and an optional
/// `children` list. JSON documents of the same shape load too.
pub async fn read_snapshot(path: &Path) -> Result<Tree, SnapshotError> {
    debug!("Opening snapshot file: {}", path.display());
    let bytes = fs::read(path).await.context(ReadSnafu {
        file_path: path.display().to_string(),
    })?;
    debug!("Successfully read snapshot file: {} bytes", bytes.len());

    let contents = String::from_utf8(bytes).context(EncodingSnafu {
        file_path: path.display().to_string(),
    })?;
    parse_snapshot(&contents)
}

pub fn parse_snapshot(contents: &str) -> Result<Tree, SnapshotError> {
    let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
    let document = documents.first().context(MalformedSnapshotSnafu)?;

    let roots = match document {
        Yaml::Sequence(nodes) => parse_nodes(nodes, "nodes")?,
        Yaml::Mapping(top_level) => match field(top_level, "nodes") {
            Some(value) => {
                let nodes = value.as_sequence().context(NodesNotSequenceSnafu)?;
                parse_nodes(nodes, "nodes")?
            }
            None => {
                debug!("Snapshot has no 'nodes' section, starting with an empty tree");
                Vec::new()
            }
        },
        _ => return TopLevelShapeSnafu.fail(),
    };

    let tree = Tree::new(roots).context(InvalidTreeSnafu)?;
    debug!("Loaded snapshot with {} nodes", tree.len());
    Ok(tree)
}

fn field<'a, 'y>(
    mapping: &'a LinkedHashMap<Yaml<'y>, Yaml<'y>>,
    key: &'static str,
) -> Option<&'a Yaml<'y>> {
    mapping.get(&Yaml::Value(Scalar::String(Cow::Borrowed(key))))
}

fn string_field<'a>(
    mapping: &'a LinkedHashMap<Yaml, Yaml>,
    key: &'static str,
    path: &str,
) -> Result<&'a str, SnapshotError> {
    field(mapping, key)
        .context(MissingFieldSnafu { path, field: key })?
        .as_str()
        .context(FieldNotStringSnafu { path, field: key })
}

fn parse_nodes(nodes: &[Yaml], path: &str) -> Result<Vec<Node>, SnapshotError> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| parse_node(node, &format!("{path}[{index}]")))
        .collect()
}

fn parse_node(node: &Yaml, path: &str) -> Result<Node, SnapshotError> {
    let mapping = node.as_mapping().context(NodeNotMapSnafu { path })?;

    let id = string_field(mapping, "id", path)?;
    let name = string_field(mapping, "name", path)?;
    let kind = string_field(mapping, "type", path)?
        .parse::<NodeKind>()
        .context(KindSnafu { path })?;
    let access = string_field(mapping, "access", path)?
        .parse::<AccessLevel>()
        .context(AccessSnafu { path })?;

    let children = match field(mapping, "children") {
        Some(value) => {
            let children = value
                .as_sequence()
                .context(ChildrenNotSequenceSnafu { path })?;
            parse_nodes(children, &format!("{path}.children"))?
        }
        None => Vec::new(),
    };

    Ok(Node::new(id, name, kind, access, children))
}

#[derive(Debug, Snafu)]
pub enum SnapshotError {
    #[snafu(display("Failed to read the snapshot file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Snapshot file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the snapshot file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted snapshot file"))]
    MalformedSnapshot,
    #[snafu(display("Top level of the snapshot should be a list of nodes or a map"))]
    TopLevelShape,
    #[snafu(display("The 'nodes' section should be a list"))]
    NodesNotSequence,
    #[snafu(display("Node at {} should be a map", path))]
    NodeNotMap { path: String },
    #[snafu(display("Node at {} is missing the '{}' field", path, field))]
    MissingField { path: String, field: &'static str },
    #[snafu(display("Field '{}' of node at {} should be a string", field, path))]
    FieldNotString { path: String, field: &'static str },
    #[snafu(display("Node at {} has an invalid type", path))]
    KindError {
        path: String,
        source: UnknownNodeKindError,
    },
    #[snafu(display("Node at {} has an invalid access level", path))]
    AccessError {
        path: String,
        source: UnknownAccessLevelError,
    },
    #[snafu(display("Children of node at {} should be a list", path))]
    ChildrenNotSequence { path: String },
    #[snafu(display("Snapshot does not describe a valid tree"))]
    InvalidTree { source: InvalidTreeError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::find_node;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const IMAGES: &str = r#"
nodes:
  - id: f1
    name: My Images
    type: folder
    access: readWrite
    children:
      - id: f2
        name: Vacation Photos
        type: folder
        access: readWrite
        children:
          - id: file1
            name: beach.jpg
            type: file
            access: read
          - id: file2
            name: mountains.jpg
            type: file
            access: read
  - id: f3
    name: My Documents
    type: folder
    access: read
"#;

    #[test]
    fn parses_nested_nodes() {
        let tree = parse_snapshot(IMAGES).unwrap();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.roots().len(), 2);

        let beach = find_node(&tree, "file1").unwrap();
        assert_eq!(beach.name(), "beach.jpg");
        assert_eq!(beach.kind(), NodeKind::File);
        assert_eq!(beach.access(), AccessLevel::Read);
        assert!(find_node(&tree, "f3").unwrap().children().is_empty());
    }

    #[test]
    fn accepts_a_bare_json_list() {
        let json = r#"[
            {"id": "a", "name": "A", "type": "folder", "access": "write", "children": [
                {"id": "b", "name": "b.txt", "type": "file", "access": "readWrite"}
            ]}
        ]"#;
        let tree = parse_snapshot(json).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(find_node(&tree, "a").unwrap().access(), AccessLevel::Write);
    }

    #[test]
    fn missing_nodes_section_is_an_empty_tree() {
        let tree = parse_snapshot("other: value").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn empty_document_is_malformed() {
        assert!(matches!(
            parse_snapshot(""),
            Err(SnapshotError::MalformedSnapshot)
        ));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        assert!(matches!(
            parse_snapshot("invalid: yaml: content: [unclosed"),
            Err(SnapshotError::ParseError { .. })
        ));
    }

    #[test]
    fn scalar_top_level_is_rejected() {
        assert!(matches!(
            parse_snapshot("just a string"),
            Err(SnapshotError::TopLevelShape)
        ));
    }

    #[test]
    fn nodes_section_must_be_a_list() {
        assert!(matches!(
            parse_snapshot("nodes:\n  id: f1"),
            Err(SnapshotError::NodesNotSequence)
        ));
    }

    #[test]
    fn missing_fields_report_the_node_position() {
        let yaml = "
- id: a
  name: A
  type: folder
  access: read
  children:
    - id: b
      type: file
      access: read
";
        let error = parse_snapshot(yaml).unwrap_err();
        assert!(matches!(
            error,
            SnapshotError::MissingField { ref path, field: "name" } if path == "nodes[0].children[0]"
        ));
        assert!(error.to_string().contains("nodes[0].children[0]"));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let yaml = "- {id: a, name: A, type: symlink, access: read}";
        assert!(matches!(
            parse_snapshot(yaml),
            Err(SnapshotError::KindError { .. })
        ));
    }

    #[test]
    fn unknown_access_is_rejected() {
        let yaml = "- {id: a, name: A, type: file, access: admin}";
        assert!(matches!(
            parse_snapshot(yaml),
            Err(SnapshotError::AccessError { .. })
        ));
    }

    #[test]
    fn numeric_ids_are_rejected() {
        let yaml = "- {id: 12, name: A, type: file, access: read}";
        assert!(matches!(
            parse_snapshot(yaml),
            Err(SnapshotError::FieldNotString { field: "id", .. })
        ));
    }

    #[test]
    fn children_must_be_a_list() {
        let yaml = "- {id: a, name: A, type: folder, access: read, children: nope}";
        assert!(matches!(
            parse_snapshot(yaml),
            Err(SnapshotError::ChildrenNotSequence { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected_at_load() {
        let yaml = "
- {id: a, name: A, type: file, access: read}
- {id: a, name: B, type: file, access: read}
";
        assert!(matches!(
            parse_snapshot(yaml),
            Err(SnapshotError::InvalidTree {
                source: InvalidTreeError::DuplicateId { .. }
            })
        ));
    }

    #[test]
    fn files_with_children_are_rejected_at_load() {
        let yaml = "
- id: a
  name: a.txt
  type: file
  access: read
  children:
    - {id: b, name: b.txt, type: file, access: read}
";
        assert!(matches!(
            parse_snapshot(yaml),
            Err(SnapshotError::InvalidTree {
                source: InvalidTreeError::FileWithChildren { .. }
            })
        ));
    }

    #[compio::test]
    async fn reads_snapshot_from_disk() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{IMAGES}").expect("Failed to write to temp file");

        let tree = read_snapshot(file.path()).await.unwrap();
        assert_eq!(tree.len(), 5);
    }

    #[compio::test]
    async fn missing_file_is_a_read_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let result = read_snapshot(&default_snapshot_path(dir.path())).await;
        assert!(matches!(result, Err(SnapshotError::ReadError { .. })));
    }

    #[test]
    fn default_path_points_at_tree_yaml() {
        let path = default_snapshot_path(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/tree.yaml"));
    }
}
