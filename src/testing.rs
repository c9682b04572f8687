//! Shared trees for unit tests.

use crate::tree::{AccessLevel, Node, Tree};

/// `My Images / Vacation Photos / {beach.jpg, mountains.jpg}`.
pub(crate) fn images_tree() -> Tree {
    Tree::new(vec![images_folder()]).unwrap()
}

/// The images tree plus a read-only documents folder and a writable
/// projects folder with a nested subfolder.
pub(crate) fn workspace_tree() -> Tree {
    Tree::new(vec![
        images_folder(),
        Node::folder(
            "docs",
            "My Documents",
            AccessLevel::Read,
            vec![Node::file("cv", "resume.pdf", AccessLevel::Read)],
        ),
        Node::folder(
            "proj",
            "Projects",
            AccessLevel::ReadWrite,
            vec![
                Node::folder(
                    "rust",
                    "Rust",
                    AccessLevel::Write,
                    vec![Node::file("notes", "notes.md", AccessLevel::ReadWrite)],
                ),
                Node::file("todo", "todo.txt", AccessLevel::Write),
            ],
        ),
    ])
    .unwrap()
}

fn images_folder() -> Node {
    Node::folder(
        "f1",
        "My Images",
        AccessLevel::ReadWrite,
        vec![Node::folder(
            "f2",
            "Vacation Photos",
            AccessLevel::ReadWrite,
            vec![
                Node::file("file1", "beach.jpg", AccessLevel::Read),
                Node::file("file2", "mountains.jpg", AccessLevel::Read),
            ],
        )],
    )
}

pub(crate) fn ids(tree: &Tree) -> Vec<&str> {
    tree.ids().map(AsRef::as_ref).collect()
}
