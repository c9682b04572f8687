use std::str::FromStr;

use derive_more::Display;
use snafu::Snafu;

use crate::tree::{AccessLevel, Node};

const READ: u8 = 0b01;
const WRITE: u8 = 0b10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    #[display("read")]
    Read,
    #[display("write")]
    Write,
    #[display("delete")]
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Read, Operation::Write, Operation::Delete];

    /// Capability bits a permission level must hold for this operation.
    fn required(self) -> u8 {
        match self {
            Operation::Read => READ,
            Operation::Write => WRITE,
            Operation::Delete => READ | WRITE,
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "read" => Ok(Operation::Read),
            "write" => Ok(Operation::Write),
            "delete" => Ok(Operation::Delete),
            _ => UnknownOperationSnafu { value }.fail(),
        }
    }
}

fn granted(level: AccessLevel) -> u8 {
    match level {
        AccessLevel::Read => READ,
        AccessLevel::Write => WRITE,
        AccessLevel::ReadWrite => READ | WRITE,
    }
}

fn satisfies(level: AccessLevel, operation: Operation) -> bool {
    let required = operation.required();
    granted(level) & required == required
}

/// Both the caller's ambient permission and the node's own access level
/// must cover `operation`.
pub fn check_access(ambient: AccessLevel, node: &Node, operation: Operation) -> bool {
    satisfies(ambient, operation) && satisfies(node.access(), operation)
}

#[derive(Debug, Snafu)]
#[snafu(display("Unknown operation '{}'", value))]
pub struct UnknownOperationError {
    value: String,
}
