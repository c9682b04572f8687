//! Two-gate access control: the caller's ambient permission and the node's
//! own access level are checked independently.

mod check_access;

pub use check_access::{Operation, UnknownOperationError, check_access};
