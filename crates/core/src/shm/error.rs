//! Registry error types
//!
//! Every fallible registry operation returns [`ShmError`]. Lookup misses,
//! type confusion and array integrity failures all indicate a mismatch between
//! the declaration table and the code addressing it, so callers usually hand
//! them to a fail-fast adapter rather than retry.

use heapless::String;

use super::value::VarType;
use super::{Tag, MAX_PATH_LEN};

/// Owned copy of a caller-supplied name or path, truncated to fit.
pub type ErrorName = String<MAX_PATH_LEN>;

/// Errors from registry construction, lookup and typed access
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShmError {
    /// No variable at the given dotted path
    #[error("variable {0} not found")]
    VarNotFound(ErrorName),
    /// No variable registered under the given tag
    #[error("variable tag {0} not found")]
    TagNotFound(Tag),
    /// No group with the given name
    #[error("group {0} not found")]
    GroupNotFound(ErrorName),
    /// Requested type does not match the declared type
    #[error("variable {var} has type {actual} not type {requested}")]
    TypeMismatch {
        var: &'static str,
        actual: VarType,
        requested: VarType,
    },
    /// Prefix-derived indices are not a dense `0..N-1` range
    #[error("invalid shm array: {group}.{prefix}[]")]
    ArrayIntegrity {
        group: &'static str,
        prefix: ErrorName,
    },
    /// Prefix matched no variable at all
    #[error("empty shm array: {group}.{prefix}[]")]
    EmptyArray {
        group: &'static str,
        prefix: ErrorName,
    },
    /// Two declarations in one group share a name
    #[error("duplicate variable {group}.{name}")]
    DuplicateVar {
        group: &'static str,
        name: &'static str,
    },
    /// Two declarations share a tag
    #[error("duplicate tag {0}")]
    DuplicateTag(Tag),
    /// Tag does not fit the tag table
    #[error("tag {0} out of range")]
    TagOutOfRange(Tag),
    /// Group or variable name exceeds the name capacity
    #[error("name {0} too long")]
    NameTooLong(&'static str),
    /// Group or variable name is empty or contains the path separator
    #[error("invalid name {0:?}")]
    InvalidName(&'static str),
    /// A fixed-capacity container is full
    #[error("{0} capacity exceeded")]
    CapacityExceeded(&'static str),
    /// String value exceeds the string capacity
    #[error("string of {len} bytes too long for {var}")]
    StringTooLong { var: &'static str, len: usize },
}

/// Copy `s` into a bounded string, cutting at a char boundary if needed.
pub(crate) fn error_name(s: &str) -> ErrorName {
    let mut out = ErrorName::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
