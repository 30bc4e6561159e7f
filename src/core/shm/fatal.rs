//! Fail-fast adapter for registry errors
//!
//! Registry errors mean the variable table and the code addressing it
//! disagree. Control-loop code that cannot do anything sensible about that
//! calls [`OrFatal::or_fatal`], which logs the error and panics; the target's
//! panic handler then halts the core.

use copter_core::shm::ShmError;

use crate::log_error;

/// Unwrap a registry result or abort with a logged message
pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T, ShmError> {
    #[track_caller]
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err),
        }
    }
}

/// Log `err` and abort
#[cold]
#[track_caller]
pub fn fatal(err: &ShmError) -> ! {
    report(err);
    panic!("shm: {}", err)
}

// Logged piecewise so the message stays defmt-encodable.
#[allow(unused_variables)]
fn report(err: &ShmError) {
    match err {
        ShmError::VarNotFound(path) => log_error!("Variable {} not found", path.as_str()),
        ShmError::TagNotFound(tag) => log_error!("Variable tag {} not found", tag),
        ShmError::GroupNotFound(name) => log_error!("Group {} not found", name.as_str()),
        ShmError::TypeMismatch {
            var,
            actual,
            requested,
        } => log_error!(
            "Variable {} has type {} not type {}",
            var,
            actual.as_str(),
            requested.as_str()
        ),
        ShmError::ArrayIntegrity { group, prefix } => {
            log_error!("Invalid shm array: {}.{}[]", group, prefix.as_str())
        }
        ShmError::EmptyArray { group, prefix } => {
            log_error!("Empty shm array: {}.{}[]", group, prefix.as_str())
        }
        ShmError::DuplicateVar { group, name } => {
            log_error!("Duplicate variable {}.{}", group, name)
        }
        ShmError::DuplicateTag(tag) => log_error!("Duplicate tag {}", tag),
        ShmError::TagOutOfRange(tag) => log_error!("Tag {} out of range", tag),
        ShmError::NameTooLong(name) => log_error!("Name {} too long", name),
        ShmError::InvalidName(name) => log_error!("Invalid name {}", name),
        ShmError::CapacityExceeded(what) => log_error!("{} capacity exceeded", what),
        ShmError::StringTooLong { var, len } => {
            log_error!("String of {} bytes too long for {}", len, var)
        }
    }
}
