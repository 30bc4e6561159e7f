//! Shared-memory variable registry
//!
//! Every piece of control, telemetry and configuration state is declared once
//! in a static [`VarDecl`] table. [`ShmStorage`] owns the typed cells, and
//! [`Shm`] indexes them by group, by dotted path and by wire tag.
//!
//! ```
//! use copter_core::shm::{Shm, ShmStorage, VarDecl};
//!
//! static VARS: &[VarDecl] = &[
//!     VarDecl::float("thrusters", "t0", 32, 0.0),
//!     VarDecl::float("thrusters", "t1", 33, 0.0),
//! ];
//!
//! let storage = ShmStorage::new(VARS).unwrap();
//! let shm = Shm::new(&storage).unwrap();
//!
//! shm.var_by_tag(33).unwrap().set(0.75f32).unwrap();
//! assert_eq!(shm.var("thrusters.t1").unwrap().get::<f32>(), Ok(0.75));
//! ```
//!
//! # Concurrency
//!
//! The registry performs no locking. Its cells are `Cell`/`RefCell`, which
//! makes `Shm` `!Sync`: it can be shared freely within one executor, but a
//! second executor or an interrupt handler needs the whole registry behind the
//! caller's own critical-section mutex.

mod decl;
mod error;
mod group;
mod registry;
mod storage;
mod value;
mod var;

pub use decl::{DefaultValue, VarDecl, VarFlags};
pub use error::{ErrorName, ShmError};
pub use group::Group;
pub use registry::Shm;
pub use storage::{ShmStorage, Slot};
pub use value::{ShmGet, ShmSet, ShmString, VarType, VarValue};
pub use var::{Var, VarPath};

/// Registry-wide wire tag
pub type Tag = u16;

/// Maximum number of variables
pub const MAX_VARS: usize = 64;

/// Maximum number of groups (power of two)
pub const MAX_GROUPS: usize = 16;

/// Maximum number of variables in one group (power of two)
pub const MAX_GROUP_VARS: usize = 16;

/// Tag table size; valid tags are `0..MAX_TAGS`
pub const MAX_TAGS: usize = 64;

/// Maximum group or variable name length
pub const MAX_NAME_LEN: usize = 24;

/// Maximum dotted path length
pub const MAX_PATH_LEN: usize = 2 * MAX_NAME_LEN + 1;

/// Maximum string value length
pub const MAX_STRING_LEN: usize = 63;
