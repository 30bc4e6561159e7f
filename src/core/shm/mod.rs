//! Copter state registry
//!
//! Binds the platform-agnostic registry from `copter_core` to the copter's
//! variable table. Firmware startup builds the storage once, keeps it in a
//! `StaticCell`, and hands `&Shm` to the control loop and the radio task:
//!
//! ```ignore
//! static STORAGE: StaticCell<ShmStorage> = StaticCell::new();
//!
//! let storage = STORAGE.init(copter_storage().or_fatal());
//! let shm = init(storage).or_fatal();
//! ```

pub mod fatal;
pub mod table;

pub use copter_core::shm::*;
pub use fatal::{fatal, OrFatal};
pub use table::{COPTER_VARS, SOFT_KILL, THRUSTER_PREFIX};

use heapless::Vec;

use crate::log_info;

/// Storage for the copter variable table, initialized to defaults
pub fn copter_storage() -> Result<ShmStorage, ShmError> {
    ShmStorage::new(COPTER_VARS)
}

/// Build the registry and check the thruster array layout
pub fn init(storage: &ShmStorage) -> Result<Shm<'_>, ShmError> {
    let shm = Shm::new(storage)?;
    let _motors = thrusters(&shm)?.len();

    log_info!(
        "shm ready: {} groups, {} variables, {} thrusters",
        shm.groups().len(),
        shm.len(),
        _motors
    );

    Ok(shm)
}

/// Thruster command variables `t0..tN`, in motor order
pub fn thrusters<'a, 's>(
    shm: &'a Shm<'s>,
) -> Result<Vec<&'a Var<'s>, MAX_GROUP_VARS>, ShmError> {
    shm.group("thrusters")?.array(THRUSTER_PREFIX)
}
