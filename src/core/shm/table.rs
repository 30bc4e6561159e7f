//! Copter variable table
//!
//! Every variable the flight controller and the radio link share. Tags are
//! the wire addresses used by the ground station and must never be reused.
//!
//! # Groups
//!
//! - `controller` - Attitude controller master switch
//! - `controllerOut` - Controller output (read-only to the radio)
//! - `desires` - Attitude and thrust setpoints
//! - `led` - Status LED animation
//! - `pitchConf`, `rollConf`, `yawConf` - PID gains per axis
//! - `placement` - Estimated attitude and altitude (read-only to the radio)
//! - `power` - Battery monitor (read-only to the radio)
//! - `switches` - Operator switches; `softKill` starts engaged
//! - `temperature` - Sensor temperatures (read-only to the radio)
//! - `thrusters` - Per-motor commands `t0`..`t7`

use copter_core::shm::VarDecl;

pub static COPTER_VARS: &[VarDecl] = &[
    VarDecl::bool("controller", "enabled", 0, false),
    VarDecl::float("controllerOut", "pitch", 1, 0.0).remote_read_only(),
    VarDecl::float("controllerOut", "roll", 2, 0.0).remote_read_only(),
    VarDecl::float("controllerOut", "yaw", 3, 0.0).remote_read_only(),
    VarDecl::float("desires", "force", 4, 0.0),
    VarDecl::float("desires", "pitch", 5, 0.0),
    VarDecl::float("desires", "roll", 6, 0.0),
    VarDecl::float("desires", "yaw", 7, 0.0),
    VarDecl::int("led", "brightness", 8, 8),
    VarDecl::int("led", "maxHue", 9, 188),
    VarDecl::int("led", "minHue", 10, 114),
    VarDecl::int("led", "pattern", 11, 1),
    VarDecl::int("led", "periodMs", 12, 250),
    VarDecl::float("pitchConf", "d", 13, 0.0),
    VarDecl::bool("pitchConf", "enabled", 14, false),
    VarDecl::float("pitchConf", "i", 15, 0.0),
    VarDecl::float("pitchConf", "p", 16, 0.01),
    VarDecl::float("placement", "altitude", 17, 0.0).remote_read_only(),
    VarDecl::float("placement", "pitch", 18, 0.0).remote_read_only(),
    VarDecl::float("placement", "roll", 19, 0.0).remote_read_only(),
    VarDecl::float("placement", "yaw", 20, 0.0).remote_read_only(),
    VarDecl::bool("power", "critical", 21, false).remote_read_only(),
    VarDecl::bool("power", "low", 22, false).remote_read_only(),
    VarDecl::float("power", "voltage", 23, 0.0).remote_read_only(),
    VarDecl::float("rollConf", "d", 24, 0.0),
    VarDecl::bool("rollConf", "enabled", 25, false),
    VarDecl::float("rollConf", "i", 26, 0.0),
    VarDecl::float("rollConf", "p", 27, 0.01),
    VarDecl::bool("switches", "calibrateEscs", 28, false),
    VarDecl::bool("switches", "calibrateImu", 29, false),
    VarDecl::bool("switches", "softKill", 30, true),
    VarDecl::float("temperature", "gyro", 31, 0.0).remote_read_only(),
    VarDecl::float("thrusters", "t0", 32, 0.0),
    VarDecl::float("thrusters", "t1", 33, 0.0),
    VarDecl::float("thrusters", "t2", 34, 0.0),
    VarDecl::float("thrusters", "t3", 35, 0.0),
    VarDecl::float("thrusters", "t4", 36, 0.0),
    VarDecl::float("thrusters", "t5", 37, 0.0),
    VarDecl::float("thrusters", "t6", 38, 0.0),
    VarDecl::float("thrusters", "t7", 39, 0.0),
    VarDecl::float("yawConf", "d", 40, 0.0),
    VarDecl::bool("yawConf", "enabled", 41, false),
    VarDecl::float("yawConf", "i", 42, 0.0),
    VarDecl::float("yawConf", "p", 43, 0.001),
];

/// Path of the motor kill switch engaged on link loss
pub const SOFT_KILL: &str = "switches.softKill";

/// Prefix of the per-motor command array in the `thrusters` group
pub const THRUSTER_PREFIX: &str = "t";
