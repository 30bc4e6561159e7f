//! Variable value kinds
//!
//! The registry stores exactly four kinds of value. [`VarType`] is the
//! declared kind, [`VarValue`] an owned snapshot of one value, and the
//! [`ShmGet`] / [`ShmSet`] traits describe which Rust types may be read from or
//! written to a variable of each kind.

use core::fmt;

use heapless::String;

use super::storage::Slot;
use super::MAX_STRING_LEN;

/// Bounded string stored in a STRING variable
pub type ShmString = String<MAX_STRING_LEN>;

/// Declared variable type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    /// 32-bit signed integer
    Int,
    /// 32-bit floating point
    Float,
    /// Boolean
    Bool,
    /// Bounded string
    String,
}

impl VarType {
    /// Diagnostic name used in error messages and telemetry
    pub const fn as_str(self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Float => "float",
            VarType::Bool => "bool",
            VarType::String => "string",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned snapshot of a variable value
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(ShmString),
}

impl VarValue {
    /// Kind of this value
    pub fn var_type(&self) -> VarType {
        match self {
            VarValue::Int(_) => VarType::Int,
            VarValue::Float(_) => VarType::Float,
            VarValue::Bool(_) => VarType::Bool,
            VarValue::String(_) => VarType::String,
        }
    }
}

/// Types that can be read out of a variable.
///
/// `f32` is also readable from INT variables; every other combination must
/// match the declared type exactly.
pub trait ShmGet: Sized {
    /// Type requested by this reader, for mismatch reports
    const TYPE: VarType;

    #[doc(hidden)]
    fn read(slot: &Slot) -> Option<Self>;
}

/// Reason a [`ShmSet::write`] was refused
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// Slot holds another kind of value
    Kind,
    /// String of this many bytes does not fit
    TooLong(usize),
}

/// Types that can be written into a variable.
///
/// `i32` is also writable into FLOAT variables; every other combination must
/// match the declared type exactly.
pub trait ShmSet {
    /// Type supplied by this writer, for mismatch reports
    const TYPE: VarType;

    #[doc(hidden)]
    fn write(self, slot: &Slot) -> Result<(), WriteError>;
}

impl ShmGet for i32 {
    const TYPE: VarType = VarType::Int;

    fn read(slot: &Slot) -> Option<Self> {
        match slot {
            Slot::Int(cell) => Some(cell.get()),
            _ => None,
        }
    }
}

impl ShmGet for f32 {
    const TYPE: VarType = VarType::Float;

    fn read(slot: &Slot) -> Option<Self> {
        match slot {
            Slot::Float(cell) => Some(cell.get()),
            Slot::Int(cell) => Some(cell.get() as f32),
            _ => None,
        }
    }
}

impl ShmGet for bool {
    const TYPE: VarType = VarType::Bool;

    fn read(slot: &Slot) -> Option<Self> {
        match slot {
            Slot::Bool(cell) => Some(cell.get()),
            _ => None,
        }
    }
}

impl ShmGet for ShmString {
    const TYPE: VarType = VarType::String;

    fn read(slot: &Slot) -> Option<Self> {
        match slot {
            Slot::String(cell) => Some(cell.borrow().clone()),
            _ => None,
        }
    }
}

impl ShmSet for i32 {
    const TYPE: VarType = VarType::Int;

    fn write(self, slot: &Slot) -> Result<(), WriteError> {
        match slot {
            Slot::Int(cell) => cell.set(self),
            Slot::Float(cell) => cell.set(self as f32),
            _ => return Err(WriteError::Kind),
        }
        Ok(())
    }
}

impl ShmSet for f32 {
    const TYPE: VarType = VarType::Float;

    fn write(self, slot: &Slot) -> Result<(), WriteError> {
        match slot {
            Slot::Float(cell) => cell.set(self),
            _ => return Err(WriteError::Kind),
        }
        Ok(())
    }
}

impl ShmSet for bool {
    const TYPE: VarType = VarType::Bool;

    fn write(self, slot: &Slot) -> Result<(), WriteError> {
        match slot {
            Slot::Bool(cell) => cell.set(self),
            _ => return Err(WriteError::Kind),
        }
        Ok(())
    }
}

impl ShmSet for &str {
    const TYPE: VarType = VarType::String;

    fn write(self, slot: &Slot) -> Result<(), WriteError> {
        match slot {
            Slot::String(cell) => {
                let value =
                    ShmString::try_from(self).map_err(|_| WriteError::TooLong(self.len()))?;
                *cell.borrow_mut() = value;
                Ok(())
            }
            _ => Err(WriteError::Kind),
        }
    }
}

impl ShmSet for ShmString {
    const TYPE: VarType = VarType::String;

    fn write(self, slot: &Slot) -> Result<(), WriteError> {
        match slot {
            Slot::String(cell) => {
                *cell.borrow_mut() = self;
                Ok(())
            }
            _ => Err(WriteError::Kind),
        }
    }
}

impl ShmSet for &ShmString {
    const TYPE: VarType = VarType::String;

    fn write(self, slot: &Slot) -> Result<(), WriteError> {
        self.as_str().write(slot)
    }
}
