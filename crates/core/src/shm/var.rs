//! Variable handles
//!
//! A [`Var`] pairs a static declaration with the storage cell it describes.
//! Handles are `Copy` and never own the value; the cell belongs to
//! [`ShmStorage`](super::ShmStorage).

use core::fmt;
use core::ptr;

use heapless::String;

use super::decl::{DefaultValue, VarDecl, VarFlags};
use super::error::ShmError;
use super::storage::Slot;
use super::value::{ShmGet, ShmSet, VarType, VarValue, WriteError};
use super::{Tag, MAX_PATH_LEN};

/// Canonical `"<group>.<name>"` address
pub type VarPath = String<MAX_PATH_LEN>;

/// Named, typed, tagged reference to one storage cell
#[derive(Clone, Copy)]
pub struct Var<'s> {
    decl: &'static VarDecl,
    slot: &'s Slot,
}

impl<'s> Var<'s> {
    pub(crate) fn new(decl: &'static VarDecl, slot: &'s Slot) -> Self {
        Self { decl, slot }
    }

    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    /// Declared type; fixed for the life of the variable
    pub fn var_type(&self) -> VarType {
        self.slot.var_type()
    }

    pub fn tag(&self) -> Tag {
        self.decl.tag
    }

    /// Name of the owning group
    ///
    /// Resolve the [`Group`](super::Group) itself with
    /// `shm.group(var.group())`.
    pub fn group(&self) -> &'static str {
        self.decl.group
    }

    pub fn flags(&self) -> VarFlags {
        self.decl.flags
    }

    /// Dotted address, e.g. `thrusters.t3`
    pub fn path(&self) -> VarPath {
        let mut path = VarPath::new();
        let fits = path.push_str(self.decl.group).is_ok()
            && path.push('.').is_ok()
            && path.push_str(self.decl.name).is_ok();
        debug_assert!(fits, "path of {} exceeds capacity", self.decl.name);
        path
    }

    /// Diagnostic name of a type
    pub fn type_string(var_type: VarType) -> &'static str {
        var_type.as_str()
    }

    /// Read the value as `T`.
    ///
    /// `T` must be the declared type, except that INT variables may be read as
    /// `f32`.
    pub fn get<T: ShmGet>(&self) -> Result<T, ShmError> {
        T::read(self.slot).ok_or_else(|| self.mismatch(T::TYPE))
    }

    /// Store `value`.
    ///
    /// `value` must be of the declared type, except that FLOAT variables also
    /// accept `i32`. STRING variables accept `&str` or [`ShmString`].
    ///
    /// [`ShmString`]: super::ShmString
    pub fn set<T: ShmSet>(&self, value: T) -> Result<(), ShmError> {
        value.write(self.slot).map_err(|err| match err {
            WriteError::Kind => self.mismatch(T::TYPE),
            WriteError::TooLong(len) => ShmError::StringTooLong {
                var: self.decl.name,
                len,
            },
        })
    }

    /// Owned snapshot of the current value
    pub fn value(&self) -> VarValue {
        match self.slot {
            Slot::Int(cell) => VarValue::Int(cell.get()),
            Slot::Float(cell) => VarValue::Float(cell.get()),
            Slot::Bool(cell) => VarValue::Bool(cell.get()),
            Slot::String(cell) => VarValue::String(cell.borrow().clone()),
        }
    }

    /// Store a snapshot under the same rules as [`Var::set`]
    pub fn set_value(&self, value: &VarValue) -> Result<(), ShmError> {
        match value {
            VarValue::Int(v) => self.set(*v),
            VarValue::Float(v) => self.set(*v),
            VarValue::Bool(v) => self.set(*v),
            VarValue::String(s) => self.set(s),
        }
    }

    pub fn default_value(&self) -> DefaultValue {
        self.decl.default
    }

    /// Restore the declared default
    pub fn reset(&self) -> Result<(), ShmError> {
        match self.decl.default {
            DefaultValue::Int(v) => self.set(v),
            DefaultValue::Float(v) => self.set(v),
            DefaultValue::Bool(v) => self.set(v),
            DefaultValue::String(s) => self.set(s),
        }
    }

    fn mismatch(&self, requested: VarType) -> ShmError {
        ShmError::TypeMismatch {
            var: self.decl.name,
            actual: self.var_type(),
            requested,
        }
    }
}

impl PartialEq for Var<'_> {
    /// Two handles are equal when they address the same cell
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slot, other.slot)
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Var")
            .field("path", &self.path())
            .field("type", &self.var_type())
            .field("tag", &self.tag())
            .finish()
    }
}
