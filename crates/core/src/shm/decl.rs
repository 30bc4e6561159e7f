//! Variable declarations
//!
//! A firmware declares its whole variable set once as a static table of
//! [`VarDecl`] entries. Storage and registry are both built from that table.

use bitflags::bitflags;

use super::value::{ShmString, VarType, VarValue};
use super::Tag;

bitflags! {
    /// Declaration flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VarFlags: u8 {
        /// Produced on board; the radio link may read but never write it
        const REMOTE_READ_ONLY = 0b0000_0001;
    }
}

/// Declared default value. Its variant fixes the variable type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(&'static str),
}

impl DefaultValue {
    /// Type of a variable declared with this default
    pub const fn var_type(&self) -> VarType {
        match self {
            DefaultValue::Int(_) => VarType::Int,
            DefaultValue::Float(_) => VarType::Float,
            DefaultValue::Bool(_) => VarType::Bool,
            DefaultValue::String(_) => VarType::String,
        }
    }

    /// Owned value, or `None` if a string default exceeds the string capacity
    pub fn to_value(&self) -> Option<VarValue> {
        Some(match *self {
            DefaultValue::Int(v) => VarValue::Int(v),
            DefaultValue::Float(v) => VarValue::Float(v),
            DefaultValue::Bool(v) => VarValue::Bool(v),
            DefaultValue::String(s) => VarValue::String(ShmString::try_from(s).ok()?),
        })
    }
}

/// One entry of the declaration table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDecl {
    /// Owning group name
    pub group: &'static str,
    /// Name within the group
    pub name: &'static str,
    /// Registry-wide wire tag
    pub tag: Tag,
    /// Initial value
    pub default: DefaultValue,
    /// Declaration flags
    pub flags: VarFlags,
}

impl VarDecl {
    pub const fn int(group: &'static str, name: &'static str, tag: Tag, default: i32) -> Self {
        Self::new(group, name, tag, DefaultValue::Int(default))
    }

    pub const fn float(group: &'static str, name: &'static str, tag: Tag, default: f32) -> Self {
        Self::new(group, name, tag, DefaultValue::Float(default))
    }

    pub const fn bool(group: &'static str, name: &'static str, tag: Tag, default: bool) -> Self {
        Self::new(group, name, tag, DefaultValue::Bool(default))
    }

    pub const fn string(
        group: &'static str,
        name: &'static str,
        tag: Tag,
        default: &'static str,
    ) -> Self {
        Self::new(group, name, tag, DefaultValue::String(default))
    }

    const fn new(
        group: &'static str,
        name: &'static str,
        tag: Tag,
        default: DefaultValue,
    ) -> Self {
        Self {
            group,
            name,
            tag,
            default,
            flags: VarFlags::empty(),
        }
    }

    /// Mark the variable as not writable by the radio link
    pub const fn remote_read_only(mut self) -> Self {
        self.flags = self.flags.union(VarFlags::REMOTE_READ_ONLY);
        self
    }

    /// Declared type
    pub const fn var_type(&self) -> VarType {
        self.default.var_type()
    }
}
