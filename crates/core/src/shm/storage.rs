//! Value storage
//!
//! [`ShmStorage`] owns one typed cell per declaration. The registry only
//! borrows it, so the storage must be created first and outlives every
//! variable handle. On the target it typically lives in a `StaticCell`.
//!
//! Cells use `Cell`/`RefCell`: writes go through shared references, and the
//! storage is `!Sync`. Tasks sharing the registry across executors or
//! interrupt priorities must wrap it in their own critical-section mutex.

use core::cell::{Cell, RefCell};

use heapless::Vec;

use super::decl::{DefaultValue, VarDecl};
use super::error::ShmError;
use super::value::{ShmString, VarType, VarValue};
use super::{MAX_NAME_LEN, MAX_VARS};

/// Typed storage cell for a single variable
#[derive(Debug)]
pub enum Slot {
    Int(Cell<i32>),
    Float(Cell<f32>),
    Bool(Cell<bool>),
    String(RefCell<ShmString>),
}

impl Slot {
    fn new(default: &DefaultValue) -> Option<Self> {
        Some(match default.to_value()? {
            VarValue::Int(v) => Slot::Int(Cell::new(v)),
            VarValue::Float(v) => Slot::Float(Cell::new(v)),
            VarValue::Bool(v) => Slot::Bool(Cell::new(v)),
            VarValue::String(s) => Slot::String(RefCell::new(s)),
        })
    }

    /// Kind of value held by this cell
    pub fn var_type(&self) -> VarType {
        match self {
            Slot::Int(_) => VarType::Int,
            Slot::Float(_) => VarType::Float,
            Slot::Bool(_) => VarType::Bool,
            Slot::String(_) => VarType::String,
        }
    }
}

/// Backing store for every declared variable
pub struct ShmStorage {
    table: &'static [VarDecl],
    slots: Vec<Slot, MAX_VARS>,
}

impl ShmStorage {
    /// Allocate one cell per declaration, initialized to its default
    pub fn new(table: &'static [VarDecl]) -> Result<Self, ShmError> {
        let mut slots = Vec::new();

        for decl in table {
            check_name(decl.group)?;
            check_name(decl.name)?;

            let slot = Slot::new(&decl.default).ok_or(ShmError::StringTooLong {
                var: decl.name,
                len: match decl.default {
                    DefaultValue::String(s) => s.len(),
                    _ => 0,
                },
            })?;

            slots
                .push(slot)
                .map_err(|_| ShmError::CapacityExceeded("variable"))?;
        }

        Ok(Self { table, slots })
    }

    /// Declaration table this storage was built from
    pub fn table(&self) -> &'static [VarDecl] {
        self.table
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the storage is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Declarations paired with their cells, in table order
    pub fn entries(&self) -> impl Iterator<Item = (&'static VarDecl, &Slot)> {
        self.table.iter().zip(self.slots.iter())
    }
}

/// Names must be non-empty, fit the name capacity, and contain no `.`
fn check_name(name: &'static str) -> Result<(), ShmError> {
    if name.len() > MAX_NAME_LEN {
        return Err(ShmError::NameTooLong(name));
    }
    if name.is_empty() || name.contains('.') {
        return Err(ShmError::InvalidName(name));
    }
    Ok(())
}
