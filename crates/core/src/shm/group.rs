//! Variable groups
//!
//! A group is a fixed namespace of variables (`thrusters`, `pitchConf`, ...)
//! built once by the registry. Groups also derive indexed arrays from naming
//! conventions: `t0`..`t7` in `thrusters` form the array `t`.

use heapless::index_map::FnvIndexMap;
use heapless::Vec;

use super::error::{error_name, ShmError};
use super::var::Var;
use super::MAX_GROUP_VARS;

/// Named, fixed collection of variables
#[derive(Debug)]
pub struct Group<'s> {
    name: &'static str,
    vars: FnvIndexMap<&'static str, Var<'s>, MAX_GROUP_VARS>,
}

impl<'s> Group<'s> {
    /// Build a group; variable names must be unique within it
    pub fn new<I>(name: &'static str, vars: I) -> Result<Self, ShmError>
    where
        I: IntoIterator<Item = Var<'s>>,
    {
        let mut map = FnvIndexMap::new();

        for var in vars {
            if map.contains_key(var.name()) {
                return Err(ShmError::DuplicateVar {
                    group: name,
                    name: var.name(),
                });
            }
            map.insert(var.name(), var)
                .map_err(|_| ShmError::CapacityExceeded("group variable"))?;
        }

        Ok(Self { name, vars: map })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a variable by its local name
    pub fn var(&self, name: &str) -> Result<&Var<'s>, ShmError> {
        self.var_if_exists(name)
            .ok_or_else(|| ShmError::VarNotFound(error_name(name)))
    }

    pub fn var_if_exists(&self, name: &str) -> Option<&Var<'s>> {
        self.vars.get(name)
    }

    /// Snapshot of every variable, in declaration order
    pub fn vars(&self) -> Vec<&Var<'s>, MAX_GROUP_VARS> {
        self.vars.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Var<'s>> {
        self.vars.values()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables named `prefix` + decimal index, ordered by index.
    ///
    /// The indices must be exactly `0..N` with no gap and no duplicate
    /// (`t1` and `t01` collide). Names whose suffix is not all digits are
    /// not part of the array; an all-digit suffix too large to index with
    /// breaks it.
    pub fn array(&self, prefix: &str) -> Result<Vec<&Var<'s>, MAX_GROUP_VARS>, ShmError> {
        let mut slots: [Option<&Var<'s>>; MAX_GROUP_VARS] = [None; MAX_GROUP_VARS];
        let mut count = 0;
        let mut max = 0;

        for var in self.vars.values() {
            let Some(index) = array_index(var.name(), prefix) else {
                continue;
            };

            let entry = slots
                .get_mut(index)
                .ok_or_else(|| self.array_error(prefix))?;
            if entry.is_some() {
                return Err(self.array_error(prefix));
            }

            *entry = Some(var);
            count += 1;
            max = max.max(index);
        }

        if count == 0 {
            return Err(ShmError::EmptyArray {
                group: self.name,
                prefix: error_name(prefix),
            });
        }

        // Distinct indices, all <= count - 1: the range is dense from zero.
        if max != count - 1 {
            return Err(self.array_error(prefix));
        }

        Ok(slots[..count].iter().flatten().copied().collect())
    }

    fn array_error(&self, prefix: &str) -> ShmError {
        ShmError::ArrayIntegrity {
            group: self.name,
            prefix: error_name(prefix),
        }
    }
}

fn array_index(name: &str, prefix: &str) -> Option<usize> {
    let suffix = name.strip_prefix(prefix)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(suffix.parse().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::super::{ShmStorage, VarDecl};
    use super::*;

    static THRUSTERS: &[VarDecl] = &[
        VarDecl::float("thrusters", "t4", 36, 0.0),
        VarDecl::float("thrusters", "t0", 32, 0.0),
        VarDecl::float("thrusters", "t1", 33, 0.0),
        VarDecl::float("thrusters", "t7", 39, 0.0),
        VarDecl::float("thrusters", "t2", 34, 0.0),
        VarDecl::float("thrusters", "t3", 35, 0.0),
        VarDecl::float("thrusters", "t5", 37, 0.0),
        VarDecl::float("thrusters", "t6", 38, 0.0),
        VarDecl::float("thrusters", "trim", 40, 0.0),
    ];

    fn group<'s>(name: &'static str, storage: &'s ShmStorage) -> Result<Group<'s>, ShmError> {
        Group::new(
            name,
            storage.entries().map(|(decl, slot)| Var::new(decl, slot)),
        )
    }

    #[test]
    fn test_lookup() {
        let storage = ShmStorage::new(THRUSTERS).unwrap();
        let group = group("thrusters", &storage).unwrap();

        assert_eq!(group.name(), "thrusters");
        assert_eq!(group.len(), 9);
        assert_eq!(group.var("t3").unwrap().tag(), 35);
        assert!(group.var_if_exists("t8").is_none());
        assert_eq!(
            group.var("t8"),
            Err(ShmError::VarNotFound(error_name("t8")))
        );
    }

    #[test]
    fn test_vars_snapshot() {
        let storage = ShmStorage::new(THRUSTERS).unwrap();
        let group = group("thrusters", &storage).unwrap();

        let vars = group.vars();
        assert_eq!(vars.len(), 9);
        assert_eq!(vars[0].name(), "t4");
        assert!(vars.iter().all(|v| v.group() == "thrusters"));
    }

    #[test]
    fn test_array_orders_by_index() {
        let storage = ShmStorage::new(THRUSTERS).unwrap();
        let group = group("thrusters", &storage).unwrap();

        let array = group.array("t").unwrap();
        assert_eq!(array.len(), 8);
        for (i, var) in array.iter().enumerate() {
            assert_eq!(var.tag() as usize, 32 + i);
            assert_eq!(*var, group.var(var.name()).unwrap());
        }
        assert_eq!(array[3].name(), "t3");
    }

    #[test]
    fn test_array_with_gap() {
        static GAP: &[VarDecl] = &[
            VarDecl::float("thrusters", "t0", 32, 0.0),
            VarDecl::float("thrusters", "t1", 33, 0.0),
            VarDecl::float("thrusters", "t2", 34, 0.0),
            VarDecl::float("thrusters", "t4", 36, 0.0),
            VarDecl::float("thrusters", "t5", 37, 0.0),
            VarDecl::float("thrusters", "t6", 38, 0.0),
            VarDecl::float("thrusters", "t7", 39, 0.0),
        ];
        let storage = ShmStorage::new(GAP).unwrap();
        let group = group("thrusters", &storage).unwrap();

        assert_eq!(
            group.array("t"),
            Err(ShmError::ArrayIntegrity {
                group: "thrusters",
                prefix: error_name("t"),
            })
        );
    }

    #[test]
    fn test_array_must_start_at_zero() {
        static OFFSET: &[VarDecl] = &[
            VarDecl::int("led", "m1", 0, 0),
            VarDecl::int("led", "m2", 1, 0),
        ];
        let storage = ShmStorage::new(OFFSET).unwrap();
        let group = group("led", &storage).unwrap();

        assert!(matches!(
            group.array("m"),
            Err(ShmError::ArrayIntegrity { .. })
        ));
    }

    #[test]
    fn test_array_duplicate_index() {
        static DUP: &[VarDecl] = &[
            VarDecl::int("led", "m0", 0, 0),
            VarDecl::int("led", "m1", 1, 0),
            VarDecl::int("led", "m01", 2, 0),
        ];
        let storage = ShmStorage::new(DUP).unwrap();
        let group = group("led", &storage).unwrap();

        assert!(matches!(
            group.array("m"),
            Err(ShmError::ArrayIntegrity { .. })
        ));
    }

    #[test]
    fn test_array_index_beyond_capacity() {
        static FAR: &[VarDecl] = &[VarDecl::int("led", "m99", 0, 0)];
        let storage = ShmStorage::new(FAR).unwrap();
        let group = group("led", &storage).unwrap();

        assert!(matches!(
            group.array("m"),
            Err(ShmError::ArrayIntegrity { .. })
        ));
    }

    #[test]
    fn test_array_index_overflow() {
        static HUGE: &[VarDecl] = &[
            VarDecl::float("thrusters", "t0", 32, 0.0),
            VarDecl::float("thrusters", "t1", 33, 0.0),
            VarDecl::float("thrusters", "t99999999999999999999", 34, 0.0),
        ];
        let storage = ShmStorage::new(HUGE).unwrap();
        let group = group("thrusters", &storage).unwrap();

        assert_eq!(array_index("t99999999999999999999", "t"), Some(usize::MAX));
        assert_eq!(
            group.array("t"),
            Err(ShmError::ArrayIntegrity {
                group: "thrusters",
                prefix: error_name("t"),
            })
        );
    }

    #[test]
    fn test_array_without_matches() {
        let storage = ShmStorage::new(THRUSTERS).unwrap();
        let group = group("thrusters", &storage).unwrap();

        assert_eq!(
            group.array("motor"),
            Err(ShmError::EmptyArray {
                group: "thrusters",
                prefix: error_name("motor"),
            })
        );
        // "trim" has no numeric suffix, so it never joins an array
        assert!(group.array("tri").is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        static DUP: &[VarDecl] = &[
            VarDecl::float("pitchConf", "p", 16, 0.01),
            VarDecl::float("pitchConf", "p", 17, 0.02),
        ];
        let storage = ShmStorage::new(DUP).unwrap();

        assert_eq!(
            group("pitchConf", &storage).err(),
            Some(ShmError::DuplicateVar {
                group: "pitchConf",
                name: "p",
            })
        );
    }
}
