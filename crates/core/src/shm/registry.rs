//! Shared-memory registry
//!
//! [`Shm`] is the single state store of the flight controller. It is built
//! once at startup from a [`ShmStorage`] and then addressed two ways:
//!
//! - by dotted path, `"thrusters.t3"`, for code and diagnostics
//! - by numeric tag, `35`, for the radio link
//!
//! Both resolve to the same [`Var`] handle. No structural change happens after
//! construction.

use heapless::index_map::FnvIndexMap;
use heapless::Vec;

use super::error::{error_name, ShmError};
use super::group::Group;
use super::storage::ShmStorage;
use super::var::Var;
use super::{Tag, MAX_GROUPS, MAX_TAGS};

/// Registry of every group and variable
pub struct Shm<'s> {
    groups: FnvIndexMap<&'static str, Group<'s>, MAX_GROUPS>,
    /// Dense tag index, sized to the highest tag
    tags: Vec<Option<Var<'s>>, MAX_TAGS>,
}

impl<'s> Shm<'s> {
    /// Build every group and the tag index.
    ///
    /// Groups appear in the order their first variable is declared. Fails on
    /// a duplicated name within a group, a duplicated tag, or a tag that does
    /// not fit the tag table.
    pub fn new(storage: &'s ShmStorage) -> Result<Self, ShmError> {
        let mut groups = FnvIndexMap::new();

        for (decl, _) in storage.entries() {
            if groups.contains_key(decl.group) {
                continue;
            }

            let members = storage
                .entries()
                .filter(|(d, _)| d.group == decl.group)
                .map(|(d, slot)| Var::new(d, slot));
            let group = Group::new(decl.group, members)?;

            groups
                .insert(decl.group, group)
                .map_err(|_| ShmError::CapacityExceeded("group"))?;
        }

        let tags = tag_index(&groups)?;

        Ok(Self { groups, tags })
    }

    /// Look up a variable by `"<group>.<name>"`
    pub fn var(&self, path: &str) -> Result<&Var<'s>, ShmError> {
        self.var_if_exists(path)
            .ok_or_else(|| ShmError::VarNotFound(error_name(path)))
    }

    /// Like [`Shm::var`], without failing. Only the first `.` separates the
    /// group from the variable name.
    pub fn var_if_exists(&self, path: &str) -> Option<&Var<'s>> {
        let (group, name) = path.split_once('.')?;
        self.group_if_exists(group)?.var_if_exists(name)
    }

    /// Look up a variable by wire tag
    pub fn var_by_tag(&self, tag: Tag) -> Result<&Var<'s>, ShmError> {
        self.var_by_tag_if_exists(tag)
            .ok_or(ShmError::TagNotFound(tag))
    }

    pub fn var_by_tag_if_exists(&self, tag: Tag) -> Option<&Var<'s>> {
        self.tags.get(usize::from(tag))?.as_ref()
    }

    pub fn group(&self, name: &str) -> Result<&Group<'s>, ShmError> {
        self.group_if_exists(name)
            .ok_or_else(|| ShmError::GroupNotFound(error_name(name)))
    }

    pub fn group_if_exists(&self, name: &str) -> Option<&Group<'s>> {
        self.groups.get(name)
    }

    /// Snapshot of every group, in declaration order
    pub fn groups(&self) -> Vec<&Group<'s>, MAX_GROUPS> {
        self.groups.values().collect()
    }

    /// Every variable, group by group
    pub fn vars(&self) -> impl Iterator<Item = &Var<'s>> {
        self.groups.values().flat_map(|group| group.iter())
    }

    /// Total number of variables
    pub fn len(&self) -> usize {
        self.groups.values().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restore every variable to its declared default
    pub fn reset_all(&self) -> Result<(), ShmError> {
        for var in self.vars() {
            var.reset()?;
        }
        Ok(())
    }
}

fn tag_index<'s>(
    groups: &FnvIndexMap<&'static str, Group<'s>, MAX_GROUPS>,
) -> Result<Vec<Option<Var<'s>>, MAX_TAGS>, ShmError> {
    let mut tags = Vec::new();

    for var in groups.values().flat_map(|group| group.iter()) {
        let index = usize::from(var.tag());
        if index >= MAX_TAGS {
            return Err(ShmError::TagOutOfRange(var.tag()));
        }
        if index >= tags.len() {
            tags.resize(index + 1, None)
                .map_err(|_| ShmError::TagOutOfRange(var.tag()))?;
        }
        if tags[index].is_some() {
            return Err(ShmError::DuplicateTag(var.tag()));
        }
        tags[index] = Some(*var);
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::super::{VarDecl, VarType};
    use super::*;

    static DECLS: &[VarDecl] = &[
        VarDecl::bool("controller", "enabled", 0, false),
        VarDecl::float("desires", "force", 4, 0.0),
        VarDecl::float("desires", "pitch", 5, 0.0),
        VarDecl::int("led", "pattern", 11, 1),
        VarDecl::float("desires", "yaw", 7, 0.0),
    ];

    #[test]
    fn test_groups_in_declaration_order() {
        let storage = ShmStorage::new(DECLS).unwrap();
        let shm = Shm::new(&storage).unwrap();

        let names: Vec<&str, MAX_GROUPS> = shm.groups().iter().map(|g| g.name()).collect();
        assert_eq!(names.as_slice(), &["controller", "desires", "led"]);
        assert_eq!(shm.group("desires").unwrap().len(), 3);
        assert_eq!(shm.len(), 5);
    }

    #[test]
    fn test_path_and_tag_resolve_to_same_var() {
        let storage = ShmStorage::new(DECLS).unwrap();
        let shm = Shm::new(&storage).unwrap();

        for var in shm.vars() {
            assert_eq!(shm.var(&var.path()).unwrap(), var);
            assert_eq!(shm.var_by_tag(var.tag()).unwrap(), var);
        }
    }

    #[test]
    fn test_sparse_tags() {
        let storage = ShmStorage::new(DECLS).unwrap();
        let shm = Shm::new(&storage).unwrap();

        assert!(shm.var_by_tag_if_exists(6).is_none());
        assert!(shm.var_by_tag_if_exists(12).is_none());
        assert!(shm.var_by_tag_if_exists(Tag::MAX).is_none());
        assert_eq!(shm.var_by_tag(6), Err(ShmError::TagNotFound(6)));
        assert_eq!(shm.var_by_tag(11).unwrap().var_type(), VarType::Int);
    }

    #[test]
    fn test_path_splits_on_first_dot() {
        let storage = ShmStorage::new(DECLS).unwrap();
        let shm = Shm::new(&storage).unwrap();

        assert!(shm.var_if_exists("desires.pitch").is_some());
        assert!(shm.var_if_exists("desires.pitch.x").is_none());
        assert!(shm.var_if_exists("desires").is_none());
        assert!(shm.var_if_exists("").is_none());
        assert!(shm.var_if_exists("nothing.pitch").is_none());
        assert_eq!(
            shm.var("desires"),
            Err(ShmError::VarNotFound(error_name("desires")))
        );
    }

    #[test]
    fn test_group_lookup() {
        let storage = ShmStorage::new(DECLS).unwrap();
        let shm = Shm::new(&storage).unwrap();

        assert!(shm.group_if_exists("thrusters").is_none());
        assert!(matches!(
            shm.group("thrusters"),
            Err(ShmError::GroupNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        static DUP: &[VarDecl] = &[
            VarDecl::float("rollConf", "p", 27, 0.01),
            VarDecl::float("yawConf", "p", 27, 0.001),
        ];
        let storage = ShmStorage::new(DUP).unwrap();
        assert_eq!(Shm::new(&storage).err(), Some(ShmError::DuplicateTag(27)));
    }

    #[test]
    fn test_tag_out_of_range_rejected() {
        static FAR: &[VarDecl] = &[VarDecl::int("led", "pattern", 500, 1)];
        let storage = ShmStorage::new(FAR).unwrap();
        assert_eq!(
            Shm::new(&storage).err(),
            Some(ShmError::TagOutOfRange(500))
        );
    }

    #[test]
    fn test_reset_all() {
        let storage = ShmStorage::new(DECLS).unwrap();
        let shm = Shm::new(&storage).unwrap();

        shm.var("controller.enabled").unwrap().set(true).unwrap();
        shm.var("led.pattern").unwrap().set(4i32).unwrap();
        shm.reset_all().unwrap();

        assert_eq!(shm.var("controller.enabled").unwrap().get::<bool>(), Ok(false));
        assert_eq!(shm.var("led.pattern").unwrap().get::<i32>(), Ok(1));
    }

    #[test]
    fn test_empty_registry() {
        static NONE: &[VarDecl] = &[];
        let storage = ShmStorage::new(NONE).unwrap();
        let shm = Shm::new(&storage).unwrap();

        assert!(shm.is_empty());
        assert!(shm.groups().is_empty());
        assert!(shm.var_by_tag_if_exists(0).is_none());
    }
}
