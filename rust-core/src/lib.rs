//! Crystallographic symmetry operations
//!
//! This library provides the exact integer algebra of symmetry operations (rotation matrix plus
//! translation in twelfths), the codec between operations and coordinate triplets such as
//! `-x+1/2,y,z+1/3`, and a compiled-in table of space-group settings.

pub mod config;
pub mod errors;
pub mod space_groups;
pub mod symmetries;

pub use errors::{ParseErrorKind, SymmetryError};
pub use space_groups::{
    find_spacegroup_by_ccp4, find_spacegroup_by_hall, find_spacegroup_by_hm,
    find_spacegroup_by_name, find_spacegroup_by_number, spacegroups_with_number, SpaceGroup,
};
pub use symmetries::{make_triplet, parse_triplet, RotOp, SymOp, TrOp};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_types_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SymOp>();
        assert_send_sync::<SpaceGroup>();
        assert_send_sync::<SymmetryError>();
    }
}
