// Space groups module: Contains the compiled-in table of space-group settings
// This module provides read-only lookup by number, CCP4 number, Hermann-Mauguin and Hall symbol

// ======================== MODULE DECLARATIONS ========================
pub mod space_group;
pub mod space_group_lookup;
pub mod space_group_table;


// ======================== SPACE GROUP RECORD ========================
pub use space_group::SpaceGroup; // struct - one setting: number, ccp4, hm, hall
// SpaceGroup impl methods:
//   new(number: u8, ccp4: u16, hm: &'static str, hall: &'static str) -> Self - const constructor
//   base_hm(&self) -> &'static str                      - HM symbol without ":1"/":2"/":H"/":R"
//   qualifier(&self) -> Option<&'static str>            - setting qualifier, if any
//   is_reference_setting(&self) -> bool                 - first row of its number

// ======================== TABLE & LOOKUP ========================
pub use space_group_table::SPACE_GROUPS; // static [SpaceGroup; 530] - all settings, sorted by number

pub use space_group_lookup::{
    find_spacegroup_by_ccp4,   // fn(ccp4: u16) -> Result<&'static SpaceGroup> - legacy numeric id
    find_spacegroup_by_hall,   // fn(hall: &str) -> Result<&'static SpaceGroup> - exact Hall symbol
    find_spacegroup_by_hm,     // fn(hm: &str) -> Result<&'static SpaceGroup> - exact extended HM symbol
    find_spacegroup_by_name,   // fn(name: &str) -> Result<&'static SpaceGroup> - HM, Hall or number
    find_spacegroup_by_number, // fn(number: u8) -> Result<&'static SpaceGroup> - reference setting
    spacegroup_table,          // fn() -> &'static [SpaceGroup] - whole table
    spacegroups_with_number,   // fn(number: u8) -> &'static [SpaceGroup] - all settings of a group
};
