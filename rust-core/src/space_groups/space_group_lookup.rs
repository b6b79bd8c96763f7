// Read-only lookups into the space-group table

use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::config::SPACE_GROUP_COUNT;
use crate::errors::SymmetryError;
use crate::space_groups::space_group::SpaceGroup;
use crate::space_groups::space_group_table::SPACE_GROUPS;
use crate::Result;

type SymbolIndex = HashMap<&'static str, &'static SpaceGroup>;

// Where two settings share a key the earlier row wins.
fn build_index(key: fn(&'static SpaceGroup) -> &'static str) -> SymbolIndex {
    let mut index = HashMap::with_capacity(SPACE_GROUP_COUNT);
    for sg in SPACE_GROUPS.iter() {
        index.entry(key(sg)).or_insert(sg);
    }
    debug!("built space-group index with {} keys", index.len());
    index
}

static HM_INDEX: Lazy<SymbolIndex> = Lazy::new(|| build_index(|sg| sg.hm));
static BASE_HM_INDEX: Lazy<SymbolIndex> = Lazy::new(|| build_index(|sg| sg.base_hm()));
static HALL_INDEX: Lazy<SymbolIndex> = Lazy::new(|| build_index(|sg| sg.hall));

fn miss(name: impl Into<String>) -> SymmetryError {
    let name = name.into();
    debug!("space group lookup miss: {:?}", name);
    SymmetryError::LookupMiss(name)
}

/// The whole table, in order.
pub fn spacegroup_table() -> &'static [SpaceGroup] {
    &SPACE_GROUPS
}

/// Every setting with the given sequence number (empty if there is none).
pub fn spacegroups_with_number(number: u8) -> &'static [SpaceGroup] {
    // rows are sorted by number
    let start = SPACE_GROUPS.partition_point(|sg| sg.number < number);
    let end = SPACE_GROUPS.partition_point(|sg| sg.number <= number);
    &SPACE_GROUPS[start..end]
}

/// Reference setting (first row) for a sequence number.
pub fn find_spacegroup_by_number(number: u8) -> Result<&'static SpaceGroup> {
    spacegroups_with_number(number)
        .first()
        .ok_or_else(|| miss(number.to_string()))
}

/// Setting with the given CCP4 number.
pub fn find_spacegroup_by_ccp4(ccp4: u16) -> Result<&'static SpaceGroup> {
    SPACE_GROUPS
        .iter()
        .find(|sg| ccp4 != 0 && sg.ccp4 == ccp4)
        .ok_or_else(|| miss(ccp4.to_string()))
}

/// Exact extended Hermann-Mauguin symbol, e.g. `"P 1 21/c 1"` or `"R 3 :R"`.
pub fn find_spacegroup_by_hm(hm: &str) -> Result<&'static SpaceGroup> {
    HM_INDEX.get(hm).copied().ok_or_else(|| miss(hm))
}

/// Exact Hall symbol, e.g. `"-P 2ybc"`.
pub fn find_spacegroup_by_hall(hall: &str) -> Result<&'static SpaceGroup> {
    HALL_INDEX.get(hall).copied().ok_or_else(|| miss(hall))
}

/// Resolve a free-form name. Runs of whitespace are collapsed, then the name
/// is tried as an extended HM symbol, an HM symbol without qualifier (first
/// setting wins), a Hall symbol and finally a sequence number.
pub fn find_spacegroup_by_name(name: &str) -> Result<&'static SpaceGroup> {
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Some(sg) = HM_INDEX
        .get(normalized.as_str())
        .or_else(|| BASE_HM_INDEX.get(normalized.as_str()))
        .or_else(|| HALL_INDEX.get(normalized.as_str()))
    {
        return Ok(*sg);
    }
    match normalized.parse::<u8>() {
        Ok(number) => find_spacegroup_by_number(number).map_err(|_| miss(name)),
        Err(_) => Err(miss(name)),
    }
}
