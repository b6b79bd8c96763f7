use serde::Serialize;
use std::fmt;

use crate::space_groups::space_group_lookup::spacegroups_with_number;

/// One setting of a crystallographic space group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpaceGroup {
    /// Sequence number in International Tables (1-230)
    pub number: u8,
    /// CCP4 space-group number, 0 if the setting has none
    pub ccp4: u16,
    /// Extended Hermann-Mauguin symbol, e.g. "P 1 21/c 1" or "R 3 :H"
    pub hm: &'static str,
    /// Hall symbol, e.g. "-P 2ybc"
    pub hall: &'static str,
}

impl SpaceGroup {
    pub const fn new(number: u8, ccp4: u16, hm: &'static str, hall: &'static str) -> Self {
        Self {
            number,
            ccp4,
            hm,
            hall,
        }
    }

    /// Hermann-Mauguin symbol without the setting qualifier.
    pub fn base_hm(&self) -> &'static str {
        match self.hm.split_once(" :") {
            Some((base, _)) => base,
            None => self.hm,
        }
    }

    /// True for the first table row of this sequence number.
    pub fn is_reference_setting(&self) -> bool {
        spacegroups_with_number(self.number).first() == Some(self)
    }

    /// Origin choice (`1`, `2`) or axes (`H`, `R`) qualifier, if the symbol
    /// carries one.
    pub fn qualifier(&self) -> Option<&'static str> {
        self.hm.split_once(" :").map(|(_, q)| q)
    }
}

impl fmt::Display for SpaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hm, self.number)
    }
}
