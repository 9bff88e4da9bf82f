//! Unit groups: units only convert within their own group

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitGroup {
    Length,
    Time,
    Mass,
    Volume,
    Area,
    Speed,
    Pressure,
    Energy,
    Power,
    Angle,
    DataStorage,
    NumberBase,
    Currency,
}

impl UnitGroup {
    /// All groups in display order
    pub const ALL: [UnitGroup; 13] = [
        UnitGroup::Length,
        UnitGroup::Time,
        UnitGroup::Mass,
        UnitGroup::Volume,
        UnitGroup::Area,
        UnitGroup::Speed,
        UnitGroup::Pressure,
        UnitGroup::Energy,
        UnitGroup::Power,
        UnitGroup::Angle,
        UnitGroup::DataStorage,
        UnitGroup::NumberBase,
        UnitGroup::Currency,
    ];

    /// Stable machine name, same as the serde representation
    pub fn name(self) -> &'static str {
        match self {
            UnitGroup::Length => "length",
            UnitGroup::Time => "time",
            UnitGroup::Mass => "mass",
            UnitGroup::Volume => "volume",
            UnitGroup::Area => "area",
            UnitGroup::Speed => "speed",
            UnitGroup::Pressure => "pressure",
            UnitGroup::Energy => "energy",
            UnitGroup::Power => "power",
            UnitGroup::Angle => "angle",
            UnitGroup::DataStorage => "data_storage",
            UnitGroup::NumberBase => "number_base",
            UnitGroup::Currency => "currency",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
