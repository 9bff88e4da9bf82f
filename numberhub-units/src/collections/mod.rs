//! Compiled-in unit tables
//!
//! Proportional tables are `(id, factor, name, short_name)` rows. Factors are
//! exact decimal strings counted in the smallest unit of the group, so most
//! rows are integers and no conversion goes through binary floating point.

mod angle;
mod area;
mod currency;
mod data;
mod energy;
mod length;
mod mass;
mod number_base;
mod power;
mod pressure;
mod speed;
mod time;
mod volume;

use crate::UnitGroup;

/// `(id, factor, name, short_name)`
pub(crate) type NormalRow = (&'static str, &'static str, &'static str, &'static str);

/// `(id, radix, name, short_name)`
pub(crate) type BaseRow = (&'static str, u32, &'static str, &'static str);

/// `(id, name, short_name)`
pub(crate) type CurrencyRow = (&'static str, &'static str, &'static str);

pub(crate) use currency::CURRENCIES;
pub(crate) use number_base::NUMBER_BASES;

/// Proportional tables in display order
#[rustfmt::skip]
pub(crate) const NORMAL_TABLES: [(UnitGroup, &[NormalRow]); 11] = [
    (UnitGroup::Length, length::LENGTH),
    (UnitGroup::Time, time::TIME),
    (UnitGroup::Mass, mass::MASS),
    (UnitGroup::Volume, volume::VOLUME),
    (UnitGroup::Area, area::AREA),
    (UnitGroup::Speed, speed::SPEED),
    (UnitGroup::Pressure, pressure::PRESSURE),
    (UnitGroup::Energy, energy::ENERGY),
    (UnitGroup::Power, power::POWER),
    (UnitGroup::Angle, angle::ANGLE),
    (UnitGroup::DataStorage, data::DATA_STORAGE),
];
