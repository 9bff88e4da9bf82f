//! Unit registry built once from the compiled-in tables

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;
use numberhub_core::Number;
use crate::collections::{self, NormalRow, CURRENCIES, NUMBER_BASES};
use crate::{ConversionError, UnitDefinition, UnitGroup};

/// Global unit registry
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units, read-only after construction
pub struct UnitRegistry {
    units: Vec<UnitDefinition>,
    index: HashMap<&'static str, usize>,
    groups: HashMap<UnitGroup, Range<usize>>,
}

impl UnitRegistry {
    /// Build the registry from the static tables.
    ///
    /// # Panics
    ///
    /// On a duplicate id or a factor that is unparsable or not strictly
    /// positive. Both are bugs in the tables, never user input.
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            index: HashMap::new(),
            groups: HashMap::new(),
        };

        for (group, rows) in collections::NORMAL_TABLES {
            registry.register_group(group, |r| {
                for row in rows {
                    r.register(normal_unit(group, row));
                }
            });
        }
        registry.register_group(UnitGroup::NumberBase, |r| {
            for &(id, radix, name, short) in NUMBER_BASES {
                r.register(UnitDefinition::number_base(id, radix, name, short));
            }
        });
        registry.register_group(UnitGroup::Currency, |r| {
            for &(id, name, short) in CURRENCIES {
                r.register(UnitDefinition::currency(id, name, short));
            }
        });

        registry
    }

    /// Get a unit by id
    pub fn get(&self, id: &str) -> Result<&UnitDefinition, ConversionError> {
        self.index
            .get(id)
            .map(|&i| &self.units[i])
            .ok_or_else(|| ConversionError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All units of a group in declaration order
    pub fn group(&self, group: UnitGroup) -> &[UnitDefinition] {
        match self.groups.get(&group) {
            Some(range) => &self.units[range.clone()],
            None => &[],
        }
    }

    /// Groups in display order
    pub fn groups(&self) -> impl Iterator<Item = UnitGroup> + '_ {
        UnitGroup::ALL.into_iter().filter(|g| self.groups.contains_key(g))
    }

    /// Case-insensitive search over id, name and short name.
    /// An empty query returns every unit in scope.
    pub fn search(&self, query: &str, group: Option<UnitGroup>) -> Vec<&UnitDefinition> {
        let scope: &[UnitDefinition] = match group {
            Some(g) => self.group(g),
            None => &self.units,
        };
        let query = query.trim();
        scope.iter().filter(|u| query.is_empty() || u.matches(query)).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register_group(&mut self, group: UnitGroup, fill: impl FnOnce(&mut Self)) {
        let start = self.units.len();
        fill(self);
        self.groups.insert(group, start..self.units.len());
    }

    fn register(&mut self, unit: UnitDefinition) {
        let position = self.units.len();
        if self.index.insert(unit.id, position).is_some() {
            panic!("duplicate unit id in registry: {}", unit.id);
        }
        self.units.push(unit);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normal_unit(group: UnitGroup, &(id, factor, name, short): &NormalRow) -> UnitDefinition {
    let factor = Number::from_str(factor)
        .unwrap_or_else(|e| panic!("bad scale factor for {}: {}", id, e));
    if factor.is_zero() || factor.is_negative() {
        panic!("scale factor for {} must be positive", id);
    }
    UnitDefinition::normal(id, group, factor, name, short)
}
