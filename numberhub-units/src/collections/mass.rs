use super::NormalRow;

/// Base: attogram
#[rustfmt::skip]
pub(crate) const MASS: &[NormalRow] = &[
    ("atomic_mass_unit", "1.66053906660e-6", "Atomic mass unit", "u"),
    ("attogram",         "1",                "Attogram",         "ag"),
    ("microgram",        "1e12",             "Microgram",        "µg"),
    ("milligram",        "1e15",             "Milligram",        "mg"),
    ("gram",             "1e18",             "Gram",             "g"),
    ("carat",            "0.2e18",           "Carat",            "ct"),
    ("kilogram",         "1e21",             "Kilogram",         "kg"),
    ("metric_ton",       "1e24",             "Metric ton",       "t"),
    ("ounce",            "28.349523125e18",  "Ounce",            "oz"),
    ("pound",            "453.59237e18",     "Pound",            "lbs"),
    ("stone",            "6350.29318e18",    "Stone",            "st"),
    ("short_ton",        "907184.74e18",     "Short ton",        "ton (US)"),
    ("long_ton",         "1016046.9088e18",  "Long ton",         "ton (UK)"),
];
