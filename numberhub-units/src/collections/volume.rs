use super::NormalRow;

/// Base: attoliter
#[rustfmt::skip]
pub(crate) const VOLUME: &[NormalRow] = &[
    ("attoliter",          "1",                  "Attoliter",            "aL"),
    ("milliliter",         "1e15",               "Milliliter",           "mL"),
    ("liter",              "1e18",               "Liter",                "L"),
    ("cubic_millimeter",   "1e12",               "Cubic millimeter",     "mm³"),
    ("cubic_centimeter",   "1e15",               "Cubic centimeter",     "cm³"),
    ("cubic_meter",        "1e21",               "Cubic meter",          "m³"),
    ("us_liquid_gallon",   "3.785411784e18",     "US liquid gallon",     "gal (US)"),
    ("us_liquid_quart",    "0.946352946e18",     "US liquid quart",      "qt (US)"),
    ("us_liquid_pint",     "0.473176473e18",     "US liquid pint",       "pt (US)"),
    ("us_legal_cup",       "0.24e18",            "US legal cup",         "cup (US)"),
    ("us_fluid_ounce",     "0.0295735295625e18", "US fluid ounce",       "fl oz (US)"),
    ("us_tablespoon",      "0.01478676478125e18","US tablespoon",        "tbsp (US)"),
    ("us_teaspoon",        "0.00492892159375e18","US teaspoon",          "tsp (US)"),
    ("imperial_gallon",    "4.54609e18",         "Imperial gallon",      "gal (UK)"),
    ("imperial_pint",      "0.56826125e18",      "Imperial pint",        "pt (UK)"),
    ("cubic_inch",         "0.016387064e18",     "Cubic inch",           "in³"),
    ("cubic_foot",         "28.316846592e18",    "Cubic foot",           "ft³"),
];
