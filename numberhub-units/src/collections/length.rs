use super::NormalRow;

/// Base: attometer
#[rustfmt::skip]
pub(crate) const LENGTH: &[NormalRow] = &[
    ("attometer",         "1",                     "Attometer",         "am"),
    ("femtometer",        "1e3",                   "Femtometer",        "fm"),
    ("picometer",         "1e6",                   "Picometer",         "pm"),
    ("nanometer",         "1e9",                   "Nanometer",         "nm"),
    ("micrometer",        "1e12",                  "Micrometer",        "µm"),
    ("millimeter",        "1e15",                  "Millimeter",        "mm"),
    ("centimeter",        "1e16",                  "Centimeter",        "cm"),
    ("decimeter",         "1e17",                  "Decimeter",         "dm"),
    ("meter",             "1e18",                  "Meter",             "m"),
    ("kilometer",         "1e21",                  "Kilometer",         "km"),
    ("inch",              "0.0254e18",             "Inch",              "in"),
    ("foot",              "0.3048e18",             "Foot",              "ft"),
    ("yard",              "0.9144e18",             "Yard",              "yd"),
    ("mile",              "1609.344e18",           "Mile",              "mi"),
    ("nautical_mile",     "1852e18",               "Nautical mile",     "nmi"),
    ("astronomical_unit", "149597870700e18",       "Astronomical unit", "au"),
    ("light_year",        "9460730472580800e18",   "Light year",        "ly"),
    ("parsec",            "30856775814913673e18",  "Parsec",            "pc"),
];
