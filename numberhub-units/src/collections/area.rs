use super::NormalRow;

/// Base: square micrometer
#[rustfmt::skip]
pub(crate) const AREA: &[NormalRow] = &[
    ("square_micrometer", "1",                  "Square micrometer", "µm²"),
    ("square_millimeter", "1e6",                "Square millimeter", "mm²"),
    ("square_centimeter", "1e8",                "Square centimeter", "cm²"),
    ("square_decimeter",  "1e10",               "Square decimeter",  "dm²"),
    ("square_meter",      "1e12",               "Square meter",      "m²"),
    ("are",               "1e14",               "Are",               "a"),
    ("hectare",           "1e16",               "Hectare",           "ha"),
    ("square_kilometer",  "1e18",               "Square kilometer",  "km²"),
    ("square_inch",       "0.00064516e12",      "Square inch",       "in²"),
    ("square_foot",       "0.09290304e12",      "Square foot",       "ft²"),
    ("square_yard",       "0.83612736e12",      "Square yard",       "yd²"),
    ("acre",              "4046.8564224e12",    "Acre",              "ac"),
    ("square_mile",       "2589988.110336e12",  "Square mile",       "mi²"),
];
