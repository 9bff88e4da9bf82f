use super::NormalRow;

/// Base: millimeter per hour
#[rustfmt::skip]
pub(crate) const SPEED: &[NormalRow] = &[
    ("millimeter_per_hour",   "1",                "Millimeter per hour",   "mm/h"),
    ("millimeter_per_minute", "60",               "Millimeter per minute", "mm/m"),
    ("millimeter_per_second", "3600",             "Millimeter per second", "mm/s"),
    ("centimeter_per_hour",   "10",               "Centimeter per hour",   "cm/h"),
    ("centimeter_per_minute", "600",              "Centimeter per minute", "cm/m"),
    ("centimeter_per_second", "36000",            "Centimeter per second", "cm/s"),
    ("meter_per_hour",        "1000",             "Meter per hour",        "m/h"),
    ("meter_per_minute",      "60000",            "Meter per minute",      "m/m"),
    ("meter_per_second",      "3600000",          "Meter per second",      "m/s"),
    ("kilometer_per_hour",    "1000000",          "Kilometer per hour",    "km/h"),
    ("kilometer_per_minute",  "60000000",         "Kilometer per minute",  "km/m"),
    ("kilometer_per_second",  "3600000000",       "Kilometer per second",  "km/s"),
    ("foot_per_hour",         "304.8",            "Foot per hour",         "ft/h"),
    ("foot_per_minute",       "18288",            "Foot per minute",       "ft/m"),
    ("foot_per_second",       "1097280",          "Foot per second",       "ft/s"),
    ("yard_per_hour",         "914.4",            "Yard per hour",         "yd/h"),
    ("mile_per_hour",         "1609344",          "Mile per hour",         "mi/h"),
    ("mile_per_second",       "5793638400",       "Mile per second",       "mi/s"),
    ("knot",                  "1852000",          "Knot",                  "kt"),
    ("speed_of_light",        "1079252848800000", "Speed of light",        "c"),
];
