use super::NormalRow;

/// Base: attojoule
#[rustfmt::skip]
pub(crate) const ENERGY: &[NormalRow] = &[
    ("electron_volt",          "0.1602176634",          "Electron volt",          "eV"),
    ("attojoule",              "1",                     "Attojoule",              "aJ"),
    ("erg",                    "1e11",                  "Erg",                    "erg"),
    ("millijoule",             "1e15",                  "Millijoule",             "mJ"),
    ("joule",                  "1e18",                  "Joule",                  "J"),
    ("foot_pound",             "1.3558179483314004e18", "Foot-pound",             "ft·lbf"),
    ("calorie",                "4.184e18",              "Calorie",                "cal"),
    ("kilojoule",              "1e21",                  "Kilojoule",              "kJ"),
    ("british_thermal_unit",   "1055.05585262e18",      "British thermal unit",   "BTU"),
    ("watt_hour",              "3600e18",               "Watt-hour",              "Wh"),
    ("kilocalorie",            "4184e18",               "Kilocalorie",            "kcal"),
    ("megajoule",              "1e24",                  "Megajoule",              "MJ"),
    ("kilowatt_hour",          "3.6e24",                "Kilowatt-hour",          "kWh"),
    ("gigajoule",              "1e27",                  "Gigajoule",              "GJ"),
];
