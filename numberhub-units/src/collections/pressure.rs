use super::NormalRow;

/// Base: attopascal
#[rustfmt::skip]
pub(crate) const PRESSURE: &[NormalRow] = &[
    ("attopascal",                           "1",                     "Attopascal",                       "aPa"),
    ("femtopascal",                          "1e3",                   "Femtopascal",                      "fPa"),
    ("picopascal",                           "1e6",                   "Picopascal",                       "pPa"),
    ("nanopascal",                           "1e9",                   "Nanopascal",                       "nPa"),
    ("micropascal",                          "1e12",                  "Micropascal",                      "µPa"),
    ("millipascal",                          "1e15",                  "Millipascal",                      "mPa"),
    ("centipascal",                          "1e16",                  "Centipascal",                      "cPa"),
    ("decipascal",                           "1e17",                  "Decipascal",                       "dPa"),
    ("pascal",                               "1e18",                  "Pascal",                           "Pa"),
    ("dekapascal",                           "1e19",                  "Dekapascal",                       "daPa"),
    ("hectopascal",                          "1e20",                  "Hectopascal",                      "hPa"),
    ("millibar",                             "1e20",                  "Millibar",                         "mbar"),
    ("bar",                                  "1e23",                  "Bar",                              "bar"),
    ("kilopascal",                           "1e21",                  "Kilopascal",                       "kPa"),
    ("megapascal",                           "1e24",                  "Megapascal",                       "MPa"),
    ("gigapascal",                           "1e27",                  "Gigapascal",                       "GPa"),
    ("terapascal",                           "1e30",                  "Terapascal",                       "TPa"),
    ("petapascal",                           "1e33",                  "Petapascal",                       "PPa"),
    ("exapascal",                            "1e36",                  "Exapascal",                        "EPa"),
    ("psi",                                  "6894.7572931783e18",    "Pound per square inch",            "psi"),
    ("ksi",                                  "6894757.2931783e18",    "Kilopound per square inch",        "ksi"),
    ("standard_atmosphere",                  "101325e18",             "Standard atmosphere",              "atm"),
    ("torr",                                 "133.32236842108281e18", "Torr",                             "torr"),
    ("micron_of_mercury",                    "0.13332236842108281e18","Micron of mercury",                "µmHg"),
    ("millimeter_of_mercury",                "133.32236842108281e18", "Millimeter of mercury",            "mm Hg"),
    ("kilogram_force_per_square_meter",      "9.80665e18",            "Kilogram-force per square meter",  "kgf/m²"),
    ("kilogram_force_per_square_centimeter", "98066.5e18",            "Kilogram-force per square cm",     "kgf/cm²"),
    ("gram_force_per_square_centimeter",     "98.0665e18",            "Gram-force per square cm",         "gf/cm²"),
    ("pound_force_per_square_foot",          "47.88025898e18",        "Pound-force per square foot",      "lbf/ft²"),
    ("pound_force_per_square_inch",          "6894.7572931783e18",    "Pound-force per square inch",      "lbf/in²"),
];
