use super::NormalRow;

/// Base: attowatt
#[rustfmt::skip]
pub(crate) const POWER: &[NormalRow] = &[
    ("attowatt",          "1",                        "Attowatt",          "aW"),
    ("milliwatt",         "1e15",                     "Milliwatt",         "mW"),
    ("btu_per_hour",      "0.29307107017e18",         "BTU per hour",      "BTU/h"),
    ("watt",              "1e18",                     "Watt",              "W"),
    ("calorie_per_second","4.184e18",                 "Calorie per second","cal/s"),
    ("metric_horsepower", "735.49875e18",             "Metric horsepower", "PS"),
    ("horsepower",        "745.69987158227022e18",    "Horsepower",        "hp"),
    ("kilowatt",          "1e21",                     "Kilowatt",          "kW"),
    ("megawatt",          "1e24",                     "Megawatt",          "MW"),
    ("gigawatt",          "1e27",                     "Gigawatt",          "GW"),
];
