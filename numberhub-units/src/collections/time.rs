use super::NormalRow;

/// Base: attosecond
#[rustfmt::skip]
pub(crate) const TIME: &[NormalRow] = &[
    ("attosecond",  "1",         "Attosecond",  "as"),
    ("femtosecond", "1e3",       "Femtosecond", "fs"),
    ("picosecond",  "1e6",       "Picosecond",  "ps"),
    ("nanosecond",  "1e9",       "Nanosecond",  "ns"),
    ("microsecond", "1e12",      "Microsecond", "µs"),
    ("millisecond", "1e15",      "Millisecond", "ms"),
    ("jiffy",       "1e16",      "Jiffy",       "j"),
    ("second",      "1e18",      "Second",      "s"),
    ("minute",      "60e18",     "Minute",      "min"),
    ("hour",        "3600e18",   "Hour",        "h"),
    ("day",         "86400e18",  "Day",         "d"),
    ("week",        "604800e18", "Week",        "wk"),
];
