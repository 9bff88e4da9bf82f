use super::NormalRow;

/// Base: bit
#[rustfmt::skip]
pub(crate) const DATA_STORAGE: &[NormalRow] = &[
    ("bit",       "1",                "Bit",       "b"),
    ("nibble",    "4",                "Nibble",    "nib"),
    ("byte",      "8",                "Byte",      "B"),
    ("kilobit",   "1000",             "Kilobit",   "kbit"),
    ("kibibit",   "1024",             "Kibibit",   "Kibit"),
    ("kilobyte",  "8000",             "Kilobyte",  "kB"),
    ("kibibyte",  "8192",             "Kibibyte",  "KiB"),
    ("megabit",   "1e6",              "Megabit",   "Mbit"),
    ("mebibit",   "1048576",          "Mebibit",   "Mibit"),
    ("megabyte",  "8e6",              "Megabyte",  "MB"),
    ("mebibyte",  "8388608",          "Mebibyte",  "MiB"),
    ("gigabit",   "1e9",              "Gigabit",   "Gbit"),
    ("gibibit",   "1073741824",       "Gibibit",   "Gibit"),
    ("gigabyte",  "8e9",              "Gigabyte",  "GB"),
    ("gibibyte",  "8589934592",       "Gibibyte",  "GiB"),
    ("terabit",   "1e12",             "Terabit",   "Tbit"),
    ("tebibit",   "1099511627776",    "Tebibit",   "Tibit"),
    ("terabyte",  "8e12",             "Terabyte",  "TB"),
    ("tebibyte",  "8796093022208",    "Tebibyte",  "TiB"),
    ("petabit",   "1e15",             "Petabit",   "Pbit"),
    ("pebibit",   "1125899906842624", "Pebibit",   "Pibit"),
    ("petabyte",  "8e15",             "Petabyte",  "PB"),
    ("pebibyte",  "9007199254740992", "Pebibyte",  "PiB"),
];
