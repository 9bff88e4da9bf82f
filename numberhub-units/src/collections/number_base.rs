use super::BaseRow;

#[rustfmt::skip]
pub(crate) const NUMBER_BASES: &[BaseRow] = &[
    ("binary",       2,  "Binary",       "base2"),
    ("ternary",      3,  "Ternary",      "base3"),
    ("quaternary",   4,  "Quaternary",   "base4"),
    ("quinary",      5,  "Quinary",      "base5"),
    ("senary",       6,  "Senary",       "base6"),
    ("septenary",    7,  "Septenary",    "base7"),
    ("octal",        8,  "Octal",        "base8"),
    ("nonary",       9,  "Nonary",       "base9"),
    ("decimal",      10, "Decimal",      "base10"),
    ("undecimal",    11, "Undecimal",    "base11"),
    ("duodecimal",   12, "Duodecimal",   "base12"),
    ("tridecimal",   13, "Tridecimal",   "base13"),
    ("tetradecimal", 14, "Tetradecimal", "base14"),
    ("pentadecimal", 15, "Pentadecimal", "base15"),
    ("hexadecimal",  16, "Hexadecimal",  "base16"),
];
