use super::NormalRow;

/// Base: arcsecond
#[rustfmt::skip]
pub(crate) const ANGLE: &[NormalRow] = &[
    ("arcsecond", "1",       "Arcsecond", "\""),
    ("arcminute", "60",      "Arcminute", "'"),
    ("degree",    "3600",    "Degree",    "°"),
    ("gradian",   "3240",    "Gradian",   "grad"),
    // 648000/π, truncated
    ("radian",    "206264.806247096355156473357330778613196659700879631557576977", "Radian", "rad"),
    ("turn",      "1296000", "Turn",      "tr"),
];
