/// SI prefixes spelled out, femto through peta. `mili` is a misspelling
/// that shows up in stored metadata often enough to accept.
pub const LONG_PREFIXES: [(&str, f64); 13] = [
    ("peta", 1e15),
    ("tera", 1e12),
    ("giga", 1e9),
    ("mega", 1e6),
    ("kilo", 1e3),
    ("deci", 1e-1),
    ("centi", 1e-2),
    ("milli", 1e-3),
    ("mili", 1e-3),
    ("micro", 1e-6),
    ("nano", 1e-9),
    ("pico", 1e-12),
    ("femto", 1e-15),
];

/// Single-letter SI prefixes. Micro is written `u`.
pub const SHORT_PREFIXES: [(&str, f64); 12] = [
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
];
