use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional decimal, optional scientific notation) + whitespace + unit
    /// Examples: "2000 mm", "1.5e-3 1/A", "-20 celcius", "3 A-2 cm-1"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([-+]?\d+(?:\.\d*)?(?:[eE][-+]?\d+)?)\s+(\S.*)$"
    ).unwrap();
}

/// A number paired with the raw unit string that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

/// Check if a string looks like a quantity with a unit
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split "2000 mm" into its value and unit. The unit is returned as
/// written; standardizing it is left to the converter.
pub fn parse_quantity(s: &str) -> Option<Quantity> {
    let caps = QUANTITY_PATTERN.captures(s.trim())?;
    let value = caps[1].parse::<f64>().ok()?;
    Some(Quantity {
        value,
        unit: caps[2].trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("2000 mm"));
        assert!(looks_like_quantity("10.5 nm^-1"));
        assert!(looks_like_quantity("1e3 Hz"));
        assert!(looks_like_quantity("-20 celcius"));
        assert!(looks_like_quantity("  3 A-2 cm-1 "));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("mm"));
        assert!(!looks_like_quantity("sample holder"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_parse_quantity() {
        let q = parse_quantity("2.011 1/A").unwrap();
        assert_eq!(q.value, 2.011);
        assert_eq!(q.unit, "1/A");

        let q = parse_quantity(" 1.5e-3 A-2 cm-1 ").unwrap();
        assert_eq!(q.value, 1.5e-3);
        assert_eq!(q.unit, "A-2 cm-1");

        assert_eq!(parse_quantity("seconds"), None);
    }
}
