// Canonical spelling for unit names found in NeXus-style metadata.
// Rules run strictly in order: each one sees the output of the previous.

use lazy_static::lazy_static;
use regex::Regex;

/// One text substitution in the standardizing chain
pub struct RewriteRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

lazy_static! {
    /// Spelling rules, in application order
    pub static ref REWRITE_RULES: Vec<RewriteRule> = vec![
        // ang, angstrom, ANGSTROMS, Ång...
        RewriteRule::new(r"(?i)[Åa]ng(strom)?(s)?", "Å"),
        // Any leftover capital A is an Angstrom
        RewriteRule::new(r"A", "Å"),
        RewriteRule::new(r"(?i)met(er|re)(s)?", "m"),
        RewriteRule::new(r"(?i)sec(ond)?(s)?", "s"),
        RewriteRule::new(r"(?i)kel(vin)?(s)?", "K"),
        RewriteRule::new(r"cel(cius)?", "℃"),
        RewriteRule::new(r"(?i)h(ert)?z", "Hz"),
        RewriteRule::new(
            r"(?i)^(arb(itrary|[.])? ?units?|a[.] ?u[.]|au[.]?|aus[.]?)$",
            "a.u.",
        ),
    ];

    /// `Å-2`, `cm 3` -> `Å^-2`, `cm ^3`
    static ref EXPONENT_PATTERN: Regex = Regex::new(r"([℃ÅA-Za-z ]+)([-0-9]+)").unwrap();

    static ref RECIPROCAL_PATTERN: Regex = Regex::new(r"(?i)inv").unwrap();
}

/// Rewrite a raw unit name into its canonical form, the form used as a
/// key in the dimension tables.
///
/// ```text
/// "n_m^-1"   -> "nm^{-1}"
/// "invA"     -> "Å^{-1}"
/// "A-2 cm-1" -> "Å^{-2} cm^{-1}"
/// ```
pub fn standardize(raw: &str) -> String {
    let mut unit = raw.to_string();
    for rule in REWRITE_RULES.iter() {
        let rewritten = rule.pattern.replace_all(&unit, rule.replacement);
        if rewritten != unit.as_str() {
            tracing::trace!("{} -> {} ({})", unit, rewritten, rule.pattern);
            unit = rewritten.into_owned();
        }
    }
    format_unit_structure(&unit)
}

/// Restructure exponent and reciprocal notation into
/// `{multiplier*}name^{exponent}` terms separated by single spaces.
///
/// A term with neither `/` nor `^` is emitted as-is and ends the scan;
/// any terms after it are dropped.
pub fn format_unit_structure(unit: &str) -> String {
    if unit.is_empty() {
        return String::new();
    }

    let unit = EXPONENT_PATTERN
        .replace_all(unit, "${1}^${2}")
        .replace('_', "");
    let unit = RECIPROCAL_PATTERN.replace_all(&unit, "/");

    let mut terms: Vec<String> = Vec::new();
    for item in unit.split_whitespace() {
        let parts: Vec<&str> = item.split('/').collect();
        let index = if parts.len() > 1 { 1 } else { 0 };
        let powers: Vec<&str> = parts[index].split('^').collect();

        if powers.len() == 1 && index == 0 {
            terms.push(item.to_string());
            break;
        }

        let exponent = if powers.len() == 1 { "1" } else { powers[1] };
        let multiplier = if parts[0].is_empty() || parts[0] == "1" || parts[0] == item {
            String::new()
        } else {
            format!("{}*", parts[0])
        };
        let sign = if powers.len() == 1 { "-" } else { "" };
        terms.push(format!(
            "{}{}^{{{}{}}}",
            multiplier, powers[0], sign, exponent
        ));
    }

    terms
        .join(" ")
        .trim()
        .replace("{{", "{")
        .replace("}}", "}")
}
