use crate::units::prefix::{LONG_PREFIXES, SHORT_PREFIXES};
use crate::units::types::DimensionKind;
use lazy_static::lazy_static;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Unit name -> scale relative to the dimension's reference unit
pub type ScaleMap = BTreeMap<String, f64>;

lazy_static! {
    static ref DIMENSIONS: DimensionSet = DimensionSet::build();
}

/// The shared dimension tables, built on first use
pub fn dimensions() -> &'static DimensionSet {
    &DIMENSIONS
}

/// One physical dimension and every unit name accepted for it
#[derive(Debug, Clone)]
pub struct Dimension {
    kind: DimensionKind,
    scales: ScaleMap,
}

impl Dimension {
    pub fn new(kind: DimensionKind, scales: ScaleMap) -> Self {
        Self { kind, scales }
    }

    pub fn kind(&self) -> DimensionKind {
        self.kind
    }

    pub fn scale_of(&self, name: &str) -> Option<f64> {
        self.scales.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scales.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.scales.keys().map(String::as_str)
    }

    pub fn scales(&self) -> &ScaleMap {
        &self.scales
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

/// The nine dimension tables, stored in lookup priority order
#[derive(Debug, Clone)]
pub struct DimensionSet {
    dimensions: Vec<Dimension>,
}

impl DimensionSet {
    pub fn build() -> Self {
        let dimensions = DimensionKind::ALL
            .iter()
            .map(|&kind| Dimension::new(kind, build_table(kind)))
            .collect();
        Self { dimensions }
    }

    pub fn get(&self, kind: DimensionKind) -> &Dimension {
        &self.dimensions[kind.index()]
    }

    /// First dimension, in priority order, that accepts `name`, together
    /// with the scale `name` has there
    pub fn find(&self, name: &str) -> Option<(&Dimension, f64)> {
        self.dimensions
            .iter()
            .find_map(|dim| dim.scale_of(name).map(|scale| (dim, scale)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter()
    }
}

fn build_table(kind: DimensionKind) -> ScaleMap {
    match kind {
        DimensionKind::Length => {
            let mut map = build_metric_unit_names("meter", "m");
            map.extend(build_metric_unit_names("metre", "m"));
            map.extend(build_plural_units(&[("micron", 1e-6), ("Angstrom", 1e-10)]));
            map.insert("Å".to_string(), 1e-10);
            map
        }
        DimensionKind::Time => {
            let mut map = build_metric_unit_names("second", "s");
            map.extend(build_plural_units(&[
                ("hour", 3600.0),
                ("day", 24.0 * 3600.0),
                ("week", 7.0 * 24.0 * 3600.0),
            ]));
            map
        }
        DimensionKind::Angle => {
            let mut map = build_plural_units(&[
                ("degree", 1.0),
                ("minute", 1.0 / 60.0),
                ("arcminute", 1.0 / 60.0),
                ("arcsecond", 1.0 / 3600.0),
                ("radian", 180.0 / PI),
            ]);
            map.extend(literal_units(&[
                ("deg", 1.0),
                ("arcmin", 1.0 / 60.0),
                ("arcsec", 1.0 / 3600.0),
                ("rad", 180.0 / PI),
            ]));
            map
        }
        DimensionKind::Frequency => {
            let mut map = build_metric_unit_names("hertz", "Hz");
            map.extend(build_metric_unit_names("Hertz", "Hz"));
            map.extend(build_plural_units(&[("rpm", 1.0 / 60.0)]));
            map
        }
        DimensionKind::Temperature => {
            // Scale only; the Celcius offset is not applied
            let mut map = build_metric_unit_names("kelvin", "K");
            map.extend(build_metric_unit_names("Kelvin", "K"));
            map.extend(build_metric_unit_names("Celcius", "℃"));
            map.extend(build_metric_unit_names("celcius", "℃"));
            map
        }
        DimensionKind::Charge => {
            let mut map = build_metric_unit_names("coulomb", "C");
            map.insert("microAmp*hour".to_string(), 0.0036);
            map
        }
        DimensionKind::Sld => {
            let mut map = literal_units(&[
                ("10^{-6} Å^{-2}", 1e-6),
                ("Å^{-2}", 1.0),
                ("um^{-2}", 1e10),
            ]);
            strip_caret_duplicates(&mut map);
            map
        }
        DimensionKind::MomentumTransfer => {
            let mut map = literal_units(&[
                ("Å^{-1}", 1.0),
                ("cm^{-1}", 1e-8),
                ("10^{-3} Å^{-1}", 1e-3),
                ("m^{-1}", 1e-10),
                ("nm^{-1}", 0.1),
                ("mm^{-1}", 1e-7),
            ]);
            strip_caret_duplicates(&mut map);
            map
        }
        DimensionKind::SpinEchoLength => literal_units(&[("Å^{-2} cm^{-1}", 1.0)]),
    }
}

/// Every accepted spelling of a metric unit: the word, its capitalized
/// form and its abbreviation, each bare, plural, and with every SI
/// prefix attached directly (`nanometer`, `nm`) or through `*`
/// (`nano*meter`). Insertion order matters where spellings collide.
pub fn build_metric_unit_names(word: &str, abbreviation: &str) -> ScaleMap {
    let mut map = ScaleMap::new();
    map.insert(abbreviation.to_string(), 1.0);
    for name in [word.to_string(), capitalize(word), abbreviation.to_string()] {
        map.insert(name.clone(), 1.0);
        map.insert(format!("{}s", name), 1.0);
        for prefixes in [&LONG_PREFIXES[..], &SHORT_PREFIXES[..]] {
            for &(prefix, scale) in prefixes {
                map.insert(format!("{}{}", prefix, name), scale);
            }
            for &(prefix, scale) in prefixes {
                map.insert(format!("{}*{}", prefix, name), scale);
            }
            for &(prefix, scale) in prefixes {
                map.insert(format!("{}{}s", prefix, name), scale);
            }
        }
    }
    map
}

/// Singular and plural names for units without prefix support
pub fn build_plural_units(units: &[(&str, f64)]) -> ScaleMap {
    let mut map = literal_units(units);
    for &(name, scale) in units {
        map.insert(format!("{}s", name), scale);
    }
    map
}

/// Add a caret-free twin of every key containing `^`. This also turns
/// `10^{-6}` into `10{-6}`, which never collides with a real name.
pub fn strip_caret_duplicates(map: &mut ScaleMap) {
    let stripped: Vec<(String, f64)> = map
        .iter()
        .filter(|(name, _)| name.contains('^'))
        .map(|(name, &scale)| (name.replace('^', ""), scale))
        .collect();
    map.extend(stripped);
}

fn literal_units(units: &[(&str, f64)]) -> ScaleMap {
    units
        .iter()
        .map(|&(name, scale)| (name.to_string(), scale))
        .collect()
}

/// First character upper-cased, the rest lower-cased
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
