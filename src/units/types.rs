use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of physical dimensions a unit name can belong to
///
/// Serialized by its short name (`"length"`, `"q"`, `"se"`), so it can key
/// TOML tables directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum DimensionKind {
    Length,
    Time,
    Angle,
    Frequency,
    Temperature,
    Charge,
    /// Scattering length density
    Sld,
    /// Momentum transfer
    MomentumTransfer,
    SpinEchoLength,
}

impl DimensionKind {
    /// Lookup priority. A name present in several tables resolves to the
    /// earliest dimension in this list.
    pub const ALL: [DimensionKind; 9] = [
        DimensionKind::Length,
        DimensionKind::Time,
        DimensionKind::Angle,
        DimensionKind::Frequency,
        DimensionKind::Temperature,
        DimensionKind::Charge,
        DimensionKind::Sld,
        DimensionKind::MomentumTransfer,
        DimensionKind::SpinEchoLength,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DimensionKind::Length => "length",
            DimensionKind::Time => "time",
            DimensionKind::Angle => "angle",
            DimensionKind::Frequency => "frequency",
            DimensionKind::Temperature => "temperature",
            DimensionKind::Charge => "charge",
            DimensionKind::Sld => "sld",
            DimensionKind::MomentumTransfer => "q",
            DimensionKind::SpinEchoLength => "se",
        }
    }

    /// Position in [`DimensionKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DimensionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown dimension type: {}", s))
    }
}

impl TryFrom<String> for DimensionKind {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<DimensionKind> for String {
    fn from(kind: DimensionKind) -> Self {
        kind.name().to_string()
    }
}
