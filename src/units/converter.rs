use crate::units::error::UnitError;
use crate::units::standardize::standardize;
use crate::units::tables::{dimensions, Dimension};
use crate::units::types::DimensionKind;
use crate::units::value::Scalable;

/// Names accepted as "no known dimension". Values stored in these units
/// are never rescaled. The empty name also stands for a missing unit.
pub const DIMENSIONLESS_UNITS: [&str; 5] = ["", "???", "a.u.", "Counts", "counts"];

/// Where a canonical unit name landed in the dimension tables
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// The owning table and the name's scale in it
    Dimension(&'static Dimension, f64),
    Dimensionless,
    Unknown,
}

impl Resolution {
    pub fn dimension_kind(&self) -> Option<DimensionKind> {
        match self {
            Resolution::Dimension(dim, _) => Some(dim.kind()),
            _ => None,
        }
    }

    pub fn compatible_units(&self) -> Vec<String> {
        match self {
            Resolution::Dimension(dim, _) => dim.names().map(str::to_string).collect(),
            Resolution::Dimensionless => {
                DIMENSIONLESS_UNITS.iter().map(|s| s.to_string()).collect()
            }
            Resolution::Unknown => Vec::new(),
        }
    }
}

/// Look up an already standardized name
pub fn resolve(canonical: &str) -> Resolution {
    if let Some((dim, scale)) = dimensions().find(canonical) {
        Resolution::Dimension(dim, scale)
    } else if DIMENSIONLESS_UNITS.contains(&canonical) {
        Resolution::Dimensionless
    } else {
        Resolution::Unknown
    }
}

/// Converts values stored in one unit into other units of the same
/// dimension. The dimension is fixed when the converter is built.
///
/// ```text
/// let u = Converter::new("mili*metre")?;   // values stored in mm
/// let v = u.apply(3000.0, "m")?;           // 3.0
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    base: String,
    resolution: Resolution,
    scalebase: f64,
}

impl Converter {
    pub fn new(name: &str) -> Result<Self, UnitError> {
        let base = standardize(name);
        let resolution = resolve(&base);
        let scalebase = match resolution {
            Resolution::Dimension(_, scale) => scale,
            Resolution::Dimensionless => 1.0,
            Resolution::Unknown => return Err(UnitError::unknown(base)),
        };
        tracing::debug!(
            "unit '{}' -> '{}' ({})",
            name,
            base,
            resolution
                .dimension_kind()
                .map_or("dimensionless", DimensionKind::name)
        );
        Ok(Self {
            base,
            resolution,
            scalebase,
        })
    }

    /// Build from an optional `units` attribute; a missing attribute is
    /// treated as dimensionless.
    pub fn from_metadata(units: Option<&str>) -> Result<Self, UnitError> {
        Self::new(units.unwrap_or(""))
    }

    /// Canonical name of the stored unit
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn dimension(&self) -> Option<DimensionKind> {
        self.resolution.dimension_kind()
    }

    pub fn is_dimensionless(&self) -> bool {
        matches!(self.resolution, Resolution::Dimensionless)
    }

    /// Factor taking a value in the base unit to `target`. An empty
    /// target, or a dimensionless base, always gives 1.
    pub fn scale(&self, target: &str) -> Result<f64, UnitError> {
        let dim = match self.resolution {
            Resolution::Dimension(dim, _) if !target.is_empty() => dim,
            _ => return Ok(1.0),
        };
        let target = standardize(target);
        match dim.scale_of(&target) {
            Some(scale) => Ok(self.scalebase / scale),
            None => Err(UnitError::not_in(target, self.compatible_units())),
        }
    }

    /// Convert `value` into `target`. An empty target returns the value
    /// untouched.
    pub fn apply<V: Scalable>(&self, value: V, target: &str) -> Result<V, UnitError> {
        if target.is_empty() {
            return Ok(value);
        }
        let factor = self.scale(target)?;
        Ok(value.scaled(factor))
    }

    pub fn compatible_units(&self) -> Vec<String> {
        self.resolution.compatible_units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_tri_state() {
        assert!(matches!(resolve("mm"), Resolution::Dimension(..)));
        assert!(matches!(resolve("a.u."), Resolution::Dimensionless));
        assert!(matches!(resolve(""), Resolution::Dimensionless));
        assert!(matches!(resolve("help"), Resolution::Unknown));
    }

    #[test]
    fn test_resolve_carries_table_scale() {
        let cases = [
            ("mm", DimensionKind::Length, 1e-3),
            ("ms", DimensionKind::Length, 1.0),
            ("hours", DimensionKind::Time, 3600.0),
            ("cm^{-1}", DimensionKind::MomentumTransfer, 1e-8),
        ];
        for (name, kind, expected) in cases {
            match resolve(name) {
                Resolution::Dimension(dim, scale) => {
                    assert_eq!(dim.kind(), kind);
                    assert_eq!(Some(scale), dim.scale_of(name));
                    assert_relative_eq!(scale, expected, max_relative = 1e-12);
                }
                other => panic!("{} resolved to {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_dimension_of_base() {
        let cases = [
            ("mm", DimensionKind::Length),
            ("hours", DimensionKind::Time),
            ("degrees", DimensionKind::Angle),
            ("kHz", DimensionKind::Frequency),
            ("Kelvin", DimensionKind::Temperature),
            ("mC", DimensionKind::Charge),
            ("A^-2", DimensionKind::Sld),
            ("1/nm", DimensionKind::MomentumTransfer),
            ("A-2 cm-1", DimensionKind::SpinEchoLength),
        ];
        for (name, kind) in cases {
            let converter = Converter::new(name).unwrap();
            assert_eq!(converter.dimension(), Some(kind), "unit {}", name);
        }
    }

    #[test]
    fn test_ambiguous_name_takes_first_dimension() {
        assert_eq!(Converter::new("ms").unwrap().dimension(), Some(DimensionKind::Length));
        assert_eq!(
            Converter::new("minute").unwrap().dimension(),
            Some(DimensionKind::Angle)
        );
    }

    #[test]
    fn test_scale() {
        let converter = Converter::new("mm").unwrap();
        assert_relative_eq!(converter.scale("m").unwrap(), 1e-3);
        assert_relative_eq!(converter.scale("micron").unwrap(), 1e3, max_relative = 1e-12);
        assert_relative_eq!(converter.scale("Angstrom").unwrap(), 1e7, max_relative = 1e-12);
        assert_eq!(converter.scale("").unwrap(), 1.0);
    }

    #[test]
    fn test_angle_scale() {
        let converter = Converter::new("radians").unwrap();
        assert_relative_eq!(converter.scale("degrees").unwrap(), 180.0 / std::f64::consts::PI);
        assert_relative_eq!(
            converter.scale("arcmin").unwrap(),
            10800.0 / std::f64::consts::PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_scale_to_other_dimension_fails() {
        let converter = Converter::new("mm").unwrap();
        let err = converter.scale("seconds").unwrap_err();
        match err {
            UnitError::UnknownUnit { unit, compatible } => {
                assert_eq!(unit, "s");
                assert!(compatible.contains(&"mm".to_string()));
                assert!(compatible.contains(&"Å".to_string()));
            }
        }
    }

    #[test]
    fn test_dimensionless_ignores_target() {
        let converter = Converter::new("counts").unwrap();
        assert!(converter.is_dimensionless());
        assert_eq!(converter.scale("furlongs").unwrap(), 1.0);
        assert_eq!(converter.apply(7.0, "mm").unwrap(), 7.0);
    }

    #[test]
    fn test_from_metadata() {
        let missing = Converter::from_metadata(None).unwrap();
        assert!(missing.is_dimensionless());
        assert_eq!(missing.base(), "");
        let stored = Converter::from_metadata(Some("nanometers")).unwrap();
        assert_eq!(stored.base(), "nanom");
        assert_eq!(stored.dimension(), Some(DimensionKind::Length));
    }

    #[test]
    fn test_apply_preserves_shape() {
        let converter = Converter::new("mm").unwrap();
        let values = vec![1000.0, 2500.0];
        assert_eq!(converter.apply(values.clone(), "").unwrap(), values);
        let converted = converter.apply(values, "m").unwrap();
        assert_relative_eq!(converted[0], 1.0);
        assert_relative_eq!(converted[1], 2.5);
    }

    #[test]
    fn test_compatible_units() {
        let converter = Converter::new("Hz").unwrap();
        let units = converter.compatible_units();
        assert!(units.contains(&"Hz".to_string()));
        assert!(units.contains(&"rpm".to_string()));

        let dimensionless = Converter::new("a.u.").unwrap();
        assert_eq!(
            dimensionless.compatible_units(),
            vec!["", "???", "a.u.", "Counts", "counts"]
        );
        assert!(Resolution::Unknown.compatible_units().is_empty());
    }
}
