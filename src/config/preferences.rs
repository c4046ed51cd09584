use crate::units::{dimensions, standardize, DimensionKind, UnitError};
use std::collections::HashMap;

/// Preferred output unit per dimension, stored in canonical form
#[derive(Debug, Clone, Default)]
pub struct UnitPreferences {
    units: HashMap<DimensionKind, String>,
}

impl UnitPreferences {
    /// Prefer `unit` for values of `kind`. The unit must belong to that
    /// dimension's table.
    pub fn set(&mut self, kind: DimensionKind, unit: &str) -> Result<(), UnitError> {
        let canonical = standardize(unit);
        let dim = dimensions().get(kind);
        if !dim.contains(&canonical) {
            return Err(UnitError::not_in(
                canonical,
                dim.names().map(str::to_string).collect(),
            ));
        }
        self.units.insert(kind, canonical);
        Ok(())
    }

    pub fn preferred_unit(&self, kind: DimensionKind) -> Option<&str> {
        self.units.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
