use crate::config::UnitPreferences;
use crate::units::{parse_quantity, Converter, UnitError};
use toml::{map::Map, Value};

/// Convert quantity strings ("2000 mm") found in TOML metadata into
/// numbers, expressed in the preferred unit for their dimension.
pub struct UnitProcessor<'a> {
    preferences: &'a UnitPreferences,
}

/// Result of converting one quantity string
struct Converted {
    value: f64,
    unit: String,
}

impl<'a> UnitProcessor<'a> {
    pub fn new(preferences: &'a UnitPreferences) -> Self {
        Self { preferences }
    }

    /// Process a TOML Value, converting any quantity strings found.
    /// Inside a table, each converted `key` gets a `_{key}_units` sibling
    /// naming the unit of the new number.
    pub fn process_value(&self, value: &Value) -> Result<Value, UnitError> {
        match value {
            Value::String(s) => match self.convert_quantity(s)? {
                Some(converted) => Ok(Value::Float(converted.value)),
                None => Ok(value.clone()),
            },
            Value::Array(arr) => {
                let processed: Result<Vec<Value>, UnitError> =
                    arr.iter().map(|v| self.process_value(v)).collect();
                Ok(Value::Array(processed?))
            }
            Value::Table(table) => Ok(Value::Table(self.process_table(table)?)),
            _ => Ok(value.clone()),
        }
    }

    pub fn process_table(&self, table: &Map<String, Value>) -> Result<Map<String, Value>, UnitError> {
        let mut processed = Map::new();
        for (key, val) in table {
            if let Value::String(s) = val {
                if let Some(converted) = self.convert_quantity(s)? {
                    processed.insert(key.clone(), Value::Float(converted.value));
                    processed.insert(format!("_{}_units", key), Value::String(converted.unit));
                    continue;
                }
            }
            processed.insert(key.clone(), self.process_value(val)?);
        }
        Ok(processed)
    }

    /// `Ok(None)` when the string is not a quantity or its unit is not
    /// recognised; those are kept as text. An unusable preferred unit is
    /// an error.
    fn convert_quantity(&self, s: &str) -> Result<Option<Converted>, UnitError> {
        let quantity = match parse_quantity(s) {
            Some(q) => q,
            None => return Ok(None),
        };
        let converter = match Converter::new(&quantity.unit) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to parse unit in '{}': {}", s, e);
                return Ok(None);
            }
        };

        let target = converter
            .dimension()
            .and_then(|kind| self.preferences.preferred_unit(kind));
        match target {
            Some(unit) => Ok(Some(Converted {
                value: converter.apply(quantity.value, unit)?,
                unit: unit.to_string(),
            })),
            None => Ok(Some(Converted {
                value: quantity.value,
                unit: converter.base().to_string(),
            })),
        }
    }
}
