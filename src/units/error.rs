use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// A unit name that is not in any dimension table, or not in the
    /// table a converter was bound to. `compatible` lists the names that
    /// would have been accepted, and is empty when no dimension applies.
    #[error("{}", describe_unknown(.unit, .compatible))]
    UnknownUnit {
        unit: String,
        compatible: Vec<String>,
    },
}

impl UnitError {
    pub fn unknown(unit: impl Into<String>) -> Self {
        UnitError::UnknownUnit {
            unit: unit.into(),
            compatible: Vec::new(),
        }
    }

    pub fn not_in(unit: impl Into<String>, compatible: Vec<String>) -> Self {
        UnitError::UnknownUnit {
            unit: unit.into(),
            compatible,
        }
    }

    /// The standardized name that failed to resolve.
    pub fn unit(&self) -> &str {
        match self {
            UnitError::UnknownUnit { unit, .. } => unit,
        }
    }
}

fn describe_unknown(unit: &str, compatible: &[String]) -> String {
    if compatible.is_empty() {
        format!("Unknown unit {}", unit)
    } else {
        format!("{} not in {}", unit, compatible.join(", "))
    }
}
