// Unit name standardization and scale conversion for NeXus-style metadata.
// Dimension tables are built once and shared; converters are cheap values.

pub mod converter;
pub mod detector;
pub mod error;
pub mod prefix;
pub mod standardize;
pub mod tables;
pub mod types;
pub mod value;


pub use converter::{resolve, Converter, Resolution, DIMENSIONLESS_UNITS};
pub use detector::{looks_like_quantity, parse_quantity, Quantity};
pub use error::UnitError;
pub use standardize::standardize;
pub use tables::{dimensions, Dimension, DimensionSet};
pub use types::DimensionKind;
pub use value::Scalable;
