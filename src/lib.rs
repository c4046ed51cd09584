pub mod config;
pub mod metadata;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use units::{standardize, Converter, DimensionKind, UnitError};
