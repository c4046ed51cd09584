pub mod preferences;
pub mod settings;

pub use preferences::*;
pub use settings::*;
