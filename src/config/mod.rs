//! Configuration: environment-driven settings plus the named constants
//! shared by pagination, the HTTP boundary and the database layer.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
