pub mod config;
pub mod error;

pub use config::CalcConfig;
pub use error::{DamageError, Result};
