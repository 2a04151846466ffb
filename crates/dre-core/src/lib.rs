pub mod error;
pub mod types;

#[cfg(feature = "statement")]
pub mod statement;

#[cfg(feature = "scenarios")]
pub mod scenarios;

#[cfg(feature = "catalog")]
pub mod catalog;

pub use error::DreError;
pub use types::*;

/// Standard result type for all dre-core operations
pub type DreResult<T> = Result<T, DreError>;
