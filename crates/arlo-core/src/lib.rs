// arlo-core: login -> fetch -> fan-out -> aggregate workflows for Arlo
// camera automation. Consumers build an `AccountConfig`, hand it to a
// `Controller`, and invoke one of the batch operations.

pub mod config;
pub mod controller;
pub mod error;

pub use config::{AccountConfig, DEFAULT_BASE_URL};
pub use controller::Controller;
pub use error::{CoreError, UnitError};
