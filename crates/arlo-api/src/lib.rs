// arlo-api: Async Rust client for the Arlo cloud camera service

mod auth;
mod devices;
mod friends;

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ArloClient;
pub use devices::{CAMERA_OFFLINE_ERROR_CODE, CameraCommandOutcome};
pub use error::Error;
pub use transport::TransportConfig;
