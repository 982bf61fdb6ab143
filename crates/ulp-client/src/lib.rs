//! Client for the ULP backend-for-frontend used during teacher registration.

mod client;
mod error;
mod types;

pub use client::UlpClient;
pub use error::UlpError;
pub use types::*;
