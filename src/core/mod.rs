//! Gab Core Components
//!
//! Core infrastructure shared by the OAuth2 flows and the resource services.

pub mod constants;
pub mod request;
pub mod transport;
pub mod validation;

pub use constants::*;
pub use request::*;
pub use transport::*;
