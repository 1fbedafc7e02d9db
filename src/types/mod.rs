//! Gab Types
//!
//! Data structures shared by the flows, the transport and the resource services.

pub mod callback;
pub mod config;
pub mod envelope;
pub mod scope;
pub mod token;

pub use callback::*;
pub use config::*;
pub use envelope::*;
pub use scope::*;
pub use token::*;
