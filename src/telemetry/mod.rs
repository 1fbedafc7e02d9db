//! Telemetry
//!
//! Log hygiene for the client. Events are emitted through `tracing`; installing a
//! subscriber is left to the application.

pub mod logging;

pub use logging::{redact_token, redact_url, Redacted};
