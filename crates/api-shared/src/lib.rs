//! # API Shared
//!
//! Shared wire definitions for the showcase service.
//!
//! Contains:
//! - JSON request/response types (`wire` module) spoken by the REST server and the client
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`, `showcase-core` and `showcase-client` so both ends of the HTTP
//! conversation agree on field names.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
