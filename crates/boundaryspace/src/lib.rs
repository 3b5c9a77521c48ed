//! BoundarySpace core: relationship boundary tracking and compatibility
//! scoring. The scoring engine is pure and synchronous; the service and
//! router modules wrap it for use from an API layer without changing its
//! contracts.

pub mod compat;
pub mod config;
pub mod error;
pub mod telemetry;
