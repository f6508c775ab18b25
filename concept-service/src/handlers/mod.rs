//! HTTP handlers for the concept service.

pub mod generate;
pub mod health;
pub mod metrics;

pub use generate::generate_concept;
pub use health::{health_check, status};
pub use self::metrics::metrics_endpoint;
