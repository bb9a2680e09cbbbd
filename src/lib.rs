//! Product Catalog Library
//!
//! A product catalog served two ways, as a JSON API and as server-rendered
//! pages, both on top of one generic repository.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use modules::health;
pub use modules::products;
