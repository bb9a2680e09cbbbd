//! Concrete repository adapters.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::{MySqlEntity, MySqlRepository};
