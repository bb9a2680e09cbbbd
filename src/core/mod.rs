pub mod error;
pub mod store;
pub mod traits;
pub mod validation;

pub use error::{AppError, Result};
pub use traits::{Entity, Repository};
pub use validation::{FieldError, ModelState};
