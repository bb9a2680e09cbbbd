pub mod product_api_controller;
pub mod product_controller;

pub use product_api_controller::ProductsApiController;
pub use product_controller::ProductsController;
