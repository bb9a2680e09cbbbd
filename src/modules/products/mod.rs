// Products module

pub mod controllers;
pub mod models;
pub mod views;

use std::sync::Arc;

use actix_web::web;

use crate::core::Repository;

pub use controllers::{ProductsApiController, ProductsController};
pub use models::{Category, Product, ProductForm};
pub use views::{ActionResult, ProductView, ViewModel, ViewResult};

/// Register both product surfaces against one repository
pub fn configure(
    repository: Arc<dyn Repository<Product>>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(ProductsApiController::new(repository.clone())))
            .app_data(web::Data::new(ProductsController::new(repository)))
            .configure(controllers::product_api_controller::configure)
            .configure(controllers::product_controller::configure);
    }
}
