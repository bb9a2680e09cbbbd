//! JSON API for products
//!
//! Each action makes at most two repository calls and picks the status code.
//! Field validation is not performed here; only the path/body id check.

use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};

use crate::core::{AppError, Repository};
use crate::modules::products::models::Product;

/// Scope the API is mounted under
pub const API_SCOPE: &str = "/api/products";

/// Product JSON controller
#[derive(Clone)]
pub struct ProductsApiController {
    repository: Arc<dyn Repository<Product>>,
}

impl ProductsApiController {
    pub fn new(repository: Arc<dyn Repository<Product>>) -> Self {
        Self { repository }
    }

    /// GET /api/products
    pub async fn get_products(&self) -> Result<HttpResponse, AppError> {
        let products = self.repository.get_all().await?;
        Ok(HttpResponse::Ok().json(products))
    }

    /// GET /api/products/{id}
    pub async fn get_product(&self, id: i32) -> Result<HttpResponse, AppError> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(HttpResponse::Ok().json(product)),
            None => Ok(HttpResponse::NotFound().finish()),
        }
    }

    /// PUT /api/products/{id}
    ///
    /// No existence check: an id the store does not know is still sent to
    /// `update`, and whatever the store reports is returned.
    pub async fn put_product(&self, id: i32, product: Product) -> Result<HttpResponse, AppError> {
        if id != product.id {
            tracing::debug!(path_id = id, body_id = product.id, "Product id mismatch");
            return Ok(HttpResponse::BadRequest().finish());
        }

        self.repository.update(&product).await?;

        Ok(HttpResponse::NoContent().finish())
    }

    /// POST /api/products
    pub async fn post_product(&self, product: Product) -> Result<HttpResponse, AppError> {
        let created = self.repository.create(product).await?;

        tracing::info!(product_id = created.id, "Product created via API");

        Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, product_location(created.id)))
            .json(created))
    }

    /// DELETE /api/products/{id}
    pub async fn delete_product(&self, id: i32) -> Result<HttpResponse, AppError> {
        let Some(product) = self.repository.get_by_id(id).await? else {
            return Ok(HttpResponse::NotFound().finish());
        };

        self.repository.delete(&product).await?;

        tracing::info!(product_id = id, "Product deleted via API");
        Ok(HttpResponse::NoContent().finish())
    }
}

/// URL of the GET-by-id action for a product
pub fn product_location(id: i32) -> String {
    format!("{}/{}", API_SCOPE, id)
}

pub async fn get_products(
    controller: web::Data<ProductsApiController>,
) -> Result<HttpResponse, AppError> {
    controller.get_products().await
}

pub async fn get_product(
    controller: web::Data<ProductsApiController>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    controller.get_product(path.into_inner()).await
}

pub async fn put_product(
    controller: web::Data<ProductsApiController>,
    path: web::Path<i32>,
    body: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    controller
        .put_product(path.into_inner(), body.into_inner())
        .await
}

pub async fn post_product(
    controller: web::Data<ProductsApiController>,
    body: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    controller.post_product(body.into_inner()).await
}

pub async fn delete_product(
    controller: web::Data<ProductsApiController>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    controller.delete_product(path.into_inner()).await
}

/// Configure product API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_SCOPE)
            .route("", web::get().to(get_products))
            .route("", web::post().to(post_product))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(put_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
