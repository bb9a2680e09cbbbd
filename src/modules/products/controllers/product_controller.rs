//! Server-rendered product pages
//!
//! Actions return an [`ActionResult`] descriptor; rendering and redirects are
//! handled by its `Responder` implementation.

use std::sync::Arc;

use actix_web::web;

use crate::core::{AppError, ModelState, Repository};
use crate::modules::products::models::{Product, ProductForm};
use crate::modules::products::views::{
    ActionResult, ProductView, ViewModel, ViewResult, PAGES_SCOPE,
};

/// Product page controller
#[derive(Clone)]
pub struct ProductsController {
    repository: Arc<dyn Repository<Product>>,
}

impl ProductsController {
    pub fn new(repository: Arc<dyn Repository<Product>>) -> Self {
        Self { repository }
    }

    /// GET /products
    pub async fn index(&self) -> Result<ActionResult, AppError> {
        let products = self.repository.get_all().await?;
        Ok(ActionResult::view(
            ProductView::Index,
            ViewModel::Products(products),
        ))
    }

    /// GET /products/details/{id}
    pub async fn details(&self, id: Option<i32>) -> Result<ActionResult, AppError> {
        self.product_page(id, ProductView::Details).await
    }

    /// GET /products/create
    pub fn create(&self) -> ActionResult {
        ActionResult::view(ProductView::Create, ViewModel::Empty)
    }

    /// POST /products/create
    pub async fn create_post(
        &self,
        product: Product,
        model_state: &ModelState,
    ) -> Result<ActionResult, AppError> {
        if !model_state.is_valid() {
            return Ok(ActionResult::View(
                ViewResult::new(ProductView::Create, ViewModel::Product(product))
                    .with_errors(model_state.errors().to_vec()),
            ));
        }

        let created = self.repository.create(product).await?;
        tracing::info!(product_id = created.id, "Product created");

        Ok(ActionResult::redirect_to_index())
    }

    /// GET /products/edit/{id}
    pub async fn edit(&self, id: Option<i32>) -> Result<ActionResult, AppError> {
        self.product_page(id, ProductView::Edit).await
    }

    /// POST /products/edit/{id}
    ///
    /// Sends the update without probing for the record first.
    pub async fn edit_post(
        &self,
        id: i32,
        product: Product,
        model_state: &ModelState,
    ) -> Result<ActionResult, AppError> {
        if id != product.id {
            return Ok(ActionResult::NotFound);
        }

        if !model_state.is_valid() {
            return Ok(ActionResult::View(
                ViewResult::new(ProductView::Edit, ViewModel::Product(product))
                    .with_errors(model_state.errors().to_vec()),
            ));
        }

        self.repository.update(&product).await?;
        tracing::info!(product_id = id, "Product updated");

        Ok(ActionResult::redirect_to_index())
    }

    /// GET /products/delete/{id}
    pub async fn delete(&self, id: Option<i32>) -> Result<ActionResult, AppError> {
        self.product_page(id, ProductView::Delete).await
    }

    /// POST /products/delete/{id}
    ///
    /// A product that is already gone is not an error; the user lands on the
    /// list either way.
    pub async fn delete_confirmed(&self, id: i32) -> Result<ActionResult, AppError> {
        if let Some(product) = self.repository.get_by_id(id).await? {
            self.repository.delete(&product).await?;
            tracing::info!(product_id = id, "Product deleted");
        }

        Ok(ActionResult::redirect_to_index())
    }

    /// True when the store holds a product with this id
    pub async fn product_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.repository.get_by_id(id).await?.is_some())
    }

    async fn product_page(
        &self,
        id: Option<i32>,
        view: ProductView,
    ) -> Result<ActionResult, AppError> {
        let Some(id) = id else {
            return Ok(ActionResult::redirect_to_index());
        };

        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(ActionResult::view(view, ViewModel::Product(product))),
            None => Ok(ActionResult::NotFound),
        }
    }
}

pub async fn index(
    controller: web::Data<ProductsController>,
) -> Result<ActionResult, AppError> {
    controller.index().await
}

pub async fn details(
    controller: web::Data<ProductsController>,
    path: Option<web::Path<i32>>,
) -> Result<ActionResult, AppError> {
    controller.details(path.map(|p| p.into_inner())).await
}

pub async fn create(controller: web::Data<ProductsController>) -> ActionResult {
    controller.create()
}

pub async fn create_post(
    controller: web::Data<ProductsController>,
    form: web::Form<ProductForm>,
) -> Result<ActionResult, AppError> {
    let (product, model_state) = form.into_inner().bind();
    controller.create_post(product, &model_state).await
}

pub async fn edit(
    controller: web::Data<ProductsController>,
    path: Option<web::Path<i32>>,
) -> Result<ActionResult, AppError> {
    controller.edit(path.map(|p| p.into_inner())).await
}

pub async fn edit_post(
    controller: web::Data<ProductsController>,
    path: web::Path<i32>,
    form: web::Form<ProductForm>,
) -> Result<ActionResult, AppError> {
    let (product, model_state) = form.into_inner().bind();
    controller
        .edit_post(path.into_inner(), product, &model_state)
        .await
}

pub async fn delete(
    controller: web::Data<ProductsController>,
    path: Option<web::Path<i32>>,
) -> Result<ActionResult, AppError> {
    controller.delete(path.map(|p| p.into_inner())).await
}

pub async fn delete_confirmed(
    controller: web::Data<ProductsController>,
    path: web::Path<i32>,
) -> Result<ActionResult, AppError> {
    controller.delete_confirmed(path.into_inner()).await
}

/// Configure product page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(PAGES_SCOPE)
            .route("", web::get().to(index))
            .route("/details", web::get().to(details))
            .route("/details/{id}", web::get().to(details))
            .route("/create", web::get().to(create))
            .route("/create", web::post().to(create_post))
            .route("/edit", web::get().to(edit))
            .route("/edit/{id}", web::get().to(edit))
            .route("/edit/{id}", web::post().to(edit_post))
            .route("/delete", web::get().to(delete))
            .route("/delete/{id}", web::get().to(delete))
            .route("/delete/{id}", web::post().to(delete_confirmed)),
    );
}
