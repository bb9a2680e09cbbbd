use actix_web::body::BoxBody;
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};

use super::html;
use crate::core::FieldError;
use crate::modules::products::models::Product;

/// Scope the HTML pages are mounted under
pub const PAGES_SCOPE: &str = "/products";

/// Name of the list action, the target of every redirect
pub const INDEX_ACTION: &str = "Index";

/// Page templates the product controller can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductView {
    Index,
    Details,
    Create,
    Edit,
    Delete,
}

impl ProductView {
    pub fn name(&self) -> &'static str {
        match self {
            ProductView::Index => "Index",
            ProductView::Details => "Details",
            ProductView::Create => "Create",
            ProductView::Edit => "Edit",
            ProductView::Delete => "Delete",
        }
    }
}

/// Data handed to a view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Empty,
    Product(Product),
    Products(Vec<Product>),
}

impl ViewModel {
    pub fn product(&self) -> Option<&Product> {
        match self {
            ViewModel::Product(product) => Some(product),
            _ => None,
        }
    }

    pub fn products(&self) -> Option<&[Product]> {
        match self {
            ViewModel::Products(products) => Some(products),
            _ => None,
        }
    }
}

/// "Render this view with this model"
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult {
    pub view: ProductView,
    pub model: ViewModel,
    pub errors: Vec<FieldError>,
}

impl ViewResult {
    pub fn new(view: ProductView, model: ViewModel) -> Self {
        Self {
            view,
            model,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}

/// Outcome of a page action, turned into a response by the HTTP layer
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    View(ViewResult),
    RedirectToAction { action_name: &'static str },
    NotFound,
}

impl ActionResult {
    pub fn view(view: ProductView, model: ViewModel) -> Self {
        ActionResult::View(ViewResult::new(view, model))
    }

    pub fn redirect_to_index() -> Self {
        ActionResult::RedirectToAction {
            action_name: INDEX_ACTION,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ActionResult::View(_) => StatusCode::OK,
            ActionResult::RedirectToAction { .. } => StatusCode::FOUND,
            ActionResult::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// URL of a named page action without route values
pub fn action_path(action_name: &str) -> String {
    if action_name == INDEX_ACTION {
        PAGES_SCOPE.to_string()
    } else {
        format!("{}/{}", PAGES_SCOPE, action_name.to_lowercase())
    }
}

impl Responder for ActionResult {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status = self.status_code();
        match self {
            ActionResult::View(view) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(html::render(&view)),
            ActionResult::RedirectToAction { action_name } => HttpResponse::build(status)
                .insert_header((header::LOCATION, action_path(action_name)))
                .finish(),
            ActionResult::NotFound => HttpResponse::build(status).finish(),
        }
    }
}
