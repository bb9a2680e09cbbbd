pub mod category;
pub mod product;
pub mod product_form;

pub use category::Category;
pub use product::Product;
pub use product_form::ProductForm;
