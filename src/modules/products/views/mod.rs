pub mod action_result;
pub mod html;

pub use action_result::{
    action_path, ActionResult, ProductView, ViewModel, ViewResult, INDEX_ACTION, PAGES_SCOPE,
};
