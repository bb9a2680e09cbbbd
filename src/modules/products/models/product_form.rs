// Form binding for the product pages
//
// Browsers submit every field as text, including empty strings. Binding
// keeps going past unparsable fields and records them in the model state,
// so the page can be re-rendered instead of failing the request.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::Product;
use crate::core::ModelState;

/// Raw `application/x-www-form-urlencoded` product submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    /// Convert into a product plus every binding and validation error.
    pub fn bind(self) -> (Product, ModelState) {
        let mut state = ModelState::default();

        let price = parse_field::<Decimal>(&self.price, "price", "Price", &mut state);
        let stock = parse_field::<i32>(&self.stock, "stock", "Stock", &mut state);

        let product = Product {
            id: self.id,
            name: self.name.trim_end().to_string(),
            price,
            stock,
        };

        for error in ModelState::validate(&product).into_errors() {
            state.add_error(error.field, error.message);
        }

        (product, state)
    }
}

fn parse_field<T: FromStr + Default>(
    raw: &str,
    field: &str,
    label: &str,
    state: &mut ModelState,
) -> T {
    let raw = raw.trim();
    if raw.is_empty() {
        state.add_error(field, format!("The {} field is required.", label));
        return T::default();
    }
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            state.add_error(field, format!("The value '{}' is not valid for {}.", raw, label));
            T::default()
        }
    }
}
