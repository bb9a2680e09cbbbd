// Product entity
//
// The only entity the catalog exposes. Identifier assignment belongs to the
// store; price is fixed-point and stored as DECIMAL(18,2).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;
use sqlx::FromRow;
use validator::Validate;

use crate::core::store::MySqlEntity;
use crate::core::Entity;

/// Product catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(default)]
pub struct Product {
    pub id: i32,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Name is required and must be at most 200 characters"
    ))]
    pub name: String,

    /// Non-negative by convention only. Written as an exact JSON number;
    /// numbers and numeric strings are both accepted on input.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,

    pub stock: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
        }
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> i32 {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }
}

impl MySqlEntity for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "price", "stock"];

    fn bind_columns<'q>(
        &'q self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query.bind(&self.name).bind(self.price).bind(self.stock)
    }
}
