use serde::{Deserialize, Serialize};

/// Product category. Seed data only; nothing queries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Rows inserted by the initial migration
    pub fn seed() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Kalemler".to_string(),
            },
            Category {
                id: 2,
                name: "Defterler".to_string(),
            },
        ]
    }
}
