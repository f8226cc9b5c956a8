use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog part definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub buyer_identifier: String,

    pub supplier_identifier: String,

    pub buyer_part_number: String,

    pub description: String,

    pub price: f64,

    pub dimensions: String,

    pub created_date: DateTime<Utc>,

    pub updated_date: DateTime<Utc>,
}

impl Product {
    pub fn new(
        buyer_identifier: impl Into<String>,
        supplier_identifier: impl Into<String>,
        buyer_part_number: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        dimensions: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            buyer_identifier: buyer_identifier.into(),
            supplier_identifier: supplier_identifier.into(),
            buyer_part_number: buyer_part_number.into(),
            description: description.into(),
            price,
            dimensions: dimensions.into(),
            created_date: now,
            updated_date: now,
        }
    }
}
