use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const MAX_PRICE: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > MAX_PRICE {
        let mut err = ValidationError::new("range");
        err.message = Some("Price must be between 0 and 50.000".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "name": "Elden Ring",
    "price": 59.95,
    "description": "Open world action RPG",
    "stock": 40
}))]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    #[validate(custom = "validate_price")]
    pub price: Decimal,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(range(min = 1, max = 100000))]
    pub stock: i32,
}

/// Product as returned by the API, also nested inside games, monitors and purchases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub description: String,
    pub stock: i32,
}

impl From<&ProductResponse> for ProductRequest {
    fn from(response: &ProductResponse) -> Self {
        Self {
            name: response.name.clone(),
            description: response.description.clone(),
            price: response.price,
            stock: response.stock,
        }
    }
}

impl super::Identified for ProductResponse {
    fn id(&self) -> i32 {
        self.id
    }
}
