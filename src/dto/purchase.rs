use super::{ProductResponse, UserResponse};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Accepts a plain date or a timestamp, keeping only the calendar date.
fn deserialize_purchase_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_purchase_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid purchaseDate '{raw}', expected YYYY-MM-DD or an RFC 3339 timestamp"
        ))
    })
}

pub fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|ts| ts.date())
        })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "purchaseDate": "2024-03-01",
    "userId": 1,
    "productId": 2
}))]
pub struct PurchaseRequest {
    #[serde(deserialize_with = "deserialize_purchase_date")]
    #[schema(value_type = String, format = Date)]
    pub purchase_date: NaiveDate,
    pub user_id: i32,
    pub product_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub id: i32,
    #[schema(value_type = String, format = Date)]
    pub purchase_date: NaiveDate,
    pub user_id: i32,
    pub product_id: i32,
    pub user: UserResponse,
    pub product: ProductResponse,
}

impl From<&PurchaseResponse> for PurchaseRequest {
    fn from(response: &PurchaseResponse) -> Self {
        Self {
            purchase_date: response.purchase_date,
            user_id: response.user_id,
            product_id: response.product_id,
        }
    }
}

impl super::Identified for PurchaseResponse {
    fn id(&self) -> i32 {
        self.id
    }
}
