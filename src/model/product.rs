use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::category::CategoryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Assigned by the store; ignored on create and update.
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub img_url: String,
    pub date: DateTime<Utc>,
    /// On writes only the category ids are read; the set replaces the current one.
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}
