use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDate,
}
