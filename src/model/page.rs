use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page envelope wrapping one slice of a sorted listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    /// Size of the whole listing, independent of the requested window.
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page index.
    pub number: u64,
    /// Requested page size.
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: Vec<SortDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct SortDto {
    pub property: String,
    /// `ASC` or `DESC`
    pub direction: String,
}
