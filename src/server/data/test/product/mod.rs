use crate::server::{
    data::product::ProductRepository,
    model::{
        page::{PageRequest, SortDirection, SortOrder},
        product::{ProductParams, ProductSortField},
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::{prelude::Decimal, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;

fn params(category_ids: Vec<i32>) -> ProductParams {
    ProductParams {
        name: "PS5".to_string(),
        description: "The new generation PS5 video game".to_string(),
        price: Decimal::new(60000, 2),
        img_url: "https://img.com/ps5.png".to_string(),
        date: Utc.with_ymd_and_hms(2020, 7, 14, 10, 0, 0).unwrap(),
        category_ids,
    }
}

fn by(field: ProductSortField, direction: SortDirection) -> SortOrder<ProductSortField> {
    SortOrder { field, direction }
}
