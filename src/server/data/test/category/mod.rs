use crate::server::{data::category::CategoryRepository, model::category::CategoryParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn params(name: &str) -> CategoryParams {
    CategoryParams {
        name: name.to_string(),
    }
}
