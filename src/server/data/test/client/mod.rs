use crate::server::{
    data::client::ClientRepository,
    model::{
        client::{ClientParams, ClientSortField},
        page::{PageRequest, SortDirection, SortOrder},
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn params() -> ClientParams {
    ClientParams {
        name: "Jorge Amado".to_string(),
        cpf: "98765432100".to_string(),
        income: 2500.0,
        birth_date: NaiveDate::from_ymd_opt(1970, 8, 10).unwrap(),
    }
}
