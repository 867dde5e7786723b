use crate::server::{
    data::user::UserRepository,
    model::{
        page::{PageRequest, SortDirection, SortOrder},
        user::{UserParams, UserSortField},
    },
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;

fn params(email: &str, role_ids: Vec<i32>) -> UserParams {
    UserParams {
        name: "Bob Green".to_string(),
        email: email.to_string(),
        role_ids,
    }
}

async fn stored_hash(db: &DatabaseConnection, id: i32) -> Result<Option<String>, DbErr> {
    let user = entity::prelude::User::find_by_id(id).one(db).await?;

    Ok(user.map(|u| u.password))
}
