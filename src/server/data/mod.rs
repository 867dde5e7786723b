//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! catalog entity. Repositories use SeaORM entity models internally and return domain models
//! to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so a service can run several of them
//! against one `DatabaseTransaction` when a write spans multiple statements.

pub mod category;
pub mod client;
pub mod product;
pub mod role;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{EntityTrait, QueryOrder, Select};

use crate::server::model::page::{SortDirection, SortField, SortOrder};

/// Maps a resource's sort field onto a column of entity `E`.
pub trait SortColumn<E: EntityTrait>: SortField {
    fn column(&self) -> E::Column;
}

/// Applies requested sort keys in order, then `tie_break` ascending.
///
/// The trailing primary key order keeps pages stable when sort values are equal.
pub fn apply_sort<E, F>(mut select: Select<E>, sort: &[SortOrder<F>], tie_break: E::Column) -> Select<E>
where
    E: EntityTrait,
    F: SortColumn<E>,
{
    for order in sort {
        select = match order.direction {
            SortDirection::Asc => select.order_by_asc(order.field.column()),
            SortDirection::Desc => select.order_by_desc(order.field.column()),
        };
    }

    select.order_by_asc(tie_break)
}
