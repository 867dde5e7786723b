use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::server::{model::category::CategoryParams, service::category::CategoryService};

/// Tests that deleting a referenced category is an integrity error, not NotFound.
#[tokio::test]
async fn delete_referenced_category_is_integrity_error() -> Result<(), AppError> {
    let test = catalog().await;
    let (category, _) = factory::helpers::create_product_with_category(db(&test)).await?;

    let service = CategoryService::new(db(&test));
    let result = service.delete(category.id).await;

    assert!(matches!(result, Err(AppError::DatabaseIntegrity(_))));
    assert_eq!(entity::prelude::Category::find().count(db(&test)).await?, 1);

    Ok(())
}

/// Tests deleting an unreferenced category and then a missing one.
#[tokio::test]
async fn delete_unreferenced_then_missing() -> Result<(), AppError> {
    let test = catalog().await;
    let category = factory::create_category(db(&test)).await?;

    let service = CategoryService::new(db(&test));
    service.delete(category.id).await?;

    expect_not_found(service.delete(category.id).await);

    Ok(())
}

/// Tests the full listing plus create and update.
#[tokio::test]
async fn create_update_and_list() -> Result<(), AppError> {
    let test = catalog().await;

    let service = CategoryService::new(db(&test));
    let books = service
        .create(CategoryParams {
            name: "Books".to_string(),
        })
        .await?;
    service
        .create(CategoryParams {
            name: "Games".to_string(),
        })
        .await?;
    let renamed = service
        .update(
            books.id,
            CategoryParams {
                name: "Comics".to_string(),
            },
        )
        .await?;

    let all = service.get_all().await?;

    assert_eq!(renamed.id, books.id);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Comics");
    expect_not_found(
        service
            .update(
                1000,
                CategoryParams {
                    name: "None".to_string(),
                },
            )
            .await,
    );

    Ok(())
}
