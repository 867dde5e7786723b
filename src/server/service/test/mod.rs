use crate::server::error::AppError;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod category;

async fn catalog() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}

/// Unwraps a `NotFound` error message, failing the test for any other outcome.
fn expect_not_found<T: std::fmt::Debug>(result: Result<T, AppError>) -> String {
    match result {
        Err(AppError::NotFound(msg)) => msg,
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn store_errors_translate_to_domain_errors() -> Result<(), DbErr> {
    use crate::server::service::translate_db_err;

    assert!(matches!(
        translate_db_err(DbErr::RecordNotFound("Id not found 3".to_string())),
        AppError::NotFound(msg) if msg == "Id not found 3"
    ));
    assert!(matches!(
        translate_db_err(DbErr::RecordNotUpdated),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        translate_db_err(DbErr::Custom("boom".to_string())),
        AppError::DbErr(_)
    ));

    let test = catalog().await;
    let (category, _) = factory::helpers::create_product_with_category(db(&test)).await?;
    let err = entity::prelude::Category::delete_by_id(category.id)
        .exec(db(&test))
        .await
        .unwrap_err();

    assert!(matches!(translate_db_err(err), AppError::DatabaseIntegrity(_)));

    Ok(())
}
