use super::*;

/// Tests sorting clients by income descending.
///
/// Expected: Ok with the highest income first and the full total
#[tokio::test]
async fn sorts_by_income_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::client::ClientFactory::new(db).income(1000.0).build().await?;
    let high = factory::client::ClientFactory::new(db).income(9000.0).build().await?;
    let mid = factory::client::ClientFactory::new(db).income(4000.0).build().await?;

    let repo = ClientRepository::new(db);
    let request = PageRequest::new(
        0,
        2,
        vec![SortOrder {
            field: ClientSortField::Income,
            direction: SortDirection::Desc,
        }],
    );
    let page = repo.get_paginated(&request).await?;

    let ids: Vec<i32> = page.content.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![high.id, mid.id]);
    assert_eq!(page.total_elements, 3);

    let next = repo
        .get_paginated(&PageRequest::new(1, 2, request.sort.clone()))
        .await?;
    assert_eq!(next.content[0].id, low.id);
    assert!(next.is_last());

    Ok(())
}
