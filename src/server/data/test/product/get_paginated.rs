use super::*;

/// Tests that totals reflect the whole table regardless of the page window.
///
/// Expected: Ok with 2 products on the page and 5 in total
#[tokio::test]
async fn returns_page_with_full_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_product(db).await?;
    }

    let repo = ProductRepository::new(db);
    let page = repo.get_paginated(&PageRequest::new(0, 2, Vec::new())).await?;

    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages(), 3);
    assert!(page.is_first());
    assert!(!page.is_last());

    Ok(())
}

/// Tests requesting a page index past the last page.
///
/// Expected: Ok with empty content and totals still populated
#[tokio::test]
async fn page_past_the_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_product(db).await?;
    }

    let repo = ProductRepository::new(db);
    let page = repo.get_paginated(&PageRequest::new(50, 10, Vec::new())).await?;

    assert!(page.is_empty());
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.number, 50);

    Ok(())
}

/// Tests sorting by name ascending on a fixed fixture.
///
/// Expected: "Macbook Pro", "PC Gamer", "PC Gamer Alfa" first, in that order
#[tokio::test]
async fn sorts_by_name_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_products_named(
        db,
        &["PC Gamer Alfa", "Smart TV", "Macbook Pro", "The Lord of the Rings", "PC Gamer"],
    )
    .await?;

    let repo = ProductRepository::new(db);
    let request = PageRequest::new(
        0,
        10,
        vec![by(ProductSortField::Name, SortDirection::Asc)],
    );
    let page = repo.get_paginated(&request).await?;

    let names: Vec<&str> = page.content.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(&names[..3], &["Macbook Pro", "PC Gamer", "PC Gamer Alfa"]);
    assert_eq!(page.sort, vec![("name", SortDirection::Asc)]);

    Ok(())
}

/// Tests that equal sort values keep insertion order.
///
/// Expected: products with the same price ordered by id, after the cheaper one
#[tokio::test]
async fn ties_break_on_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::product::ProductFactory::new(db)
        .price(Decimal::new(50000, 2))
        .build()
        .await?;
    let cheap = factory::product::ProductFactory::new(db)
        .price(Decimal::new(1000, 2))
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db)
        .price(Decimal::new(50000, 2))
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let request = PageRequest::new(
        0,
        10,
        vec![by(ProductSortField::Price, SortDirection::Asc)],
    );
    let page = repo.get_paginated(&request).await?;

    let ids: Vec<i32> = page.content.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![cheap.id, first.id, second.id]);

    Ok(())
}

/// Tests descending sort followed by a second key.
///
/// Expected: newest date first, equal dates ordered by name
#[tokio::test]
async fn applies_multiple_sort_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
    let new = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    factory::product::ProductFactory::new(db).name("B").date(new).build().await?;
    factory::product::ProductFactory::new(db).name("C").date(old).build().await?;
    factory::product::ProductFactory::new(db).name("A").date(new).build().await?;

    let repo = ProductRepository::new(db);
    let request = PageRequest::new(
        0,
        10,
        vec![
            by(ProductSortField::Date, SortDirection::Desc),
            by(ProductSortField::Name, SortDirection::Asc),
        ],
    );
    let page = repo.get_paginated(&request).await?;

    let names: Vec<&str> = page.content.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    Ok(())
}

/// Tests that every product on the page carries its own categories.
///
/// Expected: Ok with categories grouped per product
#[tokio::test]
async fn loads_categories_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let books = factory::category::CategoryFactory::new(db).name("Books").build().await?;
    let games = factory::category::CategoryFactory::new(db).name("Games").build().await?;
    let both = factory::product::ProductFactory::new(db)
        .category(books.id)
        .category(games.id)
        .build()
        .await?;
    let none = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let page = repo.get_paginated(&PageRequest::new(0, 10, Vec::new())).await?;

    let with_both = page.content.iter().find(|p| p.id == both.id).unwrap();
    let without = page.content.iter().find(|p| p.id == none.id).unwrap();
    let names: Vec<&str> = with_both.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Books", "Games"]);
    assert!(without.categories.is_empty());

    Ok(())
}
