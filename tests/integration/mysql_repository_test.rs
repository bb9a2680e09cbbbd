// MySQL repository integration tests
//
// Require a reachable MySQL server (TEST_DATABASE_URL). Ignored by default;
// run with `cargo test --test mysql_repository_test -- --ignored --test-threads=1`.

#[path = "../helpers/mod.rs"]
mod helpers;

use catalog::core::store::MySqlRepository;
use catalog::core::{AppError, Repository};
use catalog::products::Product;
use helpers::{create_test_pool, truncate_products, TestDataFactory};
use rust_decimal_macros::dec;

async fn repository() -> MySqlRepository<Product> {
    let pool = create_test_pool().await;
    truncate_products(&pool).await;
    MySqlRepository::new(pool)
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_create_assigns_id_and_get_by_id_round_trips() {
    let repo = repository().await;

    let created = repo
        .create(TestDataFactory::new_product("Kalem"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let found = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Kalem");
    assert_eq!(found.price, dec!(12.50));
    assert_eq!(found.stock, 7);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_create_with_explicit_id_keeps_it() {
    let repo = repository().await;

    let created = repo.create(TestDataFactory::product(1)).await.unwrap();
    assert_eq!(created.id, 1);
    assert!(repo.get_by_id(1).await.unwrap().is_some());
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_get_all_counts_every_row() {
    let repo = repository().await;
    assert!(repo.get_all().await.unwrap().is_empty());

    for name in ["Kalem", "Defter", "Silgi"] {
        repo.create(TestDataFactory::new_product(name)).await.unwrap();
    }

    assert_eq!(repo.get_all().await.unwrap().len(), 3);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_update_replaces_fields() {
    let repo = repository().await;
    let mut product = repo
        .create(TestDataFactory::new_product("Kalem"))
        .await
        .unwrap();

    product.price = dec!(99.99);
    product.stock = 1;
    repo.update(&product).await.unwrap();

    // unchanged values are not a missing record
    repo.update(&product).await.unwrap();

    let found = repo.get_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(found.price, dec!(99.99));
    assert_eq!(found.stock, 1);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_update_and_delete_of_missing_record_are_concurrency_errors() {
    let repo = repository().await;
    let ghost = Product {
        id: 4242,
        ..TestDataFactory::new_product("Hayalet")
    };

    assert!(matches!(
        repo.update(&ghost).await,
        Err(AppError::Concurrency(_))
    ));
    assert!(matches!(
        repo.delete(&ghost).await,
        Err(AppError::Concurrency(_))
    ));
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_delete_removes_row() {
    let repo = repository().await;
    let product = repo
        .create(TestDataFactory::new_product("Kalem"))
        .await
        .unwrap();

    repo.delete(&product).await.unwrap();

    assert!(repo.get_by_id(product.id).await.unwrap().is_none());
}
