// Product API controller tests
//
// Each test configures a mocked repository, calls one controller action and
// checks the response descriptor plus the repository calls it made.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::body::to_bytes;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use catalog::core::AppError;
use catalog::products::{Product, ProductsApiController};
use helpers::{into_repository, MockProductRepository, TestDataFactory};
use mockall::predicate::eq;

fn controller(mock: MockProductRepository) -> ProductsApiController {
    ProductsApiController::new(into_repository(mock))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: HttpResponse) -> T {
    let bytes = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[actix_web::test]
async fn get_products_returns_ok_with_every_product() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_all()
        .times(1)
        .returning(|| Ok(TestDataFactory::products()));

    let response = controller(mock).get_products().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(response).await;
    assert_eq!(products.len(), 2);
}

#[actix_web::test]
async fn get_products_returns_ok_with_empty_list() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_all().returning(|| Ok(vec![]));

    let response = controller(mock).get_products().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(response).await;
    assert!(products.is_empty());
}

#[actix_web::test]
async fn get_product_with_unknown_id_returns_not_found() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_by_id()
        .with(eq(0))
        .times(1)
        .returning(|_| Ok(None));

    let response = controller(mock).get_product(0).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_product_with_known_id_returns_product() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(TestDataFactory::product(id))));

    let response = controller(mock).get_product(1).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = body_json(response).await;
    assert_eq!(product, TestDataFactory::product(1));
}

#[actix_web::test]
async fn put_product_with_mismatched_id_returns_bad_request() {
    let mut mock = MockProductRepository::new();
    mock.expect_update().never();

    let response = controller(mock)
        .put_product(2, TestDataFactory::product(1))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn put_product_updates_once_and_returns_no_content() {
    let product = TestDataFactory::product(1);
    let expected = product.clone();

    let mut mock = MockProductRepository::new();
    mock.expect_update()
        .withf(move |p: &Product| *p == expected)
        .times(1)
        .returning(|_| Ok(()));

    let response = controller(mock).put_product(1, product).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn put_product_does_not_check_existence_first() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_by_id().never();
    mock.expect_update().times(1).returning(|p| {
        Err(AppError::concurrency(format!("product {} no longer exists", p.id)))
    });

    let result = controller(mock)
        .put_product(1, TestDataFactory::product(1))
        .await;

    assert!(matches!(result, Err(AppError::Concurrency(_))));
}

#[actix_web::test]
async fn post_product_creates_once_and_returns_created_at_get_product() {
    let mut mock = MockProductRepository::new();
    mock.expect_create()
        .withf(|p: &Product| p.name == "Kalem")
        .times(1)
        .returning(Ok);

    let response = controller(mock)
        .post_product(TestDataFactory::product(1))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/products/1"
    );
    let product: Product = body_json(response).await;
    assert_eq!(product.id, 1);
}

#[actix_web::test]
async fn post_product_location_uses_store_assigned_id() {
    let mut mock = MockProductRepository::new();
    mock.expect_create().returning(|p| Ok(Product { id: 42, ..p }));

    let response = controller(mock)
        .post_product(TestDataFactory::new_product("Silgi"))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/products/42"
    );
}

#[actix_web::test]
async fn delete_product_with_unknown_id_returns_not_found() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_by_id()
        .with(eq(0))
        .returning(|_| Ok(None));
    mock.expect_delete().never();

    let response = controller(mock).delete_product(0).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_product_deletes_fetched_instance_once() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(TestDataFactory::product(id))));
    mock.expect_delete()
        .withf(|p: &Product| p.id == 1 && p.name == "Kalem")
        .times(1)
        .returning(|_| Ok(()));

    let response = controller(mock).delete_product(1).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn store_failures_propagate() {
    let mut mock = MockProductRepository::new();
    mock.expect_get_all()
        .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

    let result = controller(mock).get_products().await;

    assert!(matches!(result, Err(AppError::Database(_))));
}
