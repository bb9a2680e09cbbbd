// Property-based tests for the repository contract
//
// Run against the in-memory adapter:
// - get_by_id(p.id) returns the same id and name for every stored product
// - get_all() length equals the number of stored records
// - ids absent from the store are reported as None, never as an error

use catalog::core::store::InMemoryRepository;
use catalog::core::Repository;
use catalog::products::Product;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
}

fn product_strategy() -> impl Strategy<Value = Product> {
    ("[A-Za-z][A-Za-z0-9 ]{0,40}", 0i64..10_000_000i64, 0i32..100_000i32).prop_map(
        |(name, cents, stock)| Product {
            id: 0,
            name,
            price: Decimal::new(cents, 2),
            stock,
        },
    )
}

proptest! {
    #[test]
    fn test_get_by_id_returns_created_product(
        products in prop::collection::vec(product_strategy(), 1..20)
    ) {
        let rt = runtime();
        let repo = InMemoryRepository::<Product>::new();

        let created: Vec<Product> = rt.block_on(async {
            let mut created = Vec::new();
            for product in products {
                created.push(repo.create(product).await.unwrap());
            }
            created
        });

        for product in &created {
            let found = rt.block_on(repo.get_by_id(product.id)).unwrap();
            let found = found.expect("created product must be found");
            prop_assert_eq!(found.id, product.id);
            prop_assert_eq!(&found.name, &product.name);
        }
    }

    #[test]
    fn test_get_all_length_matches_store(count in 0usize..30, deletions in 0usize..30) {
        let rt = runtime();
        let repo = InMemoryRepository::<Product>::new();

        let remaining = rt.block_on(async {
            let mut created = Vec::new();
            for i in 0..count {
                created.push(
                    repo.create(Product::new(format!("item-{}", i), Decimal::ONE, 1))
                        .await
                        .unwrap(),
                );
            }
            for product in created.iter().take(deletions) {
                repo.delete(product).await.unwrap();
            }
            count - deletions.min(count)
        });

        let all = rt.block_on(repo.get_all()).unwrap();
        prop_assert_eq!(all.len(), remaining);
        prop_assert_eq!(repo.len().unwrap(), remaining);
    }

    #[test]
    fn test_absent_id_is_none(count in 0usize..10, probe in 100i32..10_000i32) {
        let rt = runtime();
        let repo = InMemoryRepository::<Product>::new();

        rt.block_on(async {
            for i in 0..count {
                repo.create(Product::new(format!("item-{}", i), Decimal::ONE, 1))
                    .await
                    .unwrap();
            }
        });

        let result = rt.block_on(repo.get_by_id(probe));
        prop_assert!(matches!(result, Ok(None)));
    }
}
