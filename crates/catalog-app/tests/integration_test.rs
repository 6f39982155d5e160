use catalog_app::api::{ApiMethod, CatalogApi, MockCatalogApi};
use catalog_app::clients::ScreenHandle;
use catalog_app::config::CatalogConfig;
use catalog_app::lifecycle::CatalogSystem;
use catalog_app::model::{FormKind, ProductField};
use catalog_app::notify::Notice;
use serde_json::json;
use std::sync::Arc;

/// Both screens against one scripted backend, started and stopped through
/// the lifecycle orchestrator.
#[tokio::test]
async fn test_system_full_lifecycle() {
    let api = MockCatalogApi::new();
    let categories = json!([
        {"categoryId": 5, "categoryName": "Sữa", "sortOrder": 1, "isActive": true}
    ]);
    // Admin mount
    api.expect_list_products().return_ok(json!([
        {"productId": 1, "productName": "Sữa tươi", "productCode": "SU01", "categoryId": 5}
    ]));
    api.expect_list_categories().return_ok(categories.clone());
    // Browse mount
    api.expect_list_categories().return_ok(categories);
    api.expect_products_by_category()
        .return_ok(json!([{"productId": 1, "productName": "Sữa tươi", "price": 32000}]));
    // Create + reload
    api.expect_create_product().return_ok(json!({"productId": 2}));
    api.expect_list_products().return_ok(json!([
        {"productId": 1, "productName": "Sữa tươi", "productCode": "SU01", "categoryId": 5},
        {"productId": 2, "productName": "Sữa chua", "productCode": "SU02", "categoryId": 5}
    ]));

    let config = CatalogConfig {
        credentials: catalog_app::api::Credentials::bearer("token"),
        ..CatalogConfig::default()
    };
    let backend: Arc<dyn CatalogApi> = Arc::new(api.clone());
    let system = CatalogSystem::start(backend, &config, Some("5".into()));

    // Browse resolves on its own
    let browse = system.browse.wait_until_settled(1).await.unwrap();
    assert_eq!(browse.header().title, "Sữa");
    assert_eq!(browse.products.len(), 1);

    // Admin: add a product, then search for it
    system.admin.open_create().await.unwrap();
    system
        .admin
        .set_field(FormKind::Add, ProductField::Name, "Sữa chua")
        .await
        .unwrap();
    system
        .admin
        .set_field(FormKind::Add, ProductField::Code, "SU02")
        .await
        .unwrap();
    system.admin.submit(FormKind::Add).await.unwrap();
    system.admin.set_filter("su02").await.unwrap();

    let admin = system.admin.snapshot();
    assert_eq!(admin.products.len(), 2);
    assert_eq!(admin.filtered.len(), 1);
    assert_eq!(admin.filtered[0].product_name, "Sữa chua");
    assert_eq!(admin.notices, vec![Notice::ProductCreated]);

    // The browse screen does not see admin changes until it reloads
    assert_eq!(system.browse.snapshot().products.len(), 1);

    system.shutdown().await.unwrap();
    api.verify();
    assert_eq!(api.count(ApiMethod::ListProducts), 2);
    assert!(api.authorized().iter().all(|sent| *sent));
}

#[tokio::test]
async fn test_remount_reloads_admin_lists() {
    let api = MockCatalogApi::new();
    for _ in 0..2 {
        api.expect_list_products()
            .return_ok(json!([{"productId": 1, "productName": "Muối"}]));
        api.expect_list_categories().return_ok(json!([]));
    }
    api.expect_list_categories().return_ok(json!([]));

    let config = CatalogConfig {
        credentials: catalog_app::api::Credentials::bearer("token"),
        ..CatalogConfig::default()
    };
    let system = CatalogSystem::start(Arc::new(api.clone()), &config, None);

    system.admin.remount().await.unwrap();
    system.browse.wait_until_settled(1).await.unwrap();

    assert_eq!(api.count(ApiMethod::ListProducts), 2);
    system.shutdown().await.unwrap();
    api.verify();
}
