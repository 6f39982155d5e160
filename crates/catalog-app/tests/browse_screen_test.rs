use catalog_app::api::{ApiCall, ApiMethod, Credentials, MockCatalogApi};
use catalog_app::browse_screen::{self, Sidebar, DEFAULT_TITLE};
use catalog_app::clients::{BrowseClient, ScreenHandle};
use catalog_app::context::CatalogContext;
use catalog_app::model::CategoryId;
use catalog_app::notify::Notice;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

// --- Helpers ---

fn categories() -> Value {
    json!([
        {"categoryId": 1, "categoryName": "Đồ uống", "sortOrder": 2, "isActive": true,
         "notes": "Nước giải khát"},
        {"categoryId": 2, "categoryName": "Bánh kẹo", "sortOrder": 1, "isActive": true},
        {"categoryId": 3, "categoryName": "Ngừng bán", "sortOrder": 0, "isActive": false}
    ])
}

fn cards(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| json!({"productId": i + 1, "productName": name, "price": 10000}))
            .collect(),
    )
}

fn start(api: &MockCatalogApi, param: Option<&str>) -> BrowseClient {
    let (actor, client) = browse_screen::new(param.map(str::to_string), 16);
    let context = CatalogContext::new(Arc::new(api.clone()), Credentials::bearer("t"));
    tokio::spawn(actor.run(context));
    BrowseClient::new(client)
}

// --- Resolution ---

#[tokio::test]
async fn test_no_parameter_skips_product_fetch() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    let browse = start(&api, None);

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.categories.len(), 3);
    assert!(state.products.is_empty());
    assert_eq!(state.notice, None);
    assert_eq!(state.header().title, DEFAULT_TITLE);
    assert_eq!(api.count(ApiMethod::ProductsByCategory), 0);
    api.verify();
}

#[tokio::test]
async fn test_unknown_category_is_reported_without_product_fetch() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    let browse = start(&api, Some("7"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.notice, Some(Notice::CategoryNotFound));
    assert!(state.products.is_empty());
    assert!(state.current.is_none());
    assert_eq!(api.calls(), vec![ApiCall::ListCategories]);
}

#[tokio::test]
async fn test_matching_category_loads_its_products() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category()
        .return_ok(cards(&["Coca", "Pepsi"]));
    let browse = start(&api, Some("1"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.products.len(), 2);
    assert_eq!(state.products[0].product_name, "Coca");
    assert_eq!(state.notice, None);
    let header = state.header();
    assert_eq!(header.title, "Đồ uống");
    assert_eq!(header.description, "Nước giải khát");
    assert_eq!(
        api.calls(),
        vec![ApiCall::ListCategories, ApiCall::ProductsByCategory(CategoryId(1))]
    );

    let Sidebar::Links(links) = state.sidebar() else {
        panic!("expected sidebar links");
    };
    let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Tất cả sản phẩm", "Bánh kẹo", "Đồ uống"]);
    assert!(links[2].current);
}

#[tokio::test]
async fn test_category_with_null_audit_fields_still_resolves() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(json!([
        {"categoryId": 7, "categoryName": "Sữa", "isActive": true,
         "createdBy": null, "createdDate": null, "notes": null}
    ]));
    api.expect_products_by_category().return_ok(json!([
        {"productId": 1, "productName": "Sữa tươi", "productCode": null, "images": null}
    ]));
    let browse = start(&api, Some("7"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.notice, None);
    assert_eq!(state.current.map(|c| c.category_id), Some(CategoryId(7)));
    assert_eq!(state.products.len(), 1);
    api.verify();
}

#[tokio::test]
async fn test_param_match_is_exact_string() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    let browse = start(&api, Some("01"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.notice, Some(Notice::CategoryNotFound));
    assert_eq!(api.count(ApiMethod::ProductsByCategory), 0);
}

#[tokio::test]
async fn test_empty_category_notice() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category().return_ok(json!([]));
    let browse = start(&api, Some("2"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.notice, Some(Notice::EmptyCategory));
    assert_eq!(state.current.map(|c| c.category_id), Some(CategoryId(2)));
}

#[tokio::test]
async fn test_category_fetch_failure_shows_generic_notice() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_status(502);
    let browse = start(&api, Some("1"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.notice, Some(Notice::LoadFailed));
    assert!(!state.loading);
    assert_eq!(state.sidebar(), Sidebar::Placeholder);
}

#[tokio::test]
async fn test_product_fetch_failure_keeps_categories() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category().return_status(500);
    let browse = start(&api, Some("1"));

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.notice, Some(Notice::LoadFailed));
    assert_eq!(state.categories.len(), 3);
    assert!(state.products.is_empty());
}

#[tokio::test]
async fn test_non_list_products_are_a_load_failure() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category()
        .return_ok(json!({"message": "oops"}));
    let browse = start(&api, Some("1"));

    let state = browse.wait_until_settled(1).await.unwrap();
    assert_eq!(state.notice, Some(Notice::LoadFailed));
}

// --- Navigation ---

#[tokio::test]
async fn test_navigation_restarts_resolution() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category().return_ok(cards(&["Bánh quy"]));
    let browse = start(&api, None);
    browse.wait_until_settled(1).await.unwrap();

    let state = browse.open(Some("2".into())).await.unwrap();

    assert_eq!(state.generation, 2);
    assert_eq!(state.category_param.as_deref(), Some("2"));
    assert_eq!(state.products[0].product_name, "Bánh quy");
    api.verify();
}

#[tokio::test]
async fn test_empty_parameter_means_no_category() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_list_categories().return_ok(categories());
    let browse = start(&api, Some(""));
    let state = browse.wait_until_settled(1).await.unwrap();
    assert_eq!(state.category_param, None);

    let state = browse.open(Some(String::new())).await.unwrap();
    assert_eq!(state.notice, None);
    assert_eq!(api.count(ApiMethod::ProductsByCategory), 0);
}

#[tokio::test]
async fn test_stale_resolution_is_discarded() {
    let api = MockCatalogApi::new();
    // Mount (generation 1)
    api.expect_list_categories().return_ok(categories());
    // Generation 2: slow category fetch, superseded before it returns
    api.expect_list_categories()
        .delayed(Duration::from_millis(100))
        .return_ok(categories());
    // Generation 3
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category().return_ok(cards(&["Bánh quy"]));
    let browse = start(&api, None);
    browse.wait_until_settled(1).await.unwrap();

    let stale = browse.navigate(Some("1".into())).await.unwrap();
    let fresh = browse.navigate(Some("2".into())).await.unwrap();
    assert_eq!((stale, fresh), (2, 3));

    let state = browse.wait_until_settled(fresh).await.unwrap();
    assert_eq!(state.products[0].product_name, "Bánh quy");

    // Let the slow fetch land
    tokio::time::sleep(Duration::from_millis(150)).await;

    let state = browse.snapshot();
    assert_eq!(state.generation, 3);
    assert_eq!(state.category_param.as_deref(), Some("2"));
    assert_eq!(state.current.map(|c| c.category_id), Some(CategoryId(2)));
    assert_eq!(state.products.len(), 1);
    // The superseded run never reached its product fetch
    assert_eq!(
        api.calls()
            .iter()
            .filter(|c| **c == ApiCall::ProductsByCategory(CategoryId(1)))
            .count(),
        0
    );
    api.verify();
}

#[tokio::test]
async fn test_reload_reresolves_current_parameter() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category().return_status(500);
    api.expect_list_categories().return_ok(categories());
    api.expect_products_by_category().return_ok(cards(&["Coca"]));
    let browse = start(&api, Some("1"));
    let state = browse.wait_until_settled(1).await.unwrap();
    assert_eq!(state.notice, Some(Notice::LoadFailed));

    let generation = browse.reload().await.unwrap();
    let state = browse.wait_until_settled(generation).await.unwrap();

    assert_eq!(generation, 2);
    assert_eq!(state.notice, None);
    assert_eq!(state.products.len(), 1);
}

#[tokio::test]
async fn test_browse_works_without_credential() {
    let api = MockCatalogApi::new();
    api.expect_list_categories().return_ok(categories());
    let (actor, client) = browse_screen::new(None, 4);
    let context = CatalogContext::new(Arc::new(api.clone()), Credentials::anonymous());
    tokio::spawn(actor.run(context));
    let browse = BrowseClient::new(client);

    let state = browse.wait_until_settled(1).await.unwrap();

    assert_eq!(state.categories.len(), 3);
    assert_eq!(api.authorized(), vec![false]);
}
