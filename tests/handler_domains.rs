mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use domain_scout::api::handlers::domain_list_handler;
use sqlx::SqlitePool;

fn test_server(state: domain_scout::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/domains", get(domain_list_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_list_all_default_order(pool: SqlitePool) {
    common::seed_scored(&pool, "aa.io", 9.0, 9.0, 9.0, 9.0).await;
    common::seed_scored(&pool, "bb.dev", 3.0, 3.0, 3.0, 3.0).await;
    common::seed_domain(&pool, "cc.app").await;

    let server = test_server(common::create_test_state(pool));
    let response = server.get("/api/domains").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);

    // Default sort: average_score descending, unscored last.
    assert_eq!(items[0]["domain"], "aa.io");
    assert_eq!(items[1]["domain"], "bb.dev");
    assert_eq!(items[2]["domain"], "cc.app");
    assert!(items[2]["average_score"].is_null());
}

#[sqlx::test]
async fn test_search_is_case_insensitive(pool: SqlitePool) {
    common::seed_domain(&pool, "abc.io").await;
    common::seed_domain(&pool, "xyz.dev").await;

    let server = test_server(common::create_test_state(pool));
    let response = server.get("/api/domains").add_query_param("search", "AB").await;

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "abc.io");
}

#[sqlx::test]
async fn test_tld_filter_matches_suffix_only(pool: SqlitePool) {
    common::seed_domain(&pool, "aa.io").await;
    common::seed_domain(&pool, "io.dev").await;

    let server = test_server(common::create_test_state(pool));
    let response = server.get("/api/domains").add_query_param("tld", "io").await;

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "aa.io");
}

#[sqlx::test]
async fn test_min_score_excludes_unscored(pool: SqlitePool) {
    common::seed_scored(&pool, "aa.io", 9.0, 9.0, 9.0, 9.0).await;
    common::seed_scored(&pool, "bb.dev", 3.0, 3.0, 3.0, 3.0).await;
    common::seed_domain(&pool, "cc.app").await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains")
        .add_query_param("min_score", "5")
        .await;

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "aa.io");
}

#[sqlx::test]
async fn test_combined_filters_can_return_empty(pool: SqlitePool) {
    common::seed_scored(&pool, "aa.io", 9.0, 9.0, 9.0, 9.0).await;
    common::seed_scored(&pool, "bb.dev", 3.0, 3.0, 3.0, 3.0).await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains")
        .add_query_param("min_score", "5")
        .add_query_param("tld", "dev")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_price_filters(pool: SqlitePool) {
    common::seed_priced(&pool, "aa.io", Some(12.0), "Standard").await;
    common::seed_priced(&pool, "bb.io", Some(2500.0), "Premium").await;
    common::seed_priced(&pool, "cc.io", None, "Taken").await;
    common::seed_domain(&pool, "dd.io").await;

    let server = test_server(common::create_test_state(pool));

    let response = server
        .get("/api/domains")
        .add_query_param("priced_only", "true")
        .await;
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 3);

    let response = server
        .get("/api/domains")
        .add_query_param("price_type", "Standard")
        .await;
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "aa.io");

    let response = server
        .get("/api/domains")
        .add_query_param("max_price", "100")
        .await;
    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "aa.io");
}

#[sqlx::test]
async fn test_max_price_zero_means_no_limit(pool: SqlitePool) {
    common::seed_priced(&pool, "aa.io", Some(12.0), "Standard").await;
    common::seed_priced(&pool, "bb.io", Some(2500.0), "Premium").await;
    common::seed_domain(&pool, "cc.io").await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains")
        .add_query_param("max_price", "0")
        .await;

    // Sentinel: returns everything, including unpriced records.
    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[sqlx::test]
async fn test_nulls_sort_last_in_both_directions(pool: SqlitePool) {
    common::seed_scored(&pool, "hi.io", 9.0, 9.0, 9.0, 9.0).await;
    common::seed_scored(&pool, "lo.io", 2.0, 2.0, 2.0, 2.0).await;
    common::seed_domain(&pool, "na.io").await;

    let server = test_server(common::create_test_state(pool));

    let response = server
        .get("/api/domains")
        .add_query_param("sort_by", "average_score")
        .add_query_param("sort_dir", "asc")
        .await;
    let json = response.json::<serde_json::Value>();
    let domains: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["domain"].as_str().unwrap())
        .collect();
    assert_eq!(domains, vec!["lo.io", "hi.io", "na.io"]);

    let response = server
        .get("/api/domains")
        .add_query_param("sort_by", "average_score")
        .add_query_param("sort_dir", "desc")
        .await;
    let json = response.json::<serde_json::Value>();
    let domains: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["domain"].as_str().unwrap())
        .collect();
    assert_eq!(domains, vec!["hi.io", "lo.io", "na.io"]);
}

#[sqlx::test]
async fn test_malformed_params_are_coerced_not_rejected(pool: SqlitePool) {
    common::seed_scored(&pool, "aa.io", 9.0, 9.0, 9.0, 9.0).await;
    common::seed_domain(&pool, "bb.io").await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains")
        .add_query_param("min_score", "not-a-number")
        .add_query_param("max_price", "🤷")
        .add_query_param("sort_by", "drop table")
        .add_query_param("price_type", "Cheap")
        .await;

    // Everything degrades to defaults: full unfiltered listing.
    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 2);
}
