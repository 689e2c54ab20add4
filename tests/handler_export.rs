mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use domain_scout::api::handlers::export_handler;
use sqlx::SqlitePool;

fn test_server(state: domain_scout::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/domains/export", get(export_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_csv_export_header_and_nulls(pool: SqlitePool) {
    common::seed_scored(&pool, "aa.io", 8.0, 6.0, 7.0, 9.0).await;
    common::seed_domain(&pool, "bb.dev").await;

    let server = test_server(common::create_test_state(pool));
    let response = server.get("/api/domains/export").await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    assert!(
        response
            .header("content-disposition")
            .to_str()
            .unwrap()
            .contains("domains.csv")
    );

    let body = response.text();
    let mut lines = body.lines();
    assert_eq!(
        lines.next().unwrap(),
        "domain,memorability,pronunciation,visual_appeal,brandability,average_score,price,price_type"
    );
    assert_eq!(lines.next().unwrap(), "aa.io,8.0,6.0,7.0,9.0,7.5,,");
    // Null fields render as empty strings.
    assert_eq!(lines.next().unwrap(), "bb.dev,,,,,,,");
}

#[sqlx::test]
async fn test_csv_export_of_empty_store_is_header_only(pool: SqlitePool) {
    let server = test_server(common::create_test_state(pool));
    let response = server.get("/api/domains/export").await;

    response.assert_status_ok();
    let body = response.text();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(
        lines,
        vec![
            "domain,memorability,pronunciation,visual_appeal,brandability,average_score,price,price_type"
        ]
    );
}

#[sqlx::test]
async fn test_json_export_preserves_nulls(pool: SqlitePool) {
    common::seed_domain(&pool, "bb.dev").await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains/export")
        .add_query_param("format", "json")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-disposition")
            .to_str()
            .unwrap()
            .contains("domains.json")
    );

    let json: serde_json::Value = serde_json::from_str(&response.text()).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain"], "bb.dev");
    assert!(items[0]["average_score"].is_null());
}

#[sqlx::test]
async fn test_export_respects_filters_and_sort(pool: SqlitePool) {
    common::seed_scored(&pool, "aa.io", 9.0, 9.0, 9.0, 9.0).await;
    common::seed_scored(&pool, "bb.io", 3.0, 3.0, 3.0, 3.0).await;
    common::seed_scored(&pool, "cc.dev", 8.0, 8.0, 8.0, 8.0).await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains/export")
        .add_query_param("tld", "io")
        .add_query_param("sort_by", "average_score")
        .add_query_param("sort_dir", "asc")
        .await;

    let body = response.text();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("bb.io,"));
    assert!(lines[2].starts_with("aa.io,"));
}

#[sqlx::test]
async fn test_unknown_format_defaults_to_csv(pool: SqlitePool) {
    common::seed_domain(&pool, "aa.io").await;

    let server = test_server(common::create_test_state(pool));
    let response = server
        .get("/api/domains/export")
        .add_query_param("format", "xlsx")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
}
