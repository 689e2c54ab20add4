#![allow(dead_code)]

use domain_scout::state::AppState;
use sqlx::SqlitePool;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool)
}

/// Inserts a bare, unenriched candidate record.
pub async fn seed_domain(pool: &SqlitePool, domain: &str) {
    sqlx::query("INSERT INTO domain_results (domain) VALUES (?)")
        .bind(domain)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a record with a complete score set; the average is the mean of
/// the four sub-scores.
pub async fn seed_scored(
    pool: &SqlitePool,
    domain: &str,
    memorability: f64,
    pronunciation: f64,
    visual_appeal: f64,
    brandability: f64,
) {
    let average = (memorability + pronunciation + visual_appeal + brandability) / 4.0;
    sqlx::query(
        r#"
        INSERT INTO domain_results
            (domain, memorability, pronunciation, visual_appeal, brandability,
             average_score, scored_at)
        VALUES (?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(domain)
    .bind(memorability)
    .bind(pronunciation)
    .bind(visual_appeal)
    .bind(brandability)
    .bind(average)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a record with a pricing result but no scores.
pub async fn seed_priced(pool: &SqlitePool, domain: &str, price: Option<f64>, price_type: &str) {
    sqlx::query(
        r#"
        INSERT INTO domain_results (domain, price, price_type, checked_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(domain)
    .bind(price)
    .bind(price_type)
    .execute(pool)
    .await
    .unwrap();
}

/// Marks an existing record's average score, leaving sub-scores null.
pub async fn set_average_score(pool: &SqlitePool, domain: &str, average: f64) {
    sqlx::query("UPDATE domain_results SET average_score = ? WHERE domain = ?")
        .bind(average)
        .bind(domain)
        .execute(pool)
        .await
        .unwrap();
}
