//! SQLite implementation of the domain record repository.
//!
//! Filters arrive as structured [`DomainFilter`] values and are translated
//! into a dynamically built query; sort columns come from the whitelisted
//! [`SortKey`] enum, so no caller input reaches SQL as raw text.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use crate::domain::entities::{DomainRecord, PriceQuote, PriceType, ScoreSet};
use crate::domain::repositories::{
    DomainFilter, DomainRecordRepository, DomainStats, PriceTypeStats, ScoreAverages, SortSpec,
    TldCount,
};
use crate::error::AppError;
use serde_json::json;

/// Rows per INSERT statement when seeding candidates. Stays well under
/// SQLite's bind parameter limit.
const SEED_CHUNK: usize = 500;

const RECORD_COLUMNS: &str = "domain, memorability, pronunciation, visual_appeal, brandability, \
     average_score, price, price_type, error, checked_at, scored_at";

/// SQLite repository for candidate domain records.
pub struct SqliteDomainRecordRepository {
    pool: SqlitePool,
}

impl SqliteDomainRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: SqliteRow) -> Result<DomainRecord, sqlx::Error> {
    let price_type: Option<String> = row.try_get("price_type")?;

    Ok(DomainRecord {
        domain: row.try_get("domain")?,
        memorability: row.try_get("memorability")?,
        pronunciation: row.try_get("pronunciation")?,
        visual_appeal: row.try_get("visual_appeal")?,
        brandability: row.try_get("brandability")?,
        average_score: row.try_get("average_score")?,
        price: row.try_get("price")?,
        price_type: price_type.and_then(|s| s.parse::<PriceType>().ok()),
        error: row.try_get("error")?,
        checked_at: row.try_get("checked_at")?,
        scored_at: row.try_get("scored_at")?,
    })
}

#[async_trait]
impl DomainRecordRepository for SqliteDomainRecordRepository {
    async fn insert_candidates(&self, domains: &[String]) -> Result<u64, AppError> {
        let mut inserted = 0u64;

        for chunk in domains.chunks(SEED_CHUNK) {
            let mut qb =
                QueryBuilder::<Sqlite>::new("INSERT OR IGNORE INTO domain_results (domain) ");
            qb.push_values(chunk, |mut b, domain| {
                b.push_bind(domain);
            });
            let result = qb.build().execute(&self.pool).await?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }

    async fn list(
        &self,
        filter: &DomainFilter,
        sort: &SortSpec,
    ) -> Result<Vec<DomainRecord>, AppError> {
        let mut qb = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {RECORD_COLUMNS} FROM domain_results WHERE 1 = 1"
        ));

        if let Some(search) = &filter.search {
            qb.push(" AND lower(domain) LIKE ");
            qb.push_bind(format!("%{}%", search.to_lowercase()));
        }

        if let Some(tld) = &filter.tld {
            qb.push(" AND domain LIKE ");
            qb.push_bind(format!("%.{tld}"));
        }

        if filter.min_score > 0.0 {
            // NULL averages never satisfy >=, so unscored records drop out.
            qb.push(" AND average_score >= ");
            qb.push_bind(filter.min_score);
        }

        if filter.priced_only {
            qb.push(" AND price_type IS NOT NULL");
        }

        if let Some(price_type) = filter.price_type {
            qb.push(" AND price_type = ");
            qb.push_bind(price_type.as_str());
        }

        if filter.max_price > 0.0 {
            qb.push(" AND price <= ");
            qb.push_bind(filter.max_price);
        }

        let column = sort.key.column();
        qb.push(format!(
            " ORDER BY ({column} IS NULL), {column} {}, domain ASC",
            sort.dir.sql()
        ));

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn stats(&self) -> Result<DomainStats, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM domain_results")
            .fetch_one(&self.pool)
            .await?;

        let avg_row = sqlx::query(
            r#"
            SELECT
                AVG(average_score) AS avg_average_score,
                AVG(memorability) AS avg_memorability,
                AVG(pronunciation) AS avg_pronunciation,
                AVG(visual_appeal) AS avg_visual_appeal,
                AVG(brandability) AS avg_brandability
            FROM domain_results
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let averages = ScoreAverages {
            avg_average_score: avg_row.try_get("avg_average_score")?,
            avg_memorability: avg_row.try_get("avg_memorability")?,
            avg_pronunciation: avg_row.try_get("avg_pronunciation")?,
            avg_visual_appeal: avg_row.try_get("avg_visual_appeal")?,
            avg_brandability: avg_row.try_get("avg_brandability")?,
        };

        let tld_rows = sqlx::query(
            r#"
            SELECT substr(domain, instr(domain, '.') + 1) AS tld, COUNT(*) AS count
            FROM domain_results
            GROUP BY tld
            ORDER BY count DESC, tld ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let tlds = tld_rows
            .into_iter()
            .map(|row| {
                Ok(TldCount {
                    tld: row.try_get("tld")?,
                    count: row.try_get("count")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        // Error rows are not "priced domains"; they surface in `errors`.
        let price_rows = sqlx::query(
            r#"
            SELECT price_type, COUNT(*) AS count, AVG(price) AS avg_price
            FROM domain_results
            WHERE price_type IS NOT NULL AND price_type != 'Error'
            GROUP BY price_type
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut price_stats = Vec::with_capacity(price_rows.len());
        for row in price_rows {
            let raw: String = row.try_get("price_type")?;
            let price_type = raw.parse::<PriceType>().map_err(|_| {
                AppError::internal("Unknown price_type in store", json!({ "price_type": raw }))
            })?;
            price_stats.push(PriceTypeStats {
                price_type,
                count: row.try_get("count")?,
                avg_price: row.try_get("avg_price")?,
            });
        }

        let errors: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM domain_results WHERE price_type = 'Error'")
                .fetch_one(&self.pool)
                .await?;

        Ok(DomainStats {
            total,
            averages,
            tlds,
            price_stats,
            errors,
        })
    }

    async fn find_unpriced(&self, limit: i64) -> Result<Vec<String>, AppError> {
        // Error rows are eligible for retry; scored candidates go first so
        // the most promising names get priced before the long tail.
        let rows = sqlx::query_scalar(
            r#"
            SELECT domain FROM domain_results
            WHERE price_type IS NULL OR price_type = 'Error'
            ORDER BY (average_score IS NULL), average_score DESC, id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_unscored(&self, limit: i64) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query_scalar(
            r#"
            SELECT domain FROM domain_results
            WHERE average_score IS NULL
            ORDER BY id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn apply_price(&self, domain: &str, quote: &PriceQuote) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE domain_results
            SET price = ?, price_type = ?, error = ?, checked_at = CURRENT_TIMESTAMP
            WHERE domain = ?
            "#,
        )
        .bind(quote.price)
        .bind(quote.price_type.as_str())
        .bind(&quote.detail)
        .bind(domain)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "No record for domain",
                json!({ "domain": domain }),
            ));
        }

        Ok(())
    }

    async fn apply_scores(&self, domain: &str, scores: &ScoreSet) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE domain_results
            SET memorability = ?, pronunciation = ?, visual_appeal = ?, brandability = ?,
                average_score = ?, scored_at = CURRENT_TIMESTAMP
            WHERE domain = ?
            "#,
        )
        .bind(scores.memorability)
        .bind(scores.pronunciation)
        .bind(scores.visual_appeal)
        .bind(scores.brandability)
        .bind(scores.average())
        .bind(domain)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "No record for domain",
                json!({ "domain": domain }),
            ));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM domain_results")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM domain_results")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
