// Quote-related database operations
use sqlx::{Postgres, Transaction};

use crate::db::{models::Quote, Database};
use crate::error::QuoteError;

impl Database {
    /// Fetch one random quote. `None` (or an empty category) selects among
    /// every row, otherwise only rows whose category matches exactly.
    pub async fn random_quote(&self, category: Option<&str>) -> Result<Quote, QuoteError> {
        let category = category.filter(|c| !c.is_empty());

        let quote = match category {
            None => {
                sqlx::query_as::<_, Quote>(
                    "SELECT id, author, message, category
       FROM quotes
       ORDER BY RANDOM()
       LIMIT 1",
                )
                .fetch_optional(&self.pool)
                .await?
            }
            Some(category) => {
                sqlx::query_as::<_, Quote>(
                    "SELECT id, author, message, category
       FROM quotes
       WHERE category = $1
       ORDER BY RANDOM()
       LIMIT 1",
                )
                .bind(category)
                .fetch_optional(&self.pool)
                .await?
            }
        };

        quote.ok_or_else(|| QuoteError::NotFound {
            category: category.map(str::to_string),
        })
    }
}

/// Insert a quote inside an open transaction. Used by the seed import so a
/// fixture lands all at once or not at all.
pub async fn insert_quote_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    author: &str,
    message: &str,
    category: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO quotes (author, message, category) VALUES ($1, $2, $3)")
        .bind(author)
        .bind(message)
        .bind(category)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
