//! Document store
//!
//! The document source and result sink shared by the text tools: loads
//! documents out of a table into word counters and writes per-document
//! category codes back.

use futures::TryStreamExt;
use regex::Regex;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::error::{Result, TextUtilError};
use crate::tokenizer::Tokenizer;
use crate::word_counter::WordCounter;

/// One document ready for scoring.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub counter: WordCounter,
}

/// SQLite-backed document source and result sink.
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load every document in `table`, tokenizing `text_column` into a word
    /// counter keyed by `id_column`.
    ///
    /// Ids are handled as text throughout, whatever the column type; NULL
    /// text is treated as an empty document.
    pub async fn load_documents(
        &self,
        table: &str,
        id_column: &str,
        text_column: &str,
        tokenizer: &Tokenizer,
    ) -> Result<Vec<Document>> {
        validate_identifier(table)?;
        validate_identifier(id_column)?;
        validate_identifier(text_column)?;

        // Identifiers cannot be bound as parameters; they are validated
        // above before being spliced in.
        let query = format!(
            "SELECT CAST({id} AS TEXT) AS id, {text} AS text FROM {table} ORDER BY {id}",
            id = id_column,
            text = text_column,
            table = table,
        );

        let mut rows = sqlx::query(&query).fetch(&self.pool);
        let mut documents = Vec::new();
        while let Some(row) = rows.try_next().await? {
            let id: String = row.try_get("id")?;
            let text: Option<String> = row.try_get("text")?;
            let tokens = tokenizer.tokenize(text.as_deref().unwrap_or(""));
            let counter = WordCounter::new(tokens);
            debug!("Document {}: {} distinct words", id, counter.distinct());
            documents.push(Document { id, counter });
        }

        info!("Loaded {} documents from {}", documents.len(), table);
        Ok(documents)
    }

    /// Write one category code per document id, all in a single transaction.
    ///
    /// A document id that matches no row fails the whole batch; the
    /// transaction rolls back and nothing is written.
    pub async fn write_codes(
        &self,
        table: &str,
        id_column: &str,
        code_column: &str,
        results: &[(String, String)],
    ) -> Result<()> {
        validate_identifier(table)?;
        validate_identifier(id_column)?;
        validate_identifier(code_column)?;

        let query = format!(
            "UPDATE {table} SET {code} = ? WHERE {id} = ?",
            table = table,
            code = code_column,
            id = id_column,
        );

        let mut tx = self.pool.begin().await?;
        for (id, code) in results {
            let outcome = sqlx::query(&query)
                .bind(code)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            if outcome.rows_affected() == 0 {
                return Err(TextUtilError::MissingDocument(id.clone()));
            }
        }
        tx.commit().await?;

        info!("Wrote {} codes to {}.{}", results.len(), table, code_column);
        Ok(())
    }
}

/// Reject table and column names that are not plain SQL identifiers.
fn validate_identifier(name: &str) -> Result<()> {
    if let Ok(identifier) = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$") {
        if identifier.is_match(name) {
            return Ok(());
        }
    }
    Err(TextUtilError::InvalidIdentifier(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accepts_plain_names() {
        assert!(validate_identifier("bills").is_ok());
        assert!(validate_identifier("Abstract_Text").is_ok());
        assert!(validate_identifier("_session2015").is_ok());
    }

    #[test]
    fn test_identifier_rejects_injection() {
        assert!(validate_identifier("bills; DROP TABLE bills").is_err());
        assert!(validate_identifier("text, code").is_err());
        assert!(validate_identifier("2015_session").is_err());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("name with spaces").is_err());
    }
}
