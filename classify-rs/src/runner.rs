//! Batch classification runner
//!
//! Wires one run together: datasource configuration, document store,
//! tokenizer, model, scoring, and the result write-back.

use std::collections::HashSet;
use tracing::{debug, info};

use text_util::{DatasourceConfig, DocumentStore};

use crate::classifier;
use crate::cli::ClassifyArgs;
use crate::error::{ClassifyError, Result};
use crate::model::Model;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub documents: usize,
    pub categories: usize,
}

/// Execute one classification run end to end.
///
/// The model is loaded and validated before any document is scored. A
/// failure on any single document aborts the whole batch, so either every
/// document gets a code or none does.
pub async fn run(args: &ClassifyArgs) -> Result<RunSummary> {
    let config = DatasourceConfig::from_file(&args.common.datasource)?;
    let pool = config.connect().await?;
    let store = DocumentStore::new(pool);

    let tokenizer = args.common.tokenizer();
    let documents = store
        .load_documents(
            &args.common.table_name,
            &args.common.id_column,
            &args.common.text_column,
            &tokenizer,
        )
        .await?;

    let model = Model::load(&args.model)?;
    info!(
        "Model loaded: {} categories, {} vocabulary words",
        model.category_count(),
        model.vocabulary_len()
    );

    let mut results = Vec::with_capacity(documents.len());
    for document in &documents {
        let category =
            classifier::classify(&document.counter, &model).map_err(|e| ClassifyError::Document {
                id: document.id.clone(),
                source: Box::new(e),
            })?;
        debug!("Document {} classified as {}", document.id, category);
        results.push((document.id.clone(), category.to_string()));
    }

    info!("Inserting results into {}", args.output_table());
    store
        .write_codes(
            args.output_table(),
            &args.common.id_column,
            &args.output_code_col,
            &results,
        )
        .await?;

    let categories: HashSet<&str> = results.iter().map(|(_, code)| code.as_str()).collect();
    Ok(RunSummary {
        documents: results.len(),
        categories: categories.len(),
    })
}
