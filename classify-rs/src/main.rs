//! classify-rs: Naive Bayes document classifier
//!
//! Reads documents from a database table, scores them against a trained
//! model, and writes the winning category code for each document back.

use clap::Parser;
use classify_rs::{runner, ClassifyArgs};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classify_rs=info,text_util=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting classify-rs v{}", env!("CARGO_PKG_VERSION"));

    let args = ClassifyArgs::parse();

    match runner::run(&args).await {
        Ok(summary) => {
            info!(
                "Successful completion: {} documents classified, {} categories assigned",
                summary.documents, summary.categories
            );
            Ok(())
        }
        Err(e) => {
            error!("Classification run failed: {}", e);
            std::process::exit(1);
        }
    }
}
