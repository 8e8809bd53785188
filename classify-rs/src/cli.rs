//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

use text_util::CommonArgs;

/// Arguments for one classification run.
#[derive(Debug, Parser)]
#[command(name = "classify-rs")]
#[command(about = "Assign category codes to stored documents using a trained model", long_about = None)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory holding the trained model artifacts
    #[arg(long, default_value = "model_dir")]
    pub model: PathBuf,

    /// Table receiving the assigned codes (defaults to the source table)
    #[arg(long)]
    pub output_table_name: Option<String>,

    /// Column receiving the assigned category code
    #[arg(long)]
    pub output_code_col: String,
}

impl ClassifyArgs {
    /// Table the assigned codes are written to.
    pub fn output_table(&self) -> &str {
        self.output_table_name
            .as_deref()
            .unwrap_or(&self.common.table_name)
    }
}
