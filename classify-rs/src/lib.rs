//! classify-rs: Naive Bayes document classifier
//!
//! Assigns a category code to each document in a database table using a
//! previously trained Naive Bayes model. Documents are tokenized into word
//! counts, scored in log space against the model's prior and conditional
//! probability tables, and the winning category is written back to the
//! database.
//!
//! # Example
//!
//! ```no_run
//! use classify_rs::{classify, Model};
//! use text_util::{Tokenizer, WordCounter};
//!
//! fn main() -> classify_rs::Result<()> {
//!     let model = Model::load("model_dir")?;
//!     let tokenizer = Tokenizer::new(true, true);
//!     let counter = WordCounter::new(tokenizer.tokenize("An act concerning school funding"));
//!     let category = classify(&counter, &model)?;
//!     println!("{}", category);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: log-space scoring and category selection
//! - [`cli`]: command-line argument definitions
//! - [`error`]: error types and handling
//! - [`model`]: trained model artifacts, loading, validation
//! - [`runner`]: the batch classification run

pub mod classifier;
pub mod cli;
pub mod error;
pub mod model;
pub mod runner;

// Re-export commonly used types
pub use classifier::classify;
pub use cli::ClassifyArgs;
pub use error::{ClassifyError, Result};
pub use model::Model;
pub use runner::{run, RunSummary};
