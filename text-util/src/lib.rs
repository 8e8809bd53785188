//! text-util: shared text-tool plumbing
//!
//! Common pieces used by the document classification tools: the tokenizer
//! and per-document word counter, the shared command-line argument set, the
//! datasource configuration, and the SQLite document store that reads
//! documents and writes category codes back.
//!
//! # Modules
//!
//! - [`args`]: command-line arguments shared by the tools
//! - [`datasource`]: TOML datasource file and connection pool
//! - [`error`]: error types and handling
//! - [`store`]: document source and result sink
//! - [`tokenizer`]: text to token stream
//! - [`word_counter`]: per-document word occurrence counts

pub mod args;
pub mod datasource;
pub mod error;
pub mod store;
pub mod tokenizer;
pub mod word_counter;

// Re-export commonly used types
pub use args::CommonArgs;
pub use datasource::DatasourceConfig;
pub use error::{Result, TextUtilError};
pub use store::{Document, DocumentStore};
pub use tokenizer::Tokenizer;
pub use word_counter::WordCounter;
