//! Shared command-line arguments
//!
//! Every text tool reads documents the same way: a datasource file, a table,
//! an id column, a text column, and the tokenizer flags. Tools flatten
//! [`CommonArgs`] into their own clap parser and add their specific options.

use clap::Args;
use std::path::PathBuf;

use crate::tokenizer::Tokenizer;

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Path to the TOML datasource file
    #[arg(long, default_value = "datasource.toml")]
    pub datasource: PathBuf,

    /// Table holding the documents
    #[arg(long)]
    pub table_name: String,

    /// Column with the unique document identifier
    #[arg(long)]
    pub id_column: String,

    /// Column with the document text
    #[arg(long)]
    pub text_column: String,

    /// Remove common English stopwords during tokenization
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub remove_stopwords: bool,

    /// Apply Porter stemming during tokenization
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub do_stemming: bool,
}

impl CommonArgs {
    /// The tokenizer configured by the flags, built once per run.
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.remove_stopwords, self.do_stemming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_required_arguments() {
        let cli = TestCli::try_parse_from([
            "tool",
            "--table-name",
            "bills",
            "--id-column",
            "id",
            "--text-column",
            "abstract_text",
        ])
        .unwrap();

        assert_eq!(cli.common.table_name, "bills");
        assert_eq!(cli.common.id_column, "id");
        assert_eq!(cli.common.text_column, "abstract_text");
        assert_eq!(cli.common.datasource, PathBuf::from("datasource.toml"));
        assert!(cli.common.remove_stopwords);
        assert!(cli.common.do_stemming);
    }

    #[test]
    fn test_tokenizer_flags_take_values() {
        let cli = TestCli::try_parse_from([
            "tool",
            "--table-name",
            "bills",
            "--id-column",
            "id",
            "--text-column",
            "abstract_text",
            "--remove-stopwords",
            "false",
            "--do-stemming",
            "false",
        ])
        .unwrap();

        assert!(!cli.common.remove_stopwords);
        assert!(!cli.common.do_stemming);

        let tokens = cli.common.tokenizer().tokenize("the running dogs");
        assert_eq!(tokens, vec!["the", "running", "dogs"]);
    }

    #[test]
    fn test_missing_table_name_rejected() {
        let result = TestCli::try_parse_from([
            "tool",
            "--id-column",
            "id",
            "--text-column",
            "abstract_text",
        ]);
        assert!(result.is_err());
    }
}
