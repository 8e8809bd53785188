use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Model artifact {artifact}: {reason}")]
    ModelLoad { artifact: String, reason: String },

    #[error("Model inconsistency: {0}")]
    ModelInconsistency(String),

    #[error("Document {id}: {source}")]
    Document {
        id: String,
        source: Box<ClassifyError>,
    },

    #[error("Text utility error: {0}")]
    TextUtil(#[from] text_util::TextUtilError),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
