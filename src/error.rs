use std::path::PathBuf;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parsing error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("document '{}' not found or not readable", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("template sheet '{0}' does not exist in the output document")]
    TemplateNotFound(String),

    #[error("value sheet '{0}' does not exist in the source document")]
    SourceSheetNotFound(String),

    #[error("invalid cell reference '{0}'")]
    Reference(String),

    #[error("format error: {0}")]
    Format(String),

    #[error("failed to save document '{}': {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },
}
