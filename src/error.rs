use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a run before anything is written.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input file {} contains no data rows", .0.display())]
    EmptyInput(PathBuf),

    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    #[error("need at least {required} rows to rank priority regions, found {found}")]
    InsufficientRows { found: usize, required: usize },

    #[error("decision catalog is empty")]
    EmptyCatalog,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
