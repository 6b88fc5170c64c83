//! Error types for the template store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or querying templates.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob expansion failed: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path does not match the template naming convention: {}", .0.display())]
    NameResolution(PathBuf),

    #[error("No template named: {0}")]
    NotFound(String),

    #[error("Template compilation failed: {0}")]
    Compile(#[from] handlebars::TemplateError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
