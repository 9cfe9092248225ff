use thiserror::Error;

/// Errors that can occur while exporting or saving the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The browser refused one of the download steps
    #[error("Browser download failed: {0}")]
    Web(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
