//! Error types for the plotting helpers

use thiserror::Error;

/// Result type alias for plotting helper operations
pub type Result<T> = std::result::Result<T, PlotAuxError>;

/// Errors that can occur while preparing or rendering plots
#[derive(Error, Debug)]
pub enum PlotAuxError {
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    #[error("Chart rendering failed: {message}")]
    RenderingError { message: String },

    #[error("File I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Style configuration error: {message}")]
    ConfigError { message: String },

    #[error("{name}() is deprecated; use {use_instead} instead")]
    Deprecated {
        name: &'static str,
        use_instead: &'static str,
    },
}

impl<T: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<T>>
    for PlotAuxError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        PlotAuxError::RenderingError {
            message: format!("Drawing area error: {}", err),
        }
    }
}

impl From<serde_json::Error> for PlotAuxError {
    fn from(err: serde_json::Error) -> Self {
        PlotAuxError::ConfigError {
            message: err.to_string(),
        }
    }
}
