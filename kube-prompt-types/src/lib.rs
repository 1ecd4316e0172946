use thiserror::Error;

pub mod segment;
pub use segment::{DisplaySegment, Segment, SegmentKey, SegmentSink};
pub mod theme;
pub use theme::Theme;

/// kube-prompt specific error types
#[derive(Error, Debug)]
pub enum KubePromptError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("File operation failed: {operation} on {path}: {source}")]
    File {
        operation: String,
        path: String,
        source: std::io::Error,
    },

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type KubePromptResult<T> = std::result::Result<T, KubePromptError>;
