use thiserror::Error;

/// Failures surfaced by the message feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed task has stopped; nothing will be appended anymore.
    #[error("message feed is closed")]
    Closed,

    /// The command queue is full.
    #[error("message feed is busy")]
    Busy,

    /// The last message already carries the largest possible id.
    #[error("message ids exhausted")]
    IdsExhausted,

    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    SeedJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl<T> From<tokio::sync::mpsc::error::TrySendError<T>> for FeedError {
    fn from(err: tokio::sync::mpsc::error::TrySendError<T>) -> Self {
        match err {
            tokio::sync::mpsc::error::TrySendError::Full(_) => FeedError::Busy,
            tokio::sync::mpsc::error::TrySendError::Closed(_) => FeedError::Closed,
        }
    }
}
