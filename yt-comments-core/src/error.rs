use {
    std::time::Duration,
    thiserror::Error,
};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid video identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("failed to fetch comments: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to tag comments: {0}")]
    Tagging(#[from] TaggingError),
    #[error("analysis did not finish within {0:?}")]
    TimedOut(Duration),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("quota exceeded: {0}")]
    Quota(String),
    #[error("request was not authorized: {0}")]
    Auth(String),
    #[error("video not found: {0}")]
    VideoNotFound(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("api returned status {status}: {message}")]
    Api {
        status: u16,
        message: String,
    },
    #[error("stopped after {0} pages while more pages were still reported")]
    PageLimitExceeded(usize),
}

#[derive(Error, Debug)]
pub enum TaggingError {
    #[error("tokenizer failed: {0}")]
    Tokenizer(String),
    #[error("tagger failed: {0}")]
    Tagger(String),
    #[error("tagger returned {actual} tags for {expected} tokens")]
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}

/// Coarse grouping of failures, used by front ends to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    QuotaOrAuth,
    Network,
    Remote,
    Internal,
}

impl AnalysisError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidIdentifier(_) => FailureKind::InvalidInput,
            Self::Fetch(err) => err.kind(),
            Self::Tagging(_) => FailureKind::Internal,
            Self::TimedOut(_) => FailureKind::Network,
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Quota(_) | Self::Auth(_) => FailureKind::QuotaOrAuth,
            Self::Network(_) => FailureKind::Network,
            Self::VideoNotFound(_) => FailureKind::InvalidInput,
            Self::Malformed(_) | Self::Api { .. } | Self::PageLimitExceeded(_) => FailureKind::Remote,
        }
    }
}
