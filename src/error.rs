use thiserror::Error;

/// Process-edge failures only. The account operations themselves never
/// fail: out-of-range ratings are clamped and unparsable rating text is
/// normalized to "no rating" before it reaches the core.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
