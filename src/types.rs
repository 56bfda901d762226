// Error types shared by the upstream clients, the normalizers and the handlers

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Upstream transport error: {0}")]
    UpstreamTransport(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Normalization error: {0}")]
    Normalization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
