use thiserror::Error;

/// Failure taxonomy for one pipeline run. Every variant is terminal: there is
/// no retry, the caller resubmits.
#[derive(Debug, Error)]
pub enum SutError {
    /// The proxy answered with its own `{error, details}` envelope instead of
    /// an engine payload (upstream unreachable, empty or malformed body).
    #[error("{error}: {details}")]
    Proxy { error: String, details: String },

    /// HTTP 422 from the engine; the message is the `detail[].msg` fields
    /// joined by ", ".
    #[error("Validation Error: {0}")]
    Validation(String),

    /// Any other non-2xx status.
    #[error("API Error: {status}")]
    Api { status: u16 },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx body that did not decode as the expected shape, including the
    /// nested `AnalysisResponse.data` parse.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SutError>;
