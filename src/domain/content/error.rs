/// Failure of a single upstream content provider
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("The content service returned an unexpected response.")]
    InvalidResponse,
    #[error("Could not decode content data: {0}")]
    Decoding(String),
    #[error("Content provider failed: {0}")]
    ProviderFailed(String),
    #[error("Service responded with status code {0}.")]
    BadStatusCode(u16),
    #[error("Content provider credential is not configured.")]
    MissingCredential,
    #[error("{0}")]
    Unknown(String),
}

impl ProviderError {
    /// Map a reqwest failure onto the provider taxonomy
    pub fn from_transport(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ProviderError::BadStatusCode(status.as_u16())
        } else if err.is_decode() {
            ProviderError::Decoding(err.to_string())
        } else if err.is_body() {
            ProviderError::InvalidResponse
        } else {
            ProviderError::ProviderFailed(err.to_string())
        }
    }
}
