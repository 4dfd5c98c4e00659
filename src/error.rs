/// Ways a probe can end without any response from the server to show for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The request left the client but nothing usable came back: connection
    /// refused, timed out, reset, or the body could not be read.
    #[error("no response from server: {detail}")]
    NoResponse { detail: String },
    /// The request never left the client.
    #[error("{detail}")]
    NotSent { detail: String },
}

impl NetworkError {
    pub fn classify(err: &reqwest::Error) -> Self {
        let detail = err.to_string();
        if err.is_builder() {
            NetworkError::NotSent { detail }
        } else {
            NetworkError::NoResponse { detail }
        }
    }
}
