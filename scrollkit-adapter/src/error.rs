use alloc::string::String;

/// Why a background worker could not be registered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("worker script `{url}` could not be fetched")]
    ScriptUnavailable { url: String },
    #[error("worker registration rejected: {0}")]
    Rejected(String),
}
