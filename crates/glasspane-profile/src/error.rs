#![forbid(unsafe_code)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

/// Errors surfaced while turning provider payloads into profile data.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
