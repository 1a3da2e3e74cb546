use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VadError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Audio frame contains no samples")]
    EmptyFrame,
}
