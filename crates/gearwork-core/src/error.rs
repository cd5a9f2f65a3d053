use thiserror::Error;

/// Errors raised when a gear or gear train is configured incorrectly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GearError {
    #[error("invalid gear spec: {0}")]
    InvalidGearSpec(String),

    #[error("unknown gear: {0}")]
    UnknownGear(String),

    #[error("duplicate gear: {0}")]
    DuplicateGear(String),
}

pub type GearResult<T> = std::result::Result<T, GearError>;
