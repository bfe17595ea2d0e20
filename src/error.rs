use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("array size must be at least 1 (got {size})")]
    InvalidArraySize { size: usize },

    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidValueRange { min: i32, max: i32 },

    #[error("array size {size} outside allowed range {min}..={max}")]
    ArraySizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("speed {speed} outside allowed range {min}..={max}")]
    SpeedOutOfRange { speed: u64, min: u64, max: u64 },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
