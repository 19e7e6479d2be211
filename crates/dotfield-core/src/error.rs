use thiserror::Error;

/// Failures surfaced to the host. The per-pixel field math itself is total
/// and never produces one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("unknown theme {0:?} (expected \"dark\" or \"light\")")]
    UnknownTheme(String),

    #[error("parameter `{name}` out of range: {value}")]
    InvalidParam { name: &'static str, value: f32 },

    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type FieldResult<T> = Result<T, FieldError>;
