//! Errors raised by the filter pipeline.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("source image has no pixels")]
    EmptyImage,
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("invalid {name} parameter: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}
