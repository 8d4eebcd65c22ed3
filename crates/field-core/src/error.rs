use thiserror::Error;

/// Errors surfaced by the core to its frontends.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("landmark buffer holds {got} floats, expected {expected}")]
    MalformedLandmarks { expected: usize, got: usize },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("image pattern `{0}` requested without image data")]
    MissingImageSource(String),

    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("invalid colour `{0}`, expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
