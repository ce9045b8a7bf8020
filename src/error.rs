use thiserror::Error;

/// Failure to get an image decoded into pixels.
///
/// An extraction that decodes fine but finds no qualifying pixels is not an error; it is the
/// `None` outcome of [`crate::dominant_color`].
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
}
