use alloc::string::String;
use enough::StopReason;

#[cfg(feature = "std")]
use crate::image::Image;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The file could not be opened, read, or written.
    #[cfg(feature = "std")]
    #[error("i/o unavailable: {0}")]
    IoUnavailable(#[from] std::io::Error),

    #[error("truncated input: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("unsupported BMP variant: {0}")]
    Unsupported(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("row stride {stride} is shorter than {row_bytes} bytes of pixel data")]
    InvalidStride { stride: usize, row_bytes: usize },

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

/// A failed [`crate::load`].
///
/// Carries the empty 0x0 [`Image`] that older callers expect on failure,
/// alongside the reason the load failed.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[error("failed to load {}: {source}", .path.display())]
pub struct LoadError {
    pub path: std::path::PathBuf,
    pub image: Image,
    #[source]
    pub source: BmpError,
}

#[cfg(feature = "std")]
impl LoadError {
    pub(crate) fn new(path: &std::path::Path, source: BmpError) -> Self {
        Self {
            path: path.to_path_buf(),
            image: Image::default(),
            source,
        }
    }

    /// Discard the reason and keep the empty image.
    pub fn into_image(self) -> Image {
        self.image
    }
}
