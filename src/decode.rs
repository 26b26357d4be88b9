use enough::Stop;

use crate::bmp;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelGrid;

/// Builder for a BMP decode with optional resource limits.
///
/// ```
/// use imglib_bmp::{DecodeRequest, Image, Limits, Unstoppable};
///
/// let data = imglib_bmp::encode_bmp(&Image::new(2, 2), Unstoppable)?;
/// let limits = Limits { max_pixels: Some(16), ..Default::default() };
/// let image: Image = DecodeRequest::new(&data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(image.pixels().len(), 4);
/// # Ok::<(), imglib_bmp::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or pixel allocation exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into any [`PixelGrid`], typically [`crate::Image`].
    pub fn decode<G: PixelGrid>(self, stop: impl Stop) -> Result<G, BmpError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}
