//! 24-bit uncompressed BMP: header codec and pixel plane codec.
//!
//! Most callers want the top-level [`crate::encode_bmp`] / [`crate::decode_bmp`]
//! or the file helpers. The pieces are public for callers that need to
//! build or inspect headers themselves.

mod decode;
mod encode;
mod header;

pub use decode::decode_pixels;
pub use encode::encode_pixels;
pub(crate) use encode::encode_bmp as encode;
pub use header::{
    BITS_PER_PIXEL, BMP_MAGIC, FILE_HEADER_SIZE, FileHeader, HEADER_SIZE, INFO_HEADER_SIZE,
    InfoHeader, PIXELS_PER_METER, build_headers, compute_stride, decode_headers, encode_headers,
};

use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelGrid;
use enough::Stop;

/// Decode a whole BMP file held in memory.
pub(crate) fn decode<G: PixelGrid>(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<G, BmpError> {
    let (_, info) = decode_headers(data)?;
    check_limits(limits, &info)?;
    stop.check()?;

    let stride = usize::try_from(info.stride()).map_err(|_| BmpError::DimensionsTooLarge {
        width: u64::from(info.width.unsigned_abs()),
        height: u64::from(info.height.unsigned_abs()),
    })?;
    // Pixel rows follow the headers directly; offset_data is not consulted.
    decode_pixels(&data[HEADER_SIZE..], info.width, info.height, stride, stop)
}

fn check_limits(limits: Option<&Limits>, info: &InfoHeader) -> Result<(), BmpError> {
    let Some(limits) = limits else {
        return Ok(());
    };
    // Non-positive sizes decode to an empty grid and allocate nothing.
    let (Ok(width), Ok(height)) = (u32::try_from(info.width), u32::try_from(info.height)) else {
        return Ok(());
    };
    limits.check(width, height)
}
