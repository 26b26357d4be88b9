//! BMP decoder: 24-bit uncompressed pixel plane into a [`PixelGrid`].

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::{BLACK, Pixel, PixelGrid};

/// Decode a bottom-up, BGR, stride-padded pixel plane.
///
/// `data` starts at the first stored row. A non-positive `width` or
/// `height` yields an empty grid without reading anything. Padding bytes
/// are skipped unread, and bytes past `stride * height` are ignored.
pub fn decode_pixels<G: PixelGrid>(
    data: &[u8],
    width: i32,
    height: i32,
    stride: usize,
    stop: &dyn Stop,
) -> Result<G, BmpError> {
    if width <= 0 || height <= 0 {
        log::trace!("degenerate BMP size {width}x{height}, returning empty grid");
        return Ok(G::new_filled(
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
            BLACK,
        ));
    }
    let w = width.unsigned_abs();
    let h = height.unsigned_abs();

    let row_bytes = w as usize * 3;
    if stride < row_bytes {
        return Err(BmpError::InvalidStride { stride, row_bytes });
    }
    let needed = stride
        .checked_mul(h as usize)
        .ok_or(BmpError::DimensionsTooLarge {
            width: u64::from(w),
            height: u64::from(h),
        })?;
    if data.len() < needed {
        return Err(BmpError::Truncated {
            needed,
            actual: data.len(),
        });
    }

    let mut grid = G::new_filled(w, h, BLACK);
    // First stored row is the bottom of the image.
    for (row, y) in data[..needed].chunks_exact(stride).zip((0..h).rev()) {
        if y % 16 == 0 {
            stop.check()?;
        }
        for (x, bgr) in (0..w).zip(row[..row_bytes].chunks_exact(3)) {
            grid.set_pixel(x, y, Pixel::new(bgr[2], bgr[1], bgr[0]));
        }
    }
    Ok(grid)
}
