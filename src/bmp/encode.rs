//! BMP encoder: uncompressed 24-bit, bottom-up, BGR.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{build_headers, encode_headers};
use crate::error::BmpError;
use crate::pixel::PixelGrid;

/// Encode a whole file: 54 header bytes followed by the pixel plane.
pub(crate) fn encode_bmp<G: PixelGrid>(grid: &G, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let width = grid.width();
    let height = grid.height();
    let (file_header, info_header) = build_headers(width, height)?;

    stop.check()?;

    let stride = usize::try_from(info_header.stride()).map_err(|_| BmpError::DimensionsTooLarge {
        width: u64::from(width),
        height: u64::from(height),
    })?;
    let mut out = Vec::with_capacity(file_header.file_size as usize);
    out.extend_from_slice(&encode_headers(&file_header, &info_header));
    encode_pixels(grid, stride, &mut out, stop)?;

    debug_assert_eq!(out.len(), file_header.file_size as usize);
    Ok(out)
}

/// Append the pixel plane of `grid` to `out`.
///
/// Rows go bottom-up, pixels left to right, each pixel as B, G, R. Every
/// row is zero-padded to `stride` bytes, so exactly `stride * height`
/// bytes are appended.
pub fn encode_pixels<G: PixelGrid>(
    grid: &G,
    stride: usize,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    let w = grid.width();
    let h = grid.height();
    let row_bytes = (w as usize)
        .checked_mul(3)
        .ok_or(BmpError::DimensionsTooLarge {
            width: u64::from(w),
            height: u64::from(h),
        })?;
    let pad_bytes = stride
        .checked_sub(row_bytes)
        .ok_or(BmpError::InvalidStride { stride, row_bytes })?;

    out.reserve(stride.saturating_mul(h as usize));
    for y in (0..h).rev() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let p = grid.pixel(x, y);
            out.extend_from_slice(&[p.b, p.g, p.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::pixel::Pixel;
    use enough::Unstoppable;

    fn red_green() -> Image {
        let mut img = Image::new(2, 1);
        img.set_pixel(0, 0, Pixel::new(255, 0, 0));
        img.set_pixel(1, 0, Pixel::new(0, 255, 0));
        img
    }

    #[test]
    fn two_by_one_plane() {
        let mut out = Vec::new();
        encode_pixels(&red_green(), 8, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [0, 0, 255, 0, 255, 0, 0, 0]);
    }

    #[test]
    fn two_by_one_file() {
        let out = encode_bmp(&red_green(), &Unstoppable).unwrap();
        assert_eq!(out.len(), 62);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(&out[2..6], &62u32.to_le_bytes());
        assert_eq!(&out[54..], &[0, 0, 255, 0, 255, 0, 0, 0]);
    }

    #[test]
    fn rows_are_bottom_up() {
        let mut img = Image::new(1, 2);
        img.set_pixel(0, 0, Pixel::new(1, 2, 3)); // top
        img.set_pixel(0, 1, Pixel::new(4, 5, 6)); // bottom
        let mut out = Vec::new();
        encode_pixels(&img, 4, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [6, 5, 4, 0, 3, 2, 1, 0]);
    }

    #[test]
    fn no_padding_when_aligned() {
        let img = Image::new(4, 3);
        let mut out = Vec::new();
        encode_pixels(&img, 12, &mut out, &Unstoppable).unwrap();
        assert_eq!(out.len(), 36);
    }

    #[test]
    fn wider_stride_pads_with_zeros() {
        let img = Image::new_filled(1, 1, Pixel::new(7, 8, 9));
        let mut out = Vec::new();
        encode_pixels(&img, 8, &mut out, &Unstoppable).unwrap();
        assert_eq!(out, [9, 8, 7, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn short_stride_rejected() {
        let img = Image::new(2, 2);
        let mut out = Vec::new();
        assert!(matches!(
            encode_pixels(&img, 5, &mut out, &Unstoppable),
            Err(BmpError::InvalidStride {
                stride: 5,
                row_bytes: 6
            })
        ));
    }

    #[test]
    fn empty_grid_is_header_only() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let out = encode_bmp(&Image::new(w, h), &Unstoppable).unwrap();
            assert_eq!(out.len(), 54, "{w}x{h}");
        }
    }
}
