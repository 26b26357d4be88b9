//! # imglib-bmp
//!
//! Reader and writer for uncompressed 24-bit BMP files, the image I/O
//! backend of the ImgLib toolset.
//!
//! ## Format
//!
//! A 14-byte file header and a 40-byte BITMAPINFOHEADER, both
//! little-endian, then the pixel plane: rows stored bottom-up, pixels as
//! B, G, R, each row zero-padded to a multiple of 4 bytes.
//!
//! Decoding checks only the magic (`BM`), the bit depth (24) and the
//! compression (none). Declared sizes and the data offset are accepted
//! as found.
//!
//! ## Non-Goals
//!
//! - Compressed BMP (RLE, bitfields), palettes, bit depths other than 24
//! - Alpha channels
//! - Streaming; files are buffered whole
//!
//! ## Usage
//!
//! ```no_run
//! use imglib_bmp::{Image, LoadError, Pixel, PixelGrid};
//!
//! let mut image = Image::new(2, 1);
//! image.set_pixel(0, 0, Pixel::new(255, 0, 0));
//! imglib_bmp::save("out.bmp", &image)?;
//!
//! let loaded = imglib_bmp::load("out.bmp").unwrap_or_else(LoadError::into_image);
//! assert_eq!(loaded, image);
//! # Ok::<(), imglib_bmp::BmpError>(())
//! ```
//!
//! Any caller-owned container implementing [`PixelGrid`] can be used in
//! place of [`Image`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod bmp;

mod decode;
#[cfg(feature = "std")]
mod file;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
#[cfg(feature = "std")]
pub use error::LoadError;
#[cfg(feature = "std")]
pub use file::{load, load_into, save};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BLACK, Pixel, PixelGrid};

/// Encode `grid` as a complete 24-bit BMP file.
pub fn encode_bmp<G: PixelGrid>(grid: &G, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    bmp::encode(grid, &stop)
}

/// Decode a complete 24-bit BMP file held in memory.
pub fn decode_bmp<G: PixelGrid>(data: &[u8], stop: impl Stop) -> Result<G, BmpError> {
    DecodeRequest::new(data).decode(stop)
}

/// [`decode_bmp`] with resource limits.
pub fn decode_bmp_with_limits<G: PixelGrid>(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<G, BmpError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}
