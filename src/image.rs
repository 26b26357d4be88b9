use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::pixel::{BLACK, Pixel, PixelGrid};

/// Owned RGB image, row-major, origin at the top-left.
///
/// `Image::default()` is the empty 0x0 image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl Image {
    /// Black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::new_filled(width, height, BLACK)
    }

    /// Wrap row-major pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, BmpError> {
        let needed = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge {
                width: u64::from(width),
                height: u64::from(height),
            })?;
        if pixels.len() != needed {
            return Err(BmpError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Take the row-major pixel buffer.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bounds-checked pixel access.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels[..], self.width as usize, self.height as usize)
    }
}

impl PixelGrid for Image {
    fn new_filled(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            pixels: vec![fill; width as usize * height as usize],
            width,
            height,
        }
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }
}

/// Fails with [`BmpError::DimensionsTooLarge`] when a side exceeds `u32::MAX`.
#[cfg(feature = "imgref")]
impl TryFrom<imgref::ImgVec<Pixel>> for Image {
    type Error = BmpError;

    fn try_from(img: imgref::ImgVec<Pixel>) -> Result<Self, BmpError> {
        let (pixels, width, height) = img.into_contiguous_buf();
        let too_large = || BmpError::DimensionsTooLarge {
            width: width as u64,
            height: height as u64,
        };
        Ok(Self {
            pixels,
            width: u32::try_from(width).map_err(|_| too_large())?,
            height: u32::try_from(height).map_err(|_| too_large())?,
        })
    }
}
