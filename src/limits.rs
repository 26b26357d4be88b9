use crate::error::BmpError;
use crate::pixel::Pixel;

/// Bounds on what a decode may allocate, checked against the header
/// before any pixel grid exists.
///
/// Every field defaults to `None`, meaning unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Bound on `width * height`.
    pub max_pixels: Option<u64>,
    /// Bound on the decoded grid size, at 3 bytes per pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate the dimensions a BMP header declares.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            BmpError::LimitExceeded(alloc::format!("BMP {what} {value} exceeds limit {max}"))
        };
        let pixels = u64::from(width) * u64::from(height);

        if let Some(max) = self.max_width.filter(|&m| u64::from(width) > m) {
            return Err(exceeded("width", u64::from(width), max));
        }
        if let Some(max) = self.max_height.filter(|&m| u64::from(height) > m) {
            return Err(exceeded("height", u64::from(height), max));
        }
        if let Some(max) = self.max_pixels.filter(|&m| pixels > m) {
            return Err(exceeded("pixel count", pixels, max));
        }
        let grid_bytes = pixels.saturating_mul(core::mem::size_of::<Pixel>() as u64);
        if let Some(max) = self.max_memory_bytes.filter(|&m| grid_bytes > m) {
            return Err(exceeded("grid size in bytes", grid_bytes, max));
        }
        Ok(())
    }
}
