//! Save and load BMP files on disk.
//!
//! Both directions buffer the whole file in memory. `save` encodes before
//! touching the filesystem, so encoding errors leave any existing file
//! alone. An I/O error while writing leaves a partially written file
//! behind; nothing is cleaned up.

use std::fs;
use std::io::Write;
use std::path::Path;

use enough::Unstoppable;

use crate::bmp;
use crate::error::{BmpError, LoadError};
use crate::image::Image;
use crate::pixel::PixelGrid;

/// Write `grid` to `path` as a 24-bit BMP, truncating any existing file.
pub fn save<G: PixelGrid>(path: impl AsRef<Path>, grid: &G) -> Result<(), BmpError> {
    let path = path.as_ref();
    let result = bmp::encode(grid, &Unstoppable).and_then(|bytes| write_all(path, &bytes));
    if let Err(e) = &result {
        log::warn!("saving BMP to {} failed: {e}", path.display());
    }
    result
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<(), BmpError> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}

/// Read a 24-bit BMP from `path`.
///
/// On failure the returned [`LoadError`] still carries an empty 0x0
/// [`Image`]; `load(p).unwrap_or_else(LoadError::into_image)` gives the
/// "empty image on failure" behaviour.
pub fn load(path: impl AsRef<Path>) -> Result<Image, LoadError> {
    let path = path.as_ref();
    load_into(path).map_err(|e| LoadError::new(path, e))
}

/// Read a 24-bit BMP from `path` into any [`PixelGrid`].
pub fn load_into<G: PixelGrid>(path: impl AsRef<Path>) -> Result<G, BmpError> {
    let path = path.as_ref();
    let result = fs::read(path)
        .map_err(BmpError::from)
        .and_then(|data| bmp::decode(&data, None, &Unstoppable));
    if let Err(e) = &result {
        log::warn!("loading BMP from {} failed: {e}", path.display());
    }
    result
}
