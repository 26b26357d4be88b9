use crate::bmp::{FileHeader, InfoHeader, decode_headers};
use crate::error::BmpError;

/// Header-level facts about a BMP file, read without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Width as stored. Non-positive values decode to an empty image.
    pub width: i32,
    /// Height as stored. Non-positive values decode to an empty image.
    pub height: i32,
    /// Bytes per stored row, including padding.
    pub stride: u64,
    /// File size declared in the header. Not checked against the input.
    pub declared_file_size: u32,
    /// Pixel data offset declared in the header.
    pub offset_data: u32,
}

impl ImageInfo {
    /// Probe the headers at the start of `data`.
    ///
    /// Fails exactly when [`crate::decode_bmp`] would fail on the headers.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let (file_header, info_header) = decode_headers(data)?;
        Ok(Self::from_headers(&file_header, &info_header))
    }

    pub(crate) fn from_headers(file_header: &FileHeader, info_header: &InfoHeader) -> Self {
        Self {
            width: info_header.width,
            height: info_header.height,
            stride: info_header.stride(),
            declared_file_size: file_header.file_size,
            offset_data: file_header.offset_data,
        }
    }

    /// Bytes of pixel data the decoder will require after the headers.
    pub fn pixel_data_len(&self) -> u64 {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.stride * u64::from(self.height.unsigned_abs())
    }
}
