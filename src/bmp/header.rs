//! BMP file header (14 bytes) and BITMAPINFOHEADER (40 bytes).
//!
//! Both records are serialized field by field, little-endian, in declared
//! order. In-memory struct layout never reaches the wire.

use crate::error::BmpError;

/// Size of the file header record.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER record.
pub const INFO_HEADER_SIZE: usize = 40;
/// Both headers; pixel data follows immediately.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// `"BM"` read as a little-endian u16.
pub const BMP_MAGIC: u16 = 0x4D42;
pub const BITS_PER_PIXEL: u16 = 24;
/// 11811 pixels per meter, roughly 300 DPI.
pub const PIXELS_PER_METER: i32 = 11811;

const COMPRESSION_RGB: u32 = 0;
/// Written into `colors_important` by the writer (2^24).
const COLORS_IMPORTANT: u32 = 0x0100_0000;

/// The 14-byte record at the start of every BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub file_type: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel data.
    pub offset_data: u32,
}

/// BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Positive: rows are stored bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Bytes per on-disk row: `width * 3` rounded up to a multiple of 4.
///
/// Computed in u64 so it cannot overflow for any `u32` width.
pub const fn compute_stride(width: u32) -> u64 {
    (width as u64 * 3).div_ceil(4) * 4
}

/// Build both headers for a 24-bit image of the given size.
///
/// Every derived field (stride, sizes, offset) is computed here rather
/// than taken from the caller.
pub fn build_headers(width: u32, height: u32) -> Result<(FileHeader, InfoHeader), BmpError> {
    let too_large = || BmpError::DimensionsTooLarge {
        width: u64::from(width),
        height: u64::from(height),
    };
    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h = i32::try_from(height).map_err(|_| too_large())?;

    let size_image = compute_stride(width)
        .checked_mul(u64::from(height))
        .ok_or_else(too_large)?;
    let file_size = size_image
        .checked_add(HEADER_SIZE as u64)
        .and_then(|s| u32::try_from(s).ok())
        .ok_or_else(too_large)?;

    let file_header = FileHeader {
        file_type: BMP_MAGIC,
        file_size,
        reserved1: 0,
        reserved2: 0,
        offset_data: HEADER_SIZE as u32,
    };
    let info_header = InfoHeader {
        size: INFO_HEADER_SIZE as u32,
        width: w,
        height: h,
        planes: 1,
        bit_count: BITS_PER_PIXEL,
        compression: COMPRESSION_RGB,
        // file_size fit in u32, so size_image does too
        size_image: size_image as u32,
        x_pixels_per_meter: PIXELS_PER_METER,
        y_pixels_per_meter: PIXELS_PER_METER,
        colors_used: 0,
        colors_important: COLORS_IMPORTANT,
    };
    log::debug!("built BMP headers for {width}x{height}, file size {file_size}");
    Ok((file_header, info_header))
}

impl FileHeader {
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        self.write(&mut Writer::new(&mut out));
        out
    }

    fn write(&self, w: &mut Writer<'_>) {
        w.put(&self.file_type.to_le_bytes());
        w.put(&self.file_size.to_le_bytes());
        w.put(&self.reserved1.to_le_bytes());
        w.put(&self.reserved2.to_le_bytes());
        w.put(&self.offset_data.to_le_bytes());
    }

    fn read(r: &mut Reader<'_>) -> Self {
        Self {
            file_type: r.u16(),
            file_size: r.u32(),
            reserved1: r.u16(),
            reserved2: r.u16(),
            offset_data: r.u32(),
        }
    }
}

impl InfoHeader {
    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        self.write(&mut Writer::new(&mut out));
        out
    }

    fn write(&self, w: &mut Writer<'_>) {
        w.put(&self.size.to_le_bytes());
        w.put(&self.width.to_le_bytes());
        w.put(&self.height.to_le_bytes());
        w.put(&self.planes.to_le_bytes());
        w.put(&self.bit_count.to_le_bytes());
        w.put(&self.compression.to_le_bytes());
        w.put(&self.size_image.to_le_bytes());
        w.put(&self.x_pixels_per_meter.to_le_bytes());
        w.put(&self.y_pixels_per_meter.to_le_bytes());
        w.put(&self.colors_used.to_le_bytes());
        w.put(&self.colors_important.to_le_bytes());
    }

    fn read(r: &mut Reader<'_>) -> Self {
        Self {
            size: r.u32(),
            width: r.i32(),
            height: r.i32(),
            planes: r.u16(),
            bit_count: r.u16(),
            compression: r.u32(),
            size_image: r.u32(),
            x_pixels_per_meter: r.i32(),
            y_pixels_per_meter: r.i32(),
            colors_used: r.u32(),
            colors_important: r.u32(),
        }
    }

    /// On-disk row size for this header's width. Zero for width <= 0.
    pub fn stride(&self) -> u64 {
        compute_stride(u32::try_from(self.width).unwrap_or(0))
    }
}

/// Serialize both headers into the 54 bytes that open the file.
pub fn encode_headers(file_header: &FileHeader, info_header: &InfoHeader) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    let mut w = Writer::new(&mut out);
    file_header.write(&mut w);
    info_header.write(&mut w);
    out
}

/// Parse and validate the 54-byte header block at the start of `data`.
///
/// Only the fields that decide compatibility are checked: the magic,
/// the bit depth, and the compression method. Sizes, offset, planes and
/// the info header size are returned as found.
pub fn decode_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), BmpError> {
    let header = data.get(..HEADER_SIZE).ok_or(BmpError::Truncated {
        needed: HEADER_SIZE,
        actual: data.len(),
    })?;
    let mut r = Reader::new(header);
    let file_header = FileHeader::read(&mut r);
    let info_header = InfoHeader::read(&mut r);

    if file_header.file_type != BMP_MAGIC {
        return Err(BmpError::Unsupported(alloc::format!(
            "bad magic 0x{:04X}, expected 0x{BMP_MAGIC:04X}",
            file_header.file_type
        )));
    }
    if info_header.bit_count != BITS_PER_PIXEL {
        return Err(BmpError::Unsupported(alloc::format!(
            "BMP bit depth {} unsupported, only 24 is accepted",
            info_header.bit_count
        )));
    }
    if info_header.compression != COMPRESSION_RGB {
        return Err(BmpError::Unsupported(alloc::format!(
            "BMP compression {} unsupported, only uncompressed is accepted",
            info_header.compression
        )));
    }

    log::debug!(
        "decoded BMP headers: {}x{}, declared file size {}",
        info_header.width,
        info_header.height,
        file_header.file_size
    );
    Ok((file_header, info_header))
}

// ── Fixed-width field cursors ───────────────────────────────────────

struct Writer<'a> {
    out: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    fn new(out: &'a mut [u8]) -> Self {
        Self { out, pos: 0 }
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.out[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        buf
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }
}
