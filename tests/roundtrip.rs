use enough::Unstoppable;
use imglib_bmp::*;

fn gradient(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(x, y, Pixel::new((x * 40) as u8, (y * 60) as u8, ((x + y) * 7) as u8));
        }
    }
    img
}

#[test]
fn bmp_roundtrip_in_memory() {
    let img = gradient(3, 2);
    let encoded = encode_bmp(&img, Unstoppable).unwrap();

    assert_eq!(&encoded[0..2], b"BM");
    // stride 12, two rows
    assert_eq!(encoded.len(), 54 + 24);

    let decoded: Image = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn concrete_two_by_one() {
    let mut img = Image::new(2, 1);
    img.set_pixel(0, 0, Pixel::new(255, 0, 0));
    img.set_pixel(1, 0, Pixel::new(0, 255, 0));

    let encoded = encode_bmp(&img, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 62);
    assert_eq!(bmp::compute_stride(2), 8);
    assert_eq!(&encoded[54..], &[0, 0, 255, 0, 255, 0, 0, 0]);

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 1);
    assert_eq!(info.stride, 8);
    assert_eq!(info.declared_file_size, 62);
    assert_eq!(info.offset_data, 54);
    assert_eq!(info.pixel_data_len(), 8);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.bmp");
    let img = gradient(5, 4);

    save(&path, &img).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 54 + 16 * 4);

    let loaded = load(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn save_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bmp");
    std::fs::write(&path, vec![0xAB; 4096]).unwrap();

    save(&path, &gradient(1, 1)).unwrap();
    assert_eq!(std::fs::read(&path).unwrap().len(), 58);
}

#[test]
fn load_missing_file_is_io_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bmp");

    let err = load(&path).unwrap_err();
    assert!(matches!(err.source, BmpError::IoUnavailable(_)));
    assert_eq!(err.path, path);
    let empty = err.into_image();
    assert_eq!(empty.width(), 0);
    assert_eq!(empty.height(), 0);
}

#[test]
fn load_bad_magic_yields_empty_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a.bmp");
    let mut bytes = encode_bmp(&gradient(2, 2), Unstoppable).unwrap();
    bytes[0] = b'P';
    std::fs::write(&path, &bytes).unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err.source, BmpError::Unsupported(_)));
    let img = load(&path).unwrap_or_else(LoadError::into_image);
    assert!(img.is_empty());
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.bmp");
    let err = save(&path, &gradient(2, 2)).unwrap_err();
    assert!(matches!(err, BmpError::IoUnavailable(_)));
    assert!(!path.exists());
}

#[test]
fn zero_size_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.bmp");

    save(&path, &Image::default()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap().len(), 54);

    let loaded = load(&path).unwrap();
    assert!(loaded.is_empty());
    assert_eq!((loaded.width(), loaded.height()), (0, 0));
}

#[test]
fn limits_reject_large() {
    let encoded = encode_bmp(&gradient(4, 4), Unstoppable).unwrap();
    let limits = Limits {
        max_pixels: Some(8),
        ..Default::default()
    };

    let result: Result<Image, _> = decode_bmp_with_limits(&encoded, &limits, Unstoppable);
    match result.unwrap_err() {
        BmpError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let ok: Image = DecodeRequest::new(&encoded)
        .with_limits(&Limits {
            max_pixels: Some(16),
            ..Default::default()
        })
        .decode(Unstoppable)
        .unwrap();
    assert_eq!(ok, gradient(4, 4));
}

/// A caller-owned grid type that stores columns instead of rows.
#[derive(Debug, PartialEq)]
struct ColumnMajor {
    w: u32,
    h: u32,
    data: Vec<Pixel>,
}

impl PixelGrid for ColumnMajor {
    fn new_filled(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            w: width,
            h: height,
            data: vec![fill; (width * height) as usize],
        }
    }

    fn width(&self) -> u32 {
        self.w
    }

    fn height(&self) -> u32 {
        self.h
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.data[(x * self.h + y) as usize]
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.data[(x * self.h + y) as usize] = pixel;
    }
}

#[test]
fn foreign_grid_matches_image() {
    let img = gradient(3, 5);
    let mut cols = ColumnMajor::new_filled(3, 5, BLACK);
    for y in 0..5 {
        for x in 0..3 {
            cols.set_pixel(x, y, img.pixel(x, y));
        }
    }

    let from_cols = encode_bmp(&cols, Unstoppable).unwrap();
    let from_img = encode_bmp(&img, Unstoppable).unwrap();
    assert_eq!(from_cols, from_img);

    let back: ColumnMajor = decode_bmp(&from_img, Unstoppable).unwrap();
    assert_eq!(back, cols);
}

#[test]
fn load_into_foreign_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cols.bmp");
    let img = gradient(2, 3);
    save(&path, &img).unwrap();

    let cols: ColumnMajor = load_into(&path).unwrap();
    assert_eq!(cols.pixel(1, 2), img.pixel(1, 2));
    assert_eq!((cols.width(), cols.height()), (2, 3));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_interop() {
    let img = gradient(4, 2);
    let view = img.as_imgref();
    assert_eq!(view.width(), 4);
    assert_eq!(view.height(), 2);
    assert_eq!(view.rows().nth(1).unwrap()[3], img.pixel(3, 1));

    let owned = imgref::ImgVec::new(img.pixels().to_vec(), 4, 2);
    assert_eq!(Image::try_from(owned).unwrap(), img);
}
