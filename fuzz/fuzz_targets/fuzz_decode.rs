#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the bytes
    let _ = imglib_bmp::ImageInfo::from_bytes(data);
    let _ = imglib_bmp::decode_bmp::<imglib_bmp::Image>(data, enough::Unstoppable);
});
