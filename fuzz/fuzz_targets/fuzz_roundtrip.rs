#![no_main]
use libfuzzer_sys::fuzz_target;
use imglib_bmp::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode_bmp::<Image>(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode_bmp(&decoded, enough::Unstoppable)
        .expect("decoded image failed to re-encode");
    let Ok(decoded2) = decode_bmp::<Image>(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
});
