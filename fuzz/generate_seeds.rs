#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 24-bit BMP with the given size; pixel bytes are a simple ramp
    let bmp = |w: u32, h: u32| {
        let stride = (w as usize * 3).div_ceil(4) * 4;
        let size = 54 + stride * h as usize;
        let mut b = vec![0u8; size];
        b[0] = b'B'; b[1] = b'M';
        b[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
        b[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
        b[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
        b[18..22].copy_from_slice(&(w as i32).to_le_bytes()); // width
        b[22..26].copy_from_slice(&(h as i32).to_le_bytes()); // height
        b[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        b[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
        b[34..38].copy_from_slice(&((stride * h as usize) as u32).to_le_bytes());
        for (i, p) in b[54..].iter_mut().enumerate() {
            *p = i as u8;
        }
        b
    };

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1)).unwrap();
    fs::write(format!("{dir}/bmp_2x1.bmp"), bmp(2, 1)).unwrap();
    fs::write(format!("{dir}/bmp_3x3.bmp"), bmp(3, 3)).unwrap();
    fs::write(format!("{dir}/bmp_4x2.bmp"), bmp(4, 2)).unwrap();
    fs::write(format!("{dir}/bmp_0x0.bmp"), bmp(0, 0)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut header_only = bmp(3, 3);
    header_only.truncate(54);
    fs::write(format!("{dir}/header_only.bin"), header_only).unwrap();
    let mut bpp32 = bmp(2, 2);
    bpp32[28..30].copy_from_slice(&32u16.to_le_bytes());
    fs::write(format!("{dir}/bpp32.bin"), bpp32).unwrap();

    println!("Generated seed corpus in {dir}/");
}
