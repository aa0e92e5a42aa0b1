#![no_main]

use curve_point_editor::format_polynomial;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let coefficients: Vec<f64> = data
        .chunks_exact(8)
        .take(11)
        .filter_map(|chunk| chunk.try_into().ok().map(f64::from_le_bytes))
        .filter(|c: &f64| c.is_finite())
        .collect();

    let text = format_polynomial(&coefficients);
    assert!(!text.is_empty());
});
