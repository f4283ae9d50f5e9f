#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Scanning must accept any text, including invalid UTF-8 after lossy decoding
    let text = String::from_utf8_lossy(data);
    let first = gcode_meta::parse_metadata(&text);
    let second = gcode_meta::parse_metadata(&text);
    assert_eq!(first, second);
});
