#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Archive path: ZIP parsing -> stream selection -> header scan
    let _ = gcode_meta::extract_metadata(data, gcode_meta::SourceKind::Archive);
});
