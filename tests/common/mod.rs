//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Header of a two-color AMS print as written by BambuStudio
pub const BAMBU_HEADER: &str = "\
; HEADER_BLOCK_START
; BambuStudio 01.09.07.52
; model printing time: 1h 5m 12s; total estimated time: 1h 11m 40s
; total layer number: 120
; total filament length [mm] : 1229.28,331.01
; total filament volume [cm^3] : 2956.73,796.15
; total filament weight [g] : 3.73,1.01
; filament_density: 1.26,1.26
; max_z_height: 24.00
; HEADER_BLOCK_END

; CONFIG_BLOCK_START
; filament_colour = #FFFFFF;#000000
; filament_colour_type = 1;1
; filament_diameter = 1.75,1.75
; filament_type = PLA;PLA
; layer_height = 0.2
; CONFIG_BLOCK_END
M73 P0 R71
G28
";

/// Header of a single-extruder print as written by Cura
pub const CURA_HEADER: &str = "\
;FLAVOR:Marlin
;TIME:6183
;Filament used: 2.58531m
;Layer height: 0.2
;MINX:92.365
;MAXX:142.635
;Generated with Cura_SteamEngine 5.6.0
M140 S60
M105
M190 S60
G28
";

/// Build an in-memory ZIP archive from `(name, contents)` pairs
pub fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Build an archive laid out like a BambuStudio `.gcode.3mf` export
pub fn build_sliced_project(plates: &[(u32, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="model" ContentType="application/vnd.ms-package.3dmanufacturing-3dmodel+xml"/>
  <Default Extension="gcode" ContentType="text/x.gcode"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("3D/3dmodel.model", options).unwrap();
    zip.write_all(b"<model unit=\"millimeter\"/>").unwrap();

    zip.add_directory("Metadata/", options).unwrap();
    for (plate, gcode) in plates {
        zip.start_file(format!("Metadata/plate_{}.gcode", plate), options)
            .unwrap();
        zip.write_all(gcode.as_bytes()).unwrap();
        zip.start_file(format!("Metadata/plate_{}.gcode.md5", plate), options)
            .unwrap();
        zip.write_all(b"0123456789abcdef0123456789abcdef").unwrap();
        zip.start_file(format!("Metadata/plate_{}.png", plate), options)
            .unwrap();
        zip.write_all(&[0x89, 0x50, 0x4E, 0x47]).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// `count` lines of motion commands
pub fn filler_lines(count: usize) -> String {
    (0..count).map(|i| format!("G1 X{} Y{} E0.05\n", i % 200, i % 150)).collect()
}
