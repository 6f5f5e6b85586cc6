#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

pub fn berichtsheft_cmd() -> Command {
    let mut cmd = Command::cargo_bin("berichtsheft").unwrap();
    cmd.env_remove("BERICHTSHEFT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Minimal DOCX template using every report placeholder
pub fn write_template(dir: &Path) -> PathBuf {
    let document = "<w:document><w:body>\
        <w:p><w:r><w:t>{{ NAME }} {{ JAHR }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>{{ DAT_STA }} - {{ DAT_END }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>MO: {{ MO_TAETIGKEITEN }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>DI: {{ DI_TAETIGKEITEN }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>MI: {{ MI_TAETIGKEITEN }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>DO: {{ DO_TAETIGKEITEN }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>FR: {{ FR_TAETIGKEITEN }}</w:t></w:r></w:p>\
        <w:p><w:r><w:t>Datum: {{ DAT_HEUTE }}</w:t></w:r></w:p>\
        </w:body></w:document>";

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", FileOptions::default())
        .unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer
        .start_file("word/document.xml", FileOptions::default())
        .unwrap();
    writer.write_all(document.as_bytes()).unwrap();

    let path = dir.join("Vorlage.docx");
    fs::write(&path, writer.finish().unwrap().into_inner()).unwrap();
    path
}

/// Body XML of a rendered DOCX file
pub fn read_document_xml(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Shell script standing in for soffice: copies the input with a prefix
#[cfg(unix)]
pub fn write_fake_converter(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-soffice");
    let script = r#"#!/bin/sh
fmt="$3"; outdir="$5"; src="$6"
name=$(basename "$src"); name="${name%.*}"
{ printf 'converted:'; cat "$src"; } > "$outdir/$name.$fmt"
"#;
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
