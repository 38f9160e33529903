//! Integration tests for the `kids-kanji-checker` binary.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const EXPECTED: &str = "あい_解__格_か_胸_き_側_えお";

/// Writes a zip container holding one content entry.
fn write_container(dir: &Path, name: &str, entry: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    writer
        .start_file("mimetype", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"application/zip").unwrap();
    writer
        .start_file(entry, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap();
    path
}

fn docx_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>あい</w:t></w:r><w:r><w:t>解</w:t></w:r><w:r><w:t>格か胸</w:t></w:r><w:r><w:t>き側えお</w:t></w:r></w:p><w:p/></w:body></w:document>"#
        .to_string()
}

fn odp_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"><office:body><office:presentation><draw:page draw:name="page1"><draw:frame><draw:text-box><text:p><text:span>あい解格か胸き側えお</text:span></text:p></draw:text-box></draw:frame></draw:page></office:presentation></office:body></office:document-content>"#
        .to_string()
}

/// Removes all whitespace so banners and blank lines do not matter.
fn squash(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[test]
fn test_txt_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("story.txt");
    fs::write(&path, "あい解格か胸き側えお\n").unwrap();

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--max-year", "3", "--no-color", "--is-quiet", "--input-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{EXPECTED}\n")));
}

#[test]
fn test_docx_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_container(temp_dir.path(), "story.docx", "word/document.xml", &docx_xml());

    let output = cargo_bin_cmd!("kids-kanji-checker")
        .args(["--max-year", "3", "--no-color", "--is-quiet", "-i"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(squash(&output), EXPECTED);
}

#[test]
fn test_odp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_container(temp_dir.path(), "slides.odp", "content.xml", &odp_xml());

    let output = cargo_bin_cmd!("kids-kanji-checker")
        .args(["--max-year", "3", "--no-color", "--is-quiet", "--input-file"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("page1"));
    let rule = "-".repeat(56);
    assert_eq!(squash(&output), format!("{rule}page1{rule}{EXPECTED}"));
}

#[test]
fn test_stdin() {
    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--stdin", "--no-color", "--is-quiet", "--max-year", "5"])
        .write_stdin("あいう側えお解格か胸き雪く\n")
        .assert()
        .success()
        .stdout("あいう側えお解格か_胸_き雪く\n");
}

#[test]
fn test_title_banner_unless_quiet() {
    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--stdin", "--no-color"])
        .write_stdin("あ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("kids-kanji-checker"));

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--stdin", "--no-color", "--is-quiet"])
        .write_stdin("あ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("kids-kanji-checker").not());
}

#[test]
fn test_file_type_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_container(temp_dir.path(), "story.bin", "word/document.xml", &docx_xml());

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--no-color", "--is-quiet", "--file-type", "docx", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(EXPECTED));
}

#[test]
fn test_custom_grade_table() {
    let temp_dir = TempDir::new().unwrap();
    let grades = temp_dir.path().join("grades.json");
    fs::write(&grades, r#"{"grades": [["解", "格"], ["胸"]]}"#).unwrap();

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--stdin", "--no-color", "--is-quiet", "--max-year", "1", "--grades"])
        .arg(&grades)
        .write_stdin("解格胸一\n")
        .assert()
        .success()
        .stdout("解格_胸__一_\n");
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.pdf");
    fs::write(&path, "x").unwrap();

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--is-quiet", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_missing_content_entry() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_container(temp_dir.path(), "broken.docx", "content.xml", "<a/>");

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--is-quiet", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("word/document.xml"));
}

#[test]
fn test_malformed_docx_reports_location_once() {
    let temp_dir = TempDir::new().unwrap();
    let xml = "<?xml version=\"1.0\"?>\n<w:document xmlns:w=\"w\">\n<w:body>\n<w:p><w:r><w:t>あ</w:x></w:r></w:p>\n</w:body></w:document>";
    let path = write_container(temp_dir.path(), "bad.docx", "word/document.xml", xml);

    let output = cargo_bin_cmd!("kids-kanji-checker")
        .args(["--is-quiet", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("line 4, column "), "{stderr}");
    assert_eq!(stderr.matches("malformed XML").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("</w:x>").count(), 1, "{stderr}");
}

#[test]
fn test_shift_jis_text_does_not_abort() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sjis.txt");
    // "確" in Shift_JIS, then a UTF-8 line
    fs::write(&path, b"\x8a\x6d\n\xe8\xa7\xa3\n").unwrap();

    cargo_bin_cmd!("kids-kanji-checker")
        .args(["--no-color", "--is-quiet", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("_解_\n"));
}

#[test]
fn test_input_required() {
    cargo_bin_cmd!("kids-kanji-checker")
        .arg("--is-quiet")
        .assert()
        .failure();
}

#[test]
fn test_version() {
    cargo_bin_cmd!("kids-kanji-checker")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
