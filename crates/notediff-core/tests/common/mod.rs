//! In-memory `.docx` fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const SEPARATORS: &str = r#"<w:footnote w:type="separator" w:id="-1"><w:p><w:r><w:separator/></w:r></w:p></w:footnote><w:footnote w:type="continuationSeparator" w:id="0"><w:p><w:r><w:continuationSeparator/></w:r></w:p></w:footnote>"#;

/// A footnote body made of one paragraph per text, each preceded by the reference mark.
pub fn paragraphs(texts: &[&str]) -> String {
    texts
        .iter()
        .map(|t| {
            format!(
                r#"<w:p><w:r><w:footnoteRef/></w:r><w:r><w:t xml:space="preserve"> {}</w:t></w:r></w:p>"#,
                t
            )
        })
        .collect()
}

/// A footnote body laid out as a table row with two cells.
pub fn two_cell_row(left: &str, right: &str) -> String {
    format!(
        r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        left, right
    )
}

pub fn footnotes_part(bodies: &[String]) -> String {
    let notes: String = bodies
        .iter()
        .enumerate()
        .map(|(i, body)| format!(r#"<w:footnote w:id="{}">{}</w:footnote>"#, i + 1, body))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:footnotes xmlns:w="{}">{}{}</w:footnotes>"#,
        W_NS, SEPARATORS, notes
    )
}

pub fn endnotes_part(bodies: &[String]) -> String {
    let notes: String = bodies
        .iter()
        .enumerate()
        .map(|(i, body)| format!(r#"<w:endnote w:id="{}">{}</w:endnote>"#, i + 1, body))
        .collect();
    format!(r#"<w:endnotes xmlns:w="{}">{}</w:endnotes>"#, W_NS, notes)
}

pub fn package(parts: &[(&str, String)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        zip.start_file("[Content_Types].xml", SimpleFileOptions::default()).unwrap();
        zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();
        zip.start_file("word/document.xml", SimpleFileOptions::default()).unwrap();
        zip.write_all(
            format!(r#"<w:document xmlns:w="{}"><w:body><w:p/></w:body></w:document>"#, W_NS)
                .as_bytes(),
        )
        .unwrap();
        for (name, content) in parts {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer.into_inner()
}

/// A `.docx` whose footnotes are one single-paragraph footnote per text.
pub fn docx_with_footnotes(texts: &[&str]) -> Vec<u8> {
    let bodies: Vec<String> = texts.iter().map(|t| paragraphs(&[t])).collect();
    package(&[("word/footnotes.xml", footnotes_part(&bodies))])
}

pub fn docx_without_footnotes() -> Vec<u8> {
    package(&[])
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
