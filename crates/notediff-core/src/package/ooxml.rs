use crate::error::{NotediffError, Result};
use crate::xml::XmlDocument;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::read::ZipArchive;

/// Read-only view of an OOXML zip package, holding every part in memory.
pub struct OoxmlPackage {
    parts: HashMap<String, Vec<u8>>,
}

impl OoxmlPackage {
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor)?;

        let mut parts = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().trim_start_matches('/').to_string();
            let mut content = Vec::new();
            file.read_to_end(&mut content)
                .map_err(|e| NotediffError::InvalidPackage {
                    message: format!("cannot read part '{}': {}", name, e),
                })?;
            parts.insert(name, content);
        }

        Ok(Self { parts })
    }

    pub fn get_part(&self, path: &str) -> Option<&[u8]> {
        self.parts.get(path).map(|v| v.as_slice())
    }

    pub fn has_part(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    pub fn get_xml_part(&self, path: &str) -> Result<XmlDocument> {
        let bytes = self.get_part(path).ok_or_else(|| NotediffError::MissingPart {
            part_path: path.to_string(),
            document_type: "OOXML".to_string(),
        })?;
        crate::xml::parser::parse_bytes(bytes)
    }
}
