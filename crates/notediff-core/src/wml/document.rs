use crate::error::{NotediffError, Result};
use crate::package::OoxmlPackage;
use crate::types::NoteKind;
use crate::xml::arena::XmlDocument;

const MAIN_DOCUMENT_PART: &str = "word/document.xml";

pub struct WmlDocument {
    package: OoxmlPackage,
}

impl WmlDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let package = OoxmlPackage::open(bytes)?;
        if !package.has_part(MAIN_DOCUMENT_PART) {
            return Err(NotediffError::MissingPart {
                part_path: MAIN_DOCUMENT_PART.to_string(),
                document_type: "Word".to_string(),
            });
        }
        Ok(Self { package })
    }

    /// The notes part for `kind`, or `None` when the document has no notes of that kind.
    pub fn notes(&self, kind: NoteKind) -> Result<Option<XmlDocument>> {
        let path = kind.part_path();
        match self.package.get_part(path) {
            Some(_) => Ok(Some(self.package.get_xml_part(path)?)),
            None => Ok(None),
        }
    }
}
