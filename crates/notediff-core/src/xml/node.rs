use super::xname::{XAttribute, XName};

#[derive(Clone, Debug)]
pub enum XmlNodeData {
    Element {
        name: XName,
        attributes: Vec<XAttribute>,
    },
    Text(String),
}

impl XmlNodeData {
    pub fn element(name: XName, attributes: Vec<XAttribute>) -> Self {
        Self::Element { name, attributes }
    }

    pub fn text(content: &str) -> Self {
        Self::Text(content.to_string())
    }

    pub fn name(&self) -> Option<&XName> {
        match self {
            Self::Element { name, .. } => Some(name),
            Self::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> Option<&[XAttribute]> {
        match self {
            Self::Element { attributes, .. } => Some(attributes),
            Self::Text(_) => None,
        }
    }

    /// Value of the attribute `{ns}local`, if present.
    pub fn attribute(&self, ns: &str, local: &str) -> Option<&str> {
        self.attributes()?
            .iter()
            .find(|a| a.name.is(ns, local))
            .map(|a| a.value.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Element { .. } => None,
        }
    }
}
