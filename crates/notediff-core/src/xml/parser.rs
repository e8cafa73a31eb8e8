use super::arena::XmlDocument;
use super::node::XmlNodeData;
use super::xname::{XAttribute, XName};
use crate::error::{NotediffError, Result};

pub fn parse(xml: &str) -> Result<XmlDocument> {
    parse_bytes(xml.as_bytes())
}

pub fn parse_bytes(bytes: &[u8]) -> Result<XmlDocument> {
    let text = std::str::from_utf8(bytes).map_err(|e| NotediffError::XmlParse {
        message: e.to_string(),
        location: "input".to_string(),
    })?;
    // Parts written by Word may start with a byte order mark.
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let doc = roxmltree::Document::parse_with_options(
        text,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        },
    )
    .map_err(|e| NotediffError::XmlParse {
        message: e.to_string(),
        location: format!("line {}", e.pos().row),
    })?;

    let mut xml_doc = XmlDocument::new();
    build_tree(doc.root_element(), &mut xml_doc, None);

    Ok(xml_doc)
}

fn build_tree(
    node: roxmltree::Node,
    doc: &mut XmlDocument,
    parent: Option<indextree::NodeId>,
) {
    let node_data = match node.node_type() {
        roxmltree::NodeType::Element => {
            let name = XName::new(
                node.tag_name().namespace().unwrap_or(""),
                node.tag_name().name(),
            );

            let attributes: Vec<XAttribute> = node
                .attributes()
                .map(|attr| {
                    XAttribute::new(
                        XName::new(attr.namespace().unwrap_or(""), attr.name()),
                        attr.value(),
                    )
                })
                .collect();

            XmlNodeData::element(name, attributes)
        }
        roxmltree::NodeType::Text => match node.text() {
            Some(text) => XmlNodeData::text(text),
            None => return,
        },
        _ => return,
    };

    let new_id = match parent {
        Some(parent_id) => doc.add_child(parent_id, node_data),
        None => doc.add_root(node_data),
    };

    for child in node.children() {
        build_tree(child, doc, Some(new_id));
    }
}
