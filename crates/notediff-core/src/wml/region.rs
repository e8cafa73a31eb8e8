//! Builds the nested note region (entries → paragraphs → lines) from a
//! footnotes or endnotes part.
//!
//! Table rows inside a note become a paragraph holding a single line whose
//! sub-fields are the row's cell texts. This is the two-column layout some
//! documents use to split a note body across cells.

use crate::error::{NotediffError, Result};
use crate::types::NoteKind;
use crate::xml::arena::XmlDocument;
use crate::xml::namespaces::{MC, W};
use crate::xml::node::XmlNodeData;
use indextree::NodeId;
use serde::{Deserialize, Serialize};

/// A node of the nested note region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionNode {
    Text(String),
    Group(Vec<RegionNode>),
}

impl RegionNode {
    pub fn text(s: &str) -> Self {
        RegionNode::Text(s.to_string())
    }

    pub fn group(children: Vec<RegionNode>) -> Self {
        RegionNode::Group(children)
    }
}

/// All note entries of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRegion {
    pub entries: Vec<RegionNode>,
}

impl NoteRegion {
    pub fn new(entries: Vec<RegionNode>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Separator entries Word stores alongside real notes.
const SKIPPED_NOTE_TYPES: [&str; 3] = ["separator", "continuationSeparator", "continuationNotice"];

pub fn build_note_region(doc: &XmlDocument, kind: NoteKind) -> Result<NoteRegion> {
    let root = doc.root().ok_or_else(|| NotediffError::UnsupportedStructure {
        message: "notes part is empty".to_string(),
    })?;

    if !doc.is_element(root, W::NS, kind.container_local_name()) {
        let found = doc
            .name(root)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "text".to_string());
        return Err(NotediffError::UnsupportedStructure {
            message: format!(
                "expected w:{} root element, found {}",
                kind.container_local_name(),
                found
            ),
        });
    }

    let mut entries = Vec::new();
    for note in doc.children(root) {
        if !doc.is_element(note, W::NS, kind.entry_local_name()) {
            continue;
        }
        let note_type = doc.get(note).and_then(|data| data.attribute(W::NS, "type"));
        if note_type.map(|t| SKIPPED_NOTE_TYPES.contains(&t)).unwrap_or(false) {
            continue;
        }

        let mut paragraphs = Vec::new();
        collect_blocks(doc, note, kind, &mut paragraphs);
        entries.push(RegionNode::Group(paragraphs));
    }

    Ok(NoteRegion { entries })
}

/// Walks block-level content, emitting one paragraph node per `w:p` and per table row.
fn collect_blocks(doc: &XmlDocument, parent: NodeId, kind: NoteKind, out: &mut Vec<RegionNode>) {
    for child in doc.children(parent) {
        let Some(name) = doc.name(child) else { continue };
        if name.is(MC::NS, "AlternateContent") {
            if let Some(branch) = alternate_branch(doc, child) {
                collect_blocks(doc, branch, kind, out);
            }
            continue;
        }
        if name.namespace.as_deref() != Some(W::NS) {
            continue;
        }

        match name.local_name.as_str() {
            "p" => {
                let lines = paragraph_lines(doc, child, kind);
                out.push(RegionNode::Group(
                    lines.into_iter().map(RegionNode::Text).collect(),
                ));
            }
            "tbl" => {
                for row in doc.children(child) {
                    if doc.is_element(row, W::NS, "tr") {
                        let cells = row_cells(doc, row, kind);
                        out.push(RegionNode::Group(vec![RegionNode::Group(cells)]));
                    }
                }
            }
            "sdt" => {
                if let Some(content) = doc.find_child(child, W::NS, "sdtContent") {
                    collect_blocks(doc, content, kind, out);
                }
            }
            "customXml" | "ins" | "moveTo" => collect_blocks(doc, child, kind, out),
            _ => {}
        }
    }
}

fn row_cells(doc: &XmlDocument, row: NodeId, kind: NoteKind) -> Vec<RegionNode> {
    doc.children(row)
        .filter(|&cell| doc.is_element(cell, W::NS, "tc"))
        .map(|cell| RegionNode::Text(cell_text(doc, cell, kind)))
        .collect()
}

/// Lines of the cell's block content joined by newlines. Paragraphs nested inside
/// runs (text boxes) are read once, by their enclosing paragraph.
fn cell_text(doc: &XmlDocument, cell: NodeId, kind: NoteKind) -> String {
    let mut blocks = Vec::new();
    collect_blocks(doc, cell, kind, &mut blocks);

    let mut lines = Vec::new();
    for block in &blocks {
        push_leaves(block, &mut lines);
    }
    lines.join("\n")
}

fn push_leaves<'a>(node: &'a RegionNode, out: &mut Vec<&'a str>) {
    match node {
        RegionNode::Text(text) => out.push(text),
        RegionNode::Group(children) => {
            for child in children {
                push_leaves(child, out);
            }
        }
    }
}

/// `mc:Fallback` when present, otherwise the first `mc:Choice`.
fn alternate_branch(doc: &XmlDocument, node: NodeId) -> Option<NodeId> {
    doc.find_child(node, MC::NS, "Fallback")
        .or_else(|| doc.find_child(node, MC::NS, "Choice"))
}

/// Text of a paragraph, split into lines at `w:br` and `w:cr`.
fn paragraph_lines(doc: &XmlDocument, para: NodeId, kind: NoteKind) -> Vec<String> {
    let mut lines = vec![String::new()];
    for child in doc.children(para) {
        extract_text_recursive(doc, child, kind, &mut lines);
    }
    lines
}

fn extract_text_recursive(
    doc: &XmlDocument,
    node: NodeId,
    kind: NoteKind,
    lines: &mut Vec<String>,
) {
    let Some(XmlNodeData::Element { name, .. }) = doc.get(node) else {
        return;
    };
    let ns = name.namespace.as_deref();
    let local = name.local_name.as_str();

    if ns == Some(MC::NS) && local == "AlternateContent" {
        if let Some(branch) = alternate_branch(doc, node) {
            for child in doc.children(branch) {
                extract_text_recursive(doc, child, kind, lines);
            }
        }
        return;
    }

    if ns != Some(W::NS) {
        return;
    }

    match local {
        "t" => {
            let current = current_line(lines);
            for child in doc.children(node) {
                if let Some(text) = doc.get(child).and_then(|d| d.text_content()) {
                    current.push_str(text);
                }
            }
        }
        "tab" => current_line(lines).push('\t'),
        "noBreakHyphen" => current_line(lines).push('-'),
        "softHyphen" => current_line(lines).push('\u{00AD}'),
        "br" | "cr" => lines.push(String::new()),
        // Properties, deleted content and the note's own number mark carry no note text.
        "pPr" | "rPr" | "del" | "delText" | "moveFrom" | "instrText" => {}
        _ if local == kind.reference_mark_local_name() => {}
        _ => {
            for child in doc.children(node) {
                extract_text_recursive(doc, child, kind, lines);
            }
        }
    }
}

fn current_line(lines: &mut Vec<String>) -> &mut String {
    if lines.is_empty() {
        lines.push(String::new());
    }
    let last = lines.len() - 1;
    &mut lines[last]
}
