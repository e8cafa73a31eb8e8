use super::node::XmlNodeData;
use super::xname::XName;
use indextree::{Arena, NodeId};

pub struct XmlDocument {
    arena: Arena<XmlNodeData>,
    root: Option<NodeId>,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&XmlNodeData> {
        self.arena.get(id).map(|node| node.get())
    }

    pub fn add_root(&mut self, data: XmlNodeData) -> NodeId {
        let id = self.arena.new_node(data);
        self.root = Some(id);
        id
    }

    pub fn add_child(&mut self, parent: NodeId, data: XmlNodeData) -> NodeId {
        let child = self.arena.new_node(data);
        parent.append(child, &mut self.arena);
        child
    }

    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        parent.children(&self.arena)
    }

    pub fn name(&self, id: NodeId) -> Option<&XName> {
        self.get(id).and_then(|data| data.name())
    }

    /// True when `id` is an element named `{ns}local`.
    pub fn is_element(&self, id: NodeId, ns: &str, local: &str) -> bool {
        self.name(id).map(|n| n.is(ns, local)).unwrap_or(false)
    }

    /// First child element named `{ns}local`.
    pub fn find_child(&self, parent: NodeId, ns: &str, local: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&child| self.is_element(child, ns, local))
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}
