//! In-memory element tree implementing [`Dom`].
//!
//! Heights follow a simple block model: an element's natural height is its
//! own content height plus the rendered height of each child, and an
//! element's rendered height is its natural height clamped by `max-height`.

mod node;

use std::collections::BTreeMap;

pub use node::Element;

use crate::dom::{Dom, MaxHeight};

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
struct NodeData {
    tag: String,
    attributes: BTreeMap<String, String>,
    content_height: f32,
    max_height: MaxHeight,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only a `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                tag: "body".into(),
                attributes: BTreeMap::new(),
                content_height: 0.0,
                max_height: MaxHeight::None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Build a document whose body contains `elements`.
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut doc = Self::new();
        let root = doc.root();
        for element in elements {
            doc.append(root, element);
        }
        doc
    }

    /// Append `element` (and its subtree) as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: element.tag,
            attributes: element.attributes,
            content_height: element.content_height,
            max_height: MaxHeight::None,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        for child in element.children {
            self.append(id, child);
        }
        id
    }

    /// Detach `node` from its parent. The node stays allocated but is no
    /// longer reachable from the root.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    /// Element with the given `id` attribute.
    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            if self.nodes[node.0].attributes.get("id").map(String::as_str) == Some(id) {
                return Some(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev());
        }
        None
    }

    pub fn set_content_height(&mut self, node: NodeId, height: f32) {
        self.nodes[node.0].content_height = height;
    }

    /// Height the element currently occupies on screen.
    pub fn rendered_height(&self, node: NodeId) -> f32 {
        let natural = self.natural_height(node);
        match self.nodes[node.0].max_height {
            MaxHeight::None => natural,
            MaxHeight::Px(cap) => natural.min(cap.max(0.0)),
        }
    }

    /// Returns true if the element's `data-active` attribute is `"true"`.
    pub fn is_active(&self, node: NodeId) -> bool {
        self.attribute(node, "data-active").as_deref() == Some("true")
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0].children.clone()
    }

    fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn natural_height(&self, node: NodeId) -> f32 {
        let data = &self.nodes[node.0];
        data.content_height
            + data
                .children
                .iter()
                .map(|child| self.rendered_height(*child))
                .sum::<f32>()
    }

    fn max_height(&self, node: NodeId) -> MaxHeight {
        self.nodes[node.0].max_height
    }

    fn set_max_height(&mut self, node: NodeId, value: MaxHeight) {
        self.nodes[node.0].max_height = value;
    }
}
