//! Read-only document tree with traversal helpers.
//!
//! The nested [`DocumentData`] is flattened into an arena once at load time.
//! Every node gets a [`NodeId`], a parent link and a class index so rules can
//! visit nodes by kind and walk ancestors without recursion.

use crate::model::{Class, DocumentData, ForeignStyle, Layer, RawLayer, SharedStyle, Style};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// IO error reading the document file.
    #[error("Failed to read document {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document JSON does not match the expected shape.
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Typed payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A layer in the page tree.
    Layer(Layer),
    /// A document-level shared style.
    SharedStyle(SharedStyle),
}

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

impl Node {
    /// Returns the handle of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the parent handle, `None` for pages and shared styles.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the child handles in stacking order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the class discriminant.
    #[must_use]
    pub fn class(&self) -> Class {
        match &self.kind {
            NodeKind::Layer(layer) => layer.class,
            NodeKind::SharedStyle(_) => Class::SharedStyle,
        }
    }

    /// Returns the typed payload.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Materializes this node as a layer.
    #[must_use]
    pub fn as_layer(&self) -> Option<&Layer> {
        match &self.kind {
            NodeKind::Layer(layer) => Some(layer),
            NodeKind::SharedStyle(_) => None,
        }
    }

    /// Materializes this node as a shared style.
    #[must_use]
    pub fn as_shared_style(&self) -> Option<&SharedStyle> {
        match &self.kind {
            NodeKind::SharedStyle(style) => Some(style),
            NodeKind::Layer(_) => None,
        }
    }

    /// Returns the style carried by this node, if any.
    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        match &self.kind {
            NodeKind::Layer(layer) => layer.style.as_ref(),
            NodeKind::SharedStyle(style) => Some(&style.value),
        }
    }

    /// Returns the object identifier.
    #[must_use]
    pub fn object_id(&self) -> &str {
        match &self.kind {
            NodeKind::Layer(layer) => &layer.object_id,
            NodeKind::SharedStyle(style) => &style.object_id,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Layer(layer) => &layer.name,
            NodeKind::SharedStyle(style) => &style.name,
        }
    }
}

/// A parsed design document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    by_class: HashMap<Class, Vec<NodeId>>,
    pages: Vec<NodeId>,
    foreign_layer_styles: Vec<ForeignStyle>,
    foreign_text_styles: Vec<ForeignStyle>,
}

impl Document {
    /// Builds a document from its serde model.
    #[must_use]
    pub fn new(data: DocumentData) -> Self {
        let mut doc = Self {
            foreign_layer_styles: data.foreign_layer_styles,
            foreign_text_styles: data.foreign_text_styles,
            ..Self::default()
        };

        for page in data.pages {
            let id = doc.push_layer(page, None);
            doc.pages.push(id);
        }
        for style in data.layer_styles.into_iter().chain(data.layer_text_styles) {
            doc.push(None, NodeKind::SharedStyle(style));
        }

        for node in &doc.nodes {
            doc.by_class.entry(node.class()).or_default().push(node.id);
        }

        debug!(
            "Indexed document: {} nodes, {} pages",
            doc.nodes.len(),
            doc.pages.len()
        );
        doc
    }

    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match [`DocumentData`].
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        let data: DocumentData = serde_json::from_str(content)?;
        Ok(Self::new(data))
    }

    /// Builds a document from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not match [`DocumentData`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocumentError> {
        let data: DocumentData = serde_json::from_value(value)?;
        Ok(Self::new(data))
    }

    /// Loads a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            parent,
            children: Vec::new(),
            kind,
        });
        id
    }

    fn push_layer(&mut self, raw: RawLayer, parent: Option<NodeId>) -> NodeId {
        let id = self.push(parent, NodeKind::Layer(raw.layer));
        for child in raw.layers {
            let child_id = self.push_layer(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self.node(id)?.parent.and_then(|p| self.node(p))
    }

    /// Iterates the children of a node in stacking order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.node(id)
            .map(Node::children)
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.node(*child))
    }

    /// Iterates the pages.
    pub fn pages(&self) -> impl Iterator<Item = &Node> {
        self.pages.iter().filter_map(|id| self.node(*id))
    }

    /// Iterates every node of one class, in document order.
    pub fn nodes_of(&self, class: Class) -> impl Iterator<Item = &Node> {
        self.by_class
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.node(*id))
    }

    /// Iterates every node whose class is one of `classes`, in document order.
    pub fn nodes_of_any<'a>(&'a self, classes: &'a [Class]) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .iter()
            .filter(move |node| classes.contains(&node.class()))
    }

    /// Iterates every layer below page level, in document order.
    pub fn layers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| {
            matches!(&node.kind, NodeKind::Layer(layer) if layer.class != Class::Page)
        })
    }

    /// Iterates every shared style definition (layer styles, then text styles).
    pub fn shared_styles(&self) -> impl Iterator<Item = &Node> {
        self.nodes_of(Class::SharedStyle)
    }

    /// Walks the ancestors of a node from its parent outward to the root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.node(id).and_then(|node| node.parent),
        }
    }

    /// Returns the layer path of a node, e.g. `Page 1 / Home / Header`.
    #[must_use]
    pub fn path(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        let mut names: Vec<&str> = self.ancestors(id).map(Node::name).collect();
        names.reverse();
        names.push(node.name());
        names.join(" / ")
    }

    /// Text styles imported from libraries.
    #[must_use]
    pub fn foreign_text_styles(&self) -> &[ForeignStyle] {
        &self.foreign_text_styles
    }

    /// Layer styles imported from libraries.
    #[must_use]
    pub fn foreign_layer_styles(&self) -> &[ForeignStyle] {
        &self.foreign_layer_styles
    }
}

/// Iterator over the ancestors of a node, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.document.node(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
