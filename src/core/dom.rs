//! In-memory document tree the page controllers read and mutate
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Detached nodes stay in the arena but are no longer reachable
//! from the root, so lookups never see them.

use crate::core::media::TextTrack;
use crate::warn;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Handle to an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// How a scroll request moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately
    Auto,
    /// Animate the scroll
    Smooth,
}

/// A single element node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    /// `id` attribute
    pub id: Option<String>,
    /// Class list in insertion order
    pub classes: Vec<String>,
    /// Inline style declarations
    pub style: BTreeMap<String, String>,
    /// Remaining attributes
    pub attributes: BTreeMap<String, String>,
    /// Own text content
    pub text: String,
    /// Current value of a form control
    pub value: String,
    /// Text tracks of a media element
    pub text_tracks: Vec<TextTrack>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Whether the class list contains `class`
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// One compound selector such as `div.card#main`
#[derive(Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(part: &str) -> Option<Self> {
        const MARKERS: &[char] = &['#', '.'];
        let mut compound = Self::default();

        let tag_end = part.find(MARKERS).unwrap_or(part.len());
        if tag_end > 0 {
            compound.tag = Some(part[..tag_end].to_ascii_lowercase());
        }

        let mut rest = &part[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[marker.len_utf8()..];
            let end = body.find(MARKERS).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            if marker == '#' {
                compound.id = Some(name.to_string());
            } else {
                compound.classes.push(name.to_string());
            }
            rest = &body[end..];
        }
        Some(compound)
    }

    fn matches(&self, element: &Element) -> bool {
        self.tag.as_ref().map_or(true, |tag| *tag == element.tag)
            && self
                .id
                .as_ref()
                .map_or(true, |id| element.id.as_ref() == Some(id))
            && self.classes.iter().all(|class| element.has_class(class))
    }
}

/// Parse a selector made of compounds joined by the descendant combinator
fn parse_selector(selector: &str) -> Option<Vec<Compound>> {
    let compounds = selector
        .split_whitespace()
        .map(Compound::parse)
        .collect::<Option<Vec<_>>>()?;
    if compounds.is_empty() {
        None
    } else {
        Some(compounds)
    }
}

/// Escape text for HTML element content and attribute values
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// A page's element tree with `<html>`, `<head>` and `<body>`
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    last_scroll: Option<(NodeId, ScrollBehavior)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Element::new("html")],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            last_scroll: None,
        };
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.head);
        doc.append_child(doc.root, doc.body);
        doc
    }

    /// The `<head>` element
    #[must_use]
    pub const fn head(&self) -> NodeId {
        self.head
    }

    /// The `<body>` element
    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Create an element with an id and append it to `parent`
    pub fn append_with_id(&mut self, parent: NodeId, tag: &str, id: &str) -> NodeId {
        let node = self.create_element(tag);
        self.element_mut(node).id = Some(id.to_string());
        self.append_child(parent, node);
        node
    }

    /// Create an element with a class and append it to `parent`
    pub fn append_with_class(&mut self, parent: NodeId, tag: &str, class: &str) -> NodeId {
        let node = self.create_element(tag);
        self.add_class(node, class);
        self.append_child(parent, node);
        node
    }

    /// Borrow an element
    #[must_use]
    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    /// Mutably borrow an element
    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Parent of `node`, if attached
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).parent
    }

    /// Children of `node` in order
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.element(node).children
    }

    /// Append `child` as the last child of `parent`, detaching it first
    ///
    /// Appending the root, or a node into its own subtree, would make the
    /// tree cyclic; such calls are logged and leave the tree unchanged.
    ///
    /// # Returns
    /// `true` if `child` was moved under `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child == self.root || self.is_inclusive_ancestor(child, parent) {
            warn!("refusing to append {child:?} under {parent:?}: would create a cycle");
            return false;
        }
        self.detach(child);
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
        true
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    /// Remove `node` from its parent
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.element_mut(node).parent.take() {
            self.element_mut(parent).children.retain(|c| *c != node);
        }
    }

    /// Remove every child and the text of `node`
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.element_mut(node).children);
        for child in children {
            self.element_mut(child).parent = None;
        }
        self.element_mut(node).text.clear();
    }

    /// `node` followed by all of its descendants in document order
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        order
    }

    /// First attached element with the given id
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.element(*node).id.as_deref() == Some(id))
    }

    /// First attached element matching `selector`
    ///
    /// Supports `tag`, `#id`, `.class`, compounds of those and the
    /// descendant combinator. An unparseable selector matches nothing.
    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// All attached elements matching `selector`, in document order
    #[must_use]
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(compounds) = parse_selector(selector) else {
            return Vec::new();
        };
        self.descendants(self.root)
            .into_iter()
            .filter(|node| self.matches(*node, &compounds))
            .collect()
    }

    fn matches(&self, node: NodeId, compounds: &[Compound]) -> bool {
        let Some((last, ancestors)) = compounds.split_last() else {
            return false;
        };
        if !last.matches(self.element(node)) {
            return false;
        }
        let mut current = self.parent(node);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(ancestor) = current else {
                    return false;
                };
                current = self.parent(ancestor);
                if compound.matches(self.element(ancestor)) {
                    break;
                }
            }
        }
        true
    }

    /// Add a class unless already present
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.element(node).has_class(class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    /// Replace the own text of `node`
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        text.clone_into(&mut self.element_mut(node).text);
    }

    /// Own text of `node`
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.element(node).text
    }

    /// Text of `node` and all its descendants joined by spaces
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .into_iter()
            .map(|n| self.text(n))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Set an inline style property
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.element_mut(node)
            .style
            .insert(property.to_string(), value.to_string());
    }

    /// Read an inline style property
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).style.get(property).map(String::as_str)
    }

    /// Set an attribute other than `id`/`class`/`style`
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.element_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Read an attribute set with [`set_attribute`](Self::set_attribute)
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).attributes.get(name).map(String::as_str)
    }

    /// Set the value of a form control
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        value.clone_into(&mut self.element_mut(node).value);
    }

    /// Value of a form control
    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        &self.element(node).value
    }

    /// Scroll `node` into view
    pub fn scroll_into_view(&mut self, node: NodeId, behavior: ScrollBehavior) {
        self.last_scroll = Some((node, behavior));
    }

    /// Most recent scroll request
    #[must_use]
    pub const fn last_scroll(&self) -> Option<(NodeId, ScrollBehavior)> {
        self.last_scroll
    }

    /// Serialize the whole document
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        self.write_node(&mut html, self.root, 0);
        html
    }

    /// Serialize `node` and its subtree
    #[must_use]
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut html = String::new();
        self.write_node(&mut html, node, 0);
        html
    }

    fn write_node(&self, out: &mut String, node: NodeId, depth: usize) {
        let element = self.element(node);
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", element.tag);
        if let Some(id) = &element.id {
            let _ = write!(out, " id=\"{}\"", escape_html(id));
        }
        if !element.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&element.classes.join(" ")));
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_html(&style));
        }
        for (name, value) in &element.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
        if !element.value.is_empty() {
            let _ = write!(out, " value=\"{}\"", escape_html(&element.value));
        }
        out.push('>');

        // Style bodies are raw text in HTML
        if element.tag == "style" {
            out.push_str(&element.text);
        } else {
            out.push_str(&escape_html(&element.text));
        }

        let has_children = !element.children.is_empty() || !element.text_tracks.is_empty();
        if has_children {
            out.push('\n');
        }
        for track in &element.text_tracks {
            let _ = writeln!(
                out,
                "{indent}  <track kind=\"{}\" label=\"{}\" srclang=\"{}\">",
                escape_html(&track.kind),
                escape_html(&track.label),
                escape_html(&track.language)
            );
        }
        for child in &element.children {
            self.write_node(out, *child, depth + 1);
        }
        if has_children {
            out.push_str(&indent);
        }
        let _ = writeln!(out, "</{}>", element.tag);
    }
}
