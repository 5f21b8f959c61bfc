//! Host page abstraction.
//!
//! The store drives the page through [`PageHost`] and never touches a
//! document directly. A host hands out element ids; the store treats them
//! as opaque and re-creates an element whenever its id is no longer
//! attached (a competing page script may have removed it).

use std::collections::HashMap;

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;

/// Opaque handle to an element created by a [`PageHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// An element produced by injected script, ready to be appended to the
/// page body through the capability surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedElement {
    pub tag: String,
    pub markup: String,
}

impl DetachedElement {
    pub fn new(tag: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            markup: markup.into(),
        }
    }
}

/// The surface the patch store needs from a host page.
///
/// Implementations must tolerate content being set repeatedly with the
/// same value; the store re-applies on every apply.
pub trait PageHost: Send {
    /// Create a fresh style-bearing element attached to the document.
    fn create_style_element(&mut self) -> ElementId;

    /// Create a fresh container element attached to the document, isolated
    /// from page layout and styling.
    fn create_container_element(&mut self) -> ElementId;

    /// Whether the element is still attached to the document.
    fn is_attached(&self, id: ElementId) -> bool;

    /// Replace the style element's rule text.
    fn set_style_content(&mut self, id: ElementId, css: &str);

    /// Replace the container's rendered content. Discards any live
    /// references into the previous content.
    fn set_container_markup(&mut self, id: ElementId, markup: &str);

    /// Append an element to the page body. Exposed to injected script via
    /// the capability surface.
    fn append_to_body(&mut self, element: DetachedElement);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Style,
    Container,
}

#[derive(Debug)]
struct ElementRecord {
    kind: ElementKind,
    content: String,
    attached: bool,
}

/// A self-contained page model.
///
/// Backs the CLI session and the test suites. Elements live in a flat map;
/// `detach` simulates a competing script removing a managed element.
#[derive(Debug, Default)]
pub struct InMemoryPage {
    elements: HashMap<ElementId, ElementRecord>,
    body: Vec<DetachedElement>,
    next_id: u64,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of an element, if it exists.
    pub fn content(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|record| record.content.as_str())
    }

    /// Elements appended to the body by injected script.
    pub fn body(&self) -> &[DetachedElement] {
        &self.body
    }

    /// Simulate removal of an element from the document.
    pub fn detach(&mut self, id: ElementId) {
        if let Some(record) = self.elements.get_mut(&id) {
            record.attached = false;
        }
    }

    /// Number of attached style elements (the store keeps at most one).
    pub fn attached_style_count(&self) -> usize {
        self.count_attached(ElementKind::Style)
    }

    /// Number of attached container elements (the store keeps at most one).
    pub fn attached_container_count(&self) -> usize {
        self.count_attached(ElementKind::Container)
    }

    fn count_attached(&self, kind: ElementKind) -> usize {
        self.elements
            .values()
            .filter(|record| record.kind == kind && record.attached)
            .count()
    }

    fn create(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            ElementRecord {
                kind,
                content: String::new(),
                attached: true,
            },
        );
        id
    }

    fn set_content(&mut self, id: ElementId, content: &str) {
        if let Some(record) = self.elements.get_mut(&id) {
            record.content = content.to_string();
        }
    }
}

impl PageHost for InMemoryPage {
    fn create_style_element(&mut self) -> ElementId {
        self.create(ElementKind::Style)
    }

    fn create_container_element(&mut self) -> ElementId {
        self.create(ElementKind::Container)
    }

    fn is_attached(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|record| record.attached)
    }

    fn set_style_content(&mut self, id: ElementId, css: &str) {
        self.set_content(id, css);
    }

    fn set_container_markup(&mut self, id: ElementId, markup: &str) {
        self.set_content(id, markup);
    }

    fn append_to_body(&mut self, element: DetachedElement) {
        self.body.push(element);
    }
}
