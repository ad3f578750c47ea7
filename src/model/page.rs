//! Page model - a headless element tree standing in for the host document
//!
//! Elements live in an arena indexed by `ElementId`. Each element carries
//! class markers, string attributes, parent/child links and an optional
//! laid-out bounding rectangle. The dropdown subsystem only ever reads the
//! tree structure and writes class markers and attributes.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::view::geometry::Rect;
use crate::view::surface::Surface;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier for an element in the page arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

// ============================================================================
// Element
// ============================================================================

/// A single node of the page
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    /// Tag name (e.g. "div", "button", "input")
    pub tag: String,
    /// Author-assigned name (the markup `id` attribute), used for lookups
    pub name: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    /// Laid-out bounds; `None` when the element has no layout box
    pub rect: Option<Rect>,
    /// False once the element has been removed from the document
    pub attached: bool,
}

impl Element {
    fn new(id: ElementId, tag: &str, parent: Option<ElementId>) -> Self {
        Self {
            id,
            tag: tag.to_string(),
            name: None,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            parent,
            children: Vec::new(),
            rect: None,
            attached: true,
        }
    }
}

// ============================================================================
// Page
// ============================================================================

/// The whole document: element arena plus named drawing surfaces
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    body: ElementId,
    surfaces: HashMap<String, Surface>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Create an empty page containing only `<body>`
    pub fn new() -> Self {
        let body = ElementId(0);
        Self {
            elements: vec![Element::new(body, "body", None)],
            body,
            surfaces: HashMap::new(),
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.len() <= 1
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    // === Construction ===

    /// Append a new child element and return its id
    ///
    /// An unknown parent attaches the element to `<body>`.
    pub fn append(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let parent = if self.get(parent).is_some() {
            parent
        } else {
            self.body
        };
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(id, tag, Some(parent)));
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        id
    }

    pub fn set_name(&mut self, id: ElementId, name: impl Into<String>) {
        if let Some(el) = self.get_mut(id) {
            el.name = Some(name.into());
        }
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(el) = self.get_mut(id) {
            el.rect = Some(rect);
        }
    }

    /// Remove an element (and its subtree) from the document
    ///
    /// The arena slot stays valid so held ids never dangle; the subtree
    /// simply stops being laid out or discovered.
    pub fn detach(&mut self, id: ElementId) {
        if id == self.body {
            return;
        }
        let Some(parent) = self.get(id).and_then(|el| el.parent) else {
            return;
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.get_mut(next) {
                el.attached = false;
                stack.extend(el.children.iter().copied());
            }
        }
    }

    // === Class markers ===

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.classes.contains(class))
    }

    /// Add a class marker; returns true if the marker was newly added
    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        self.get_mut(id)
            .is_some_and(|el| el.classes.insert(class.to_string()))
    }

    /// Remove a class marker; returns true if the marker was present
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        self.get_mut(id).is_some_and(|el| el.classes.remove(class))
    }

    // === Attributes ===

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    /// Set an attribute; returns true if the stored value changed
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if el.attributes.get(name).map(String::as_str) == Some(value) {
            return false;
        }
        el.attributes.insert(name.to_string(), value.to_string());
        true
    }

    // === Queries ===

    /// Child element count (the `children.length` of the markup node)
    pub fn child_count(&self, id: ElementId) -> usize {
        self.get(id).map_or(0, |el| el.children.len())
    }

    /// Inclusive containment: true when `node` is `ancestor` or lies beneath it
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|el| el.parent);
        }
        false
    }

    /// Iterate `id` and its ancestors up to `<body>` (event bubbling order)
    pub fn ancestors_inclusive(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.get(id).map(|el| el.id), move |current| {
            self.get(*current).and_then(|el| el.parent)
        })
    }

    /// Descendants of `root` (excluding `root`) in document order
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = match self.get(root) {
            Some(el) => el.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.get(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    /// All attached elements carrying `class`, in document order
    pub fn query_class(&self, class: &str) -> Vec<ElementId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// All attached elements carrying any of `classes`, in document order
    ///
    /// Tag names are accepted too, so `section` matches `<section>` elements.
    pub fn query_any(&self, selectors: &[String]) -> Vec<ElementId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|id| {
                self.get(*id).is_some_and(|el| {
                    selectors
                        .iter()
                        .any(|s| el.classes.contains(s) || el.tag == *s)
                })
            })
            .collect()
    }

    /// First descendant of `root` carrying `class`
    pub fn find_descendant(&self, root: ElementId, class: &str) -> Option<ElementId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.has_class(*id, class))
    }

    /// Look up an element by its author-assigned name
    pub fn find_by_name(&self, name: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|el| el.attached && el.name.as_deref() == Some(name))
            .map(|el| el.id)
    }

    /// Display label for logs and dumps: the name if any, else `tag#index`
    pub fn label(&self, id: ElementId) -> String {
        match self.get(id) {
            Some(el) => el
                .name
                .clone()
                .unwrap_or_else(|| format!("{}#{}", el.tag, id.0)),
            None => format!("?#{}", id.0),
        }
    }

    /// Laid-out bounds, or `None` for detached or unlayoutable elements
    pub fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id)
            .filter(|el| el.attached)
            .and_then(|el| el.rect)
    }

    // === Drawing surfaces ===

    pub fn add_surface(&mut self, name: impl Into<String>, width: usize, height: usize) {
        self.surfaces
            .insert(name.into(), Surface::new(width, height));
    }

    pub fn surface(&self, name: &str) -> Option<&Surface> {
        self.surfaces.get(name)
    }

    pub fn surface_mut(&mut self, name: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(name)
    }
}
