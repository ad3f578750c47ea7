//! YAML page fixtures
//!
//! A fixture describes a page as a tree of elements with classes, attributes
//! and laid-out bounds, plus the named drawing surfaces it provides. Used by
//! the replay CLI and by tests that prefer data over builder code.
//!
//! ```yaml
//! surfaces:
//!   - { name: mini-covid, width: 120, height: 36 }
//! elements:
//!   - tag: header
//!     children:
//!       - classes: [info-dropdown]
//!         name: about
//!         rect: { x: 0, y: 0, width: 80, height: 32 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::view::geometry::Rect;

use super::page::{ElementId, Page};

#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceSpec {
    pub name: String,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub rect: Option<Rect>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub surfaces: Vec<SurfaceSpec>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl PageFixture {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page fixture {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse page fixture {}", path.display()))
    }

    /// Materialize the fixture into a page
    pub fn build(&self) -> Page {
        let mut page = Page::new();
        let body = page.body();
        for node in &self.elements {
            build_element(&mut page, body, node);
        }
        for surface in &self.surfaces {
            page.add_surface(surface.name.clone(), surface.width, surface.height);
        }
        page
    }
}

fn build_element(page: &mut Page, parent: ElementId, node: &ElementSpec) -> ElementId {
    let id = page.append(parent, &node.tag);
    if let Some(name) = &node.name {
        page.set_name(id, name.clone());
    }
    for class in &node.classes {
        page.add_class(id, class);
    }
    for (key, value) in &node.attributes {
        page.set_attribute(id, key, value);
    }
    if let Some(rect) = node.rect {
        page.set_rect(id, rect);
    }
    for child in &node.children {
        build_element(page, id, child);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
surfaces:
  - { name: mini-covid, width: 40, height: 12 }
elements:
  - tag: header
    name: top
    children:
      - classes: [info-dropdown]
        name: about
        rect: { x: 0, y: 0, width: 80, height: 32 }
        children:
          - { tag: button, classes: [info-btn] }
"#;

    #[test]
    fn test_fixture_builds_tree() {
        let page = PageFixture::from_yaml(FIXTURE).unwrap().build();
        let about = page.find_by_name("about").unwrap();
        let header = page.find_by_name("top").unwrap();
        assert!(page.contains(header, about));
        assert!(page.has_class(about, "info-dropdown"));
        assert_eq!(page.bounding_rect(about), Some(Rect::new(0.0, 0.0, 80.0, 32.0)));
        assert_eq!(page.query_class("info-btn").len(), 1);
        assert!(page.surface("mini-covid").is_some());
    }

    #[test]
    fn test_empty_fixture_is_valid() {
        let page = PageFixture::from_yaml("{}").unwrap().build();
        assert!(page.is_empty());
    }
}
