//! Star rating groups
//!
//! Each group is a row of star controls plus an optional value field. The
//! group owns nothing but the discovered element ids and the current value;
//! applying a value rewrites the star markers and the field.

use crate::config::RatingMarkers;

use super::page::{ElementId, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingGroup {
    pub container: ElementId,
    /// Stars in document order
    pub stars: Vec<ElementId>,
    /// Value field (`<input name="rating">`), hidden inputs preferred
    pub field: Option<ElementId>,
    pub value: u32,
}

impl RatingGroup {
    /// Discover every rating group on the page and apply its initial value
    pub fn discover_all(page: &mut Page, markers: &RatingMarkers) -> Vec<RatingGroup> {
        let containers = page.query_class(&markers.group);
        containers
            .into_iter()
            .map(|container| {
                let mut group = Self::discover(page, container, markers);
                let initial = group
                    .field
                    .and_then(|f| page.attribute(f, "value"))
                    .map(parse_leading_int)
                    .unwrap_or(0);
                group.apply(page, markers, initial);
                group
            })
            .collect()
    }

    fn discover(page: &Page, container: ElementId, markers: &RatingMarkers) -> RatingGroup {
        let descendants = page.descendants(container);
        let stars = descendants
            .iter()
            .copied()
            .filter(|id| page.has_class(*id, &markers.star))
            .collect();

        let named_inputs: Vec<ElementId> = descendants
            .iter()
            .copied()
            .filter(|id| {
                page.get(*id).is_some_and(|el| el.tag == "input")
                    && page.attribute(*id, "name") == Some(markers.field_name.as_str())
            })
            .collect();
        let field = named_inputs
            .iter()
            .copied()
            .find(|id| page.attribute(*id, "type") == Some("hidden"))
            .or_else(|| named_inputs.first().copied());

        RatingGroup {
            container,
            stars,
            field,
            value: 0,
        }
    }

    /// Set the rating: stars `0..value` on, the rest off, field updated
    pub fn apply(&mut self, page: &mut Page, markers: &RatingMarkers, value: u32) {
        for (i, star) in self.stars.iter().enumerate() {
            if (i as u32) < value {
                page.add_class(*star, &markers.star_on);
                page.set_attribute(*star, "aria-pressed", "true");
            } else {
                page.remove_class(*star, &markers.star_on);
                page.set_attribute(*star, "aria-pressed", "false");
            }
        }
        if let Some(field) = self.field {
            page.set_attribute(field, "value", &value.to_string());
        }
        self.value = value;
    }

    /// Index of `element` among this group's stars
    pub fn star_index(&self, element: ElementId) -> Option<usize> {
        self.stars.iter().position(|s| *s == element)
    }
}

/// Parse leading decimal digits, ignoring surrounding whitespace; 0 otherwise
fn parse_leading_int(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
