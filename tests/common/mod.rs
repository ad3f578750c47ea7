//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dropdown_control::config::DropdownConfig;
use dropdown_control::model::{
    AppModel, Dropdown, DropdownId, ElementId, Page, PointerCapabilities,
};
use dropdown_control::view::Rect;

/// Dropdown ids in the header fixture, in discovery order
pub const ABOUT: DropdownId = DropdownId(0);
pub const RESOURCES: DropdownId = DropdownId(1);
pub const CONTACT: DropdownId = DropdownId(2);

fn element(
    page: &mut Page,
    parent: ElementId,
    tag: &str,
    name: &str,
    classes: &[&str],
    rect: Option<Rect>,
) -> ElementId {
    let id = page.append(parent, tag);
    page.set_name(id, name);
    for class in classes {
        page.add_class(id, class);
    }
    if let Some(rect) = rect {
        page.set_rect(id, rect);
    }
    id
}

fn dropdown(page: &mut Page, parent: ElementId, name: &str, x: f32, items: usize, trigger: bool) {
    let dd = element(
        page,
        parent,
        "div",
        name,
        &["info-dropdown"],
        Some(Rect::new(x, 10.0, 100.0, 40.0)),
    );
    if trigger {
        let btn = element(
            page,
            dd,
            "button",
            &format!("{}-btn", name),
            &["info-btn"],
            Some(Rect::new(x, 10.0, 100.0, 40.0)),
        );
        element(page, btn, "span", &format!("{}-icon", name), &[], None);
    }
    let menu = element(
        page,
        dd,
        "div",
        &format!("{}-menu", name),
        &["info-menu"],
        Some(Rect::new(x, 50.0, 200.0, 150.0)),
    );
    for i in 0..items {
        element(page, menu, "a", &format!("{}-link-{}", name, i + 1), &[], None);
    }
}

/// A header with three registered dropdowns and surrounding content
///
/// - `about` (menu `[10,50]–[210,200]`) overlaps `hero`
/// - `resources` (menu `[300,50]–[500,200]`) overlaps `hero` and `card-1`
/// - `contact` has an empty menu and behaves as a plain link
/// - `broken` has no trigger and is not registered
/// - `footer-note` overlaps both menus but is not an overlap candidate
pub fn header_page() -> Page {
    let mut page = Page::new();
    let body = page.body();

    let header = element(
        &mut page,
        body,
        "header",
        "header",
        &[],
        Some(Rect::new(0.0, 0.0, 1000.0, 60.0)),
    );
    dropdown(&mut page, header, "about", 10.0, 2, true);
    dropdown(&mut page, header, "resources", 300.0, 3, true);
    dropdown(&mut page, header, "contact", 600.0, 0, true);
    dropdown(&mut page, header, "broken", 800.0, 2, false);

    element(
        &mut page,
        body,
        "section",
        "hero",
        &["hero-section"],
        Some(Rect::new(0.0, 100.0, 400.0, 300.0)),
    );
    let cards = element(
        &mut page,
        body,
        "div",
        "cards",
        &["cards-row"],
        Some(Rect::new(0.0, 600.0, 1000.0, 200.0)),
    );
    element(
        &mut page,
        cards,
        "div",
        "card-1",
        &["card"],
        Some(Rect::new(450.0, 120.0, 100.0, 50.0)),
    );
    element(
        &mut page,
        body,
        "p",
        "footer-note",
        &[],
        Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)),
    );

    let rating = element(&mut page, body, "div", "rating", &["star-rating"], None);
    for i in 1..=5 {
        element(&mut page, rating, "span", &format!("star-{}", i), &["star"], None);
    }
    let field = element(&mut page, rating, "input", "rating-value", &[], None);
    page.set_attribute(field, "name", "rating");
    page.set_attribute(field, "type", "hidden");
    page.set_attribute(field, "value", "2");

    page.add_surface("mini-covid", 120, 36);
    page
}

/// Header model on a touch device (no hover intent)
pub fn test_model() -> AppModel {
    AppModel::init(header_page(), DropdownConfig::default(), PointerCapabilities::touch())
}

/// Header model on a mouse-driven desktop (hover intent enabled)
pub fn hover_model() -> AppModel {
    AppModel::init(header_page(), DropdownConfig::default(), PointerCapabilities::desktop())
}

pub fn named(model: &AppModel, name: &str) -> ElementId {
    model
        .page
        .find_by_name(name)
        .unwrap_or_else(|| panic!("fixture has no element named {:?}", name))
}

pub fn dropdown_of(model: &AppModel, id: DropdownId) -> &Dropdown {
    model.dropdowns.get(id).expect("dropdown registered")
}

pub fn is_open(model: &AppModel, id: DropdownId) -> bool {
    dropdown_of(model, id).state.is_open
}

pub fn has_class(model: &AppModel, name: &str, class: &str) -> bool {
    model.page.has_class(named(model, name), class)
}

/// Names of every element currently carrying the dim marker
pub fn dimmed_names(model: &AppModel) -> Vec<String> {
    let mut names: Vec<String> = model
        .page
        .query_class(&model.config.markers.dimmed)
        .into_iter()
        .map(|id| model.page.label(id))
        .collect();
    names.sort();
    names
}

/// Names of every element currently carrying the hidden-peer marker
pub fn hidden_names(model: &AppModel) -> Vec<String> {
    let mut names: Vec<String> = model
        .page
        .query_class(&model.config.markers.hidden_peer)
        .into_iter()
        .map(|id| model.page.label(id))
        .collect();
    names.sort();
    names
}

/// No dim or hidden markers anywhere, and no page-wide marker
pub fn assert_page_clean(model: &AppModel) {
    assert!(dimmed_names(model).is_empty(), "dimmed: {:?}", dimmed_names(model));
    assert!(hidden_names(model).is_empty(), "hidden: {:?}", hidden_names(model));
    assert!(!model.page_dimmed(), "page-wide marker still set");
    for dropdown in model.dropdowns.iter() {
        assert!(!dropdown.state.is_open);
        assert!(dropdown.state.is_clean());
    }
}
