//! Overlap detection and dimming tests

mod common;

use common::{
    assert_page_clean, dimmed_names, dropdown_of, named, test_model, ABOUT, RESOURCES,
};
use dropdown_control::config::DropdownConfig;
use dropdown_control::messages::{DropdownMsg, Msg};
use dropdown_control::model::{AppModel, Page, PointerCapabilities};
use dropdown_control::update::update;
use dropdown_control::view::overlap::overlapping_bounds;
use dropdown_control::view::{find_overlapping, Rect};

// ========================================================================
// Pure geometry
// ========================================================================

#[test]
fn test_corner_overlap_intersects() {
    let menu = Rect::from_edges(10.0, 10.0, 50.0, 50.0);
    let candidate = Rect::from_edges(40.0, 40.0, 80.0, 80.0);
    assert!(menu.intersects(&candidate));
    assert!(candidate.intersects(&menu));
}

#[test]
fn test_disjoint_rects_do_not_intersect() {
    let menu = Rect::from_edges(10.0, 10.0, 50.0, 50.0);
    let candidate = Rect::from_edges(60.0, 60.0, 80.0, 80.0);
    assert!(!menu.intersects(&candidate));
    assert!(!candidate.intersects(&menu));
}

#[test]
fn test_separated_on_one_axis_only_does_not_intersect() {
    let menu = Rect::from_edges(10.0, 10.0, 50.0, 50.0);
    // Same rows, entirely to the right
    assert!(!menu.intersects(&Rect::from_edges(51.0, 10.0, 90.0, 50.0)));
    // Same columns, entirely below
    assert!(!menu.intersects(&Rect::from_edges(10.0, 51.0, 50.0, 90.0)));
}

#[test]
fn test_containment_intersects() {
    let outer = Rect::from_edges(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::from_edges(40.0, 40.0, 60.0, 60.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_overlapping_bounds_keeps_only_hits() {
    let menu = Rect::from_edges(10.0, 10.0, 50.0, 50.0);
    let candidates = [
        ("near", Rect::from_edges(40.0, 40.0, 80.0, 80.0)),
        ("far", Rect::from_edges(60.0, 60.0, 80.0, 80.0)),
        ("wide", Rect::from_edges(0.0, 20.0, 200.0, 30.0)),
    ];
    assert_eq!(overlapping_bounds(menu, &candidates), vec!["near", "wide"]);
}

#[test]
fn test_find_overlapping_is_pure() {
    let model = test_model();
    let menu = named(&model, "resources-menu");
    let bounds = model.page.bounding_rect(menu).unwrap();
    let candidates = model.page.query_any(&model.config.overlap_candidates);

    let first = find_overlapping(&model.page, bounds, &candidates, menu);
    let second = find_overlapping(&model.page, bounds, &candidates, menu);

    assert_eq!(first, second);
    assert!(dimmed_names(&model).is_empty());
}

#[test]
fn test_find_overlapping_never_matches_own_container() {
    let model = test_model();
    let menu = named(&model, "about-menu");
    let container = named(&model, "about");
    let candidates = vec![container];
    let bounds = model.page.bounding_rect(menu).unwrap();

    // The container's box touches the menu, but it is an ancestor
    assert!(bounds.intersects(&model.page.bounding_rect(container).unwrap()));
    assert!(find_overlapping(&model.page, bounds, &candidates, menu).is_empty());
}

// ========================================================================
// Dimming through the observer
// ========================================================================

#[test]
fn test_open_dims_overlapping_regions() {
    let mut model = test_model();

    update(&mut model, Msg::Dropdown(DropdownMsg::Open(ABOUT)));

    assert_eq!(dimmed_names(&model), vec!["hero"]);
    assert!(model.page_dimmed());
    assert_eq!(dropdown_of(&model, ABOUT).state.dimmed_siblings.len(), 1);
}

#[test]
fn test_non_candidates_are_never_dimmed() {
    let mut model = test_model();
    update(&mut model, Msg::Dropdown(DropdownMsg::Open(RESOURCES)));

    assert_eq!(dimmed_names(&model), vec!["card-1", "hero"]);
    let note = named(&model, "footer-note");
    assert!(!model.page.has_class(note, &model.config.markers.dimmed));
}

#[test]
fn test_switching_dropdowns_moves_dimming() {
    let mut model = test_model();
    update(&mut model, Msg::Dropdown(DropdownMsg::Open(RESOURCES)));

    update(&mut model, Msg::Dropdown(DropdownMsg::Open(ABOUT)));

    assert_eq!(dimmed_names(&model), vec!["hero"]);
    assert!(dropdown_of(&model, RESOURCES).state.dimmed_siblings.is_empty());
    assert!(model.page_dimmed());
}

#[test]
fn test_no_matches_leaves_page_flag_unset() {
    let mut page = Page::new();
    let body = page.body();
    let dd = page.append(body, "div");
    page.add_class(dd, "info-dropdown");
    let btn = page.append(dd, "button");
    page.add_class(btn, "info-btn");
    let menu = page.append(dd, "div");
    page.add_class(menu, "info-menu");
    page.set_rect(menu, Rect::new(0.0, 50.0, 100.0, 100.0));
    page.append(menu, "a");
    let far = page.append(body, "section");
    page.set_rect(far, Rect::new(500.0, 500.0, 100.0, 100.0));

    let mut model = AppModel::init(page, DropdownConfig::default(), PointerCapabilities::touch());
    let id = model.dropdowns.ids()[0];
    update(&mut model, Msg::Dropdown(DropdownMsg::Open(id)));

    assert!(model.dropdowns.get(id).unwrap().state.is_open);
    assert!(model.dropdowns.get(id).unwrap().state.dimmed_siblings.is_empty());
    assert!(!model.page_dimmed());
}

#[test]
fn test_candidate_list_is_configurable() {
    let config = DropdownConfig {
        overlap_candidates: vec!["card".to_string()],
        ..DropdownConfig::default()
    };
    let mut model =
        AppModel::init(common::header_page(), config, PointerCapabilities::touch());

    update(&mut model, Msg::Dropdown(DropdownMsg::Open(RESOURCES)));

    assert_eq!(dimmed_names(&model), vec!["card-1"]);
}

#[test]
fn test_detached_candidate_is_skipped() {
    let mut model = test_model();
    let hero = named(&model, "hero");
    model.page.detach(hero);

    update(&mut model, Msg::Dropdown(DropdownMsg::Open(ABOUT)));

    assert!(dimmed_names(&model).is_empty());
    assert!(!model.page_dimmed());
}

#[test]
fn test_unlayoutable_menu_opens_without_dimming() {
    let mut model = test_model();
    let menu = named(&model, "resources-menu");
    model.page.detach(menu);

    // The registry still knows the menu, it just has no geometry
    update(&mut model, Msg::Dropdown(DropdownMsg::Open(RESOURCES)));
    assert!(dropdown_of(&model, RESOURCES).state.is_open);
    assert!(dimmed_names(&model).is_empty());

    update(&mut model, Msg::Dropdown(DropdownMsg::CloseAll));
    assert_page_clean(&model);
}

#[test]
fn test_close_restores_every_dimmed_element() {
    let mut model = test_model();
    update(&mut model, Msg::Dropdown(DropdownMsg::Open(RESOURCES)));
    assert!(model.page_dimmed());

    update(&mut model, Msg::Dropdown(DropdownMsg::CloseAll));

    assert!(dimmed_names(&model).is_empty());
    assert!(!model.page_dimmed());
}
