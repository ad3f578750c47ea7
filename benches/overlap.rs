//! Benchmarks for overlap detection and the open/close path
//!
//! Run with: cargo bench overlap

use dropdown_control::config::DropdownConfig;
use dropdown_control::messages::{DropdownMsg, Msg};
use dropdown_control::model::{AppModel, DropdownId, Page, PointerCapabilities};
use dropdown_control::update::update;
use dropdown_control::view::overlap::{find_overlapping, overlapping_bounds};
use dropdown_control::view::Rect;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// A header with `dropdowns` dropdowns above a grid of `cards` cards
fn make_page(dropdowns: usize, cards: usize) -> Page {
    let mut page = Page::new();
    let body = page.body();
    let header = page.append(body, "header");
    for i in 0..dropdowns {
        let x = i as f32 * 120.0;
        let dd = page.append(header, "div");
        page.add_class(dd, "info-dropdown");
        page.set_rect(dd, Rect::new(x, 0.0, 100.0, 40.0));
        let btn = page.append(dd, "button");
        page.add_class(btn, "info-btn");
        let menu = page.append(dd, "div");
        page.add_class(menu, "info-menu");
        page.set_rect(menu, Rect::new(x, 40.0, 240.0, 300.0));
        page.append(menu, "a");
    }
    let row = page.append(body, "div");
    page.add_class(row, "cards-row");
    page.set_rect(row, Rect::new(0.0, 100.0, 2000.0, 2000.0));
    for i in 0..cards {
        let card = page.append(row, "div");
        page.add_class(card, "card");
        let (col, line) = ((i % 20) as f32, (i / 20) as f32);
        page.set_rect(card, Rect::new(col * 100.0, 100.0 + line * 60.0, 90.0, 50.0));
    }
    page
}

// ============================================================================
// Pure geometry
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn overlapping_bounds_grid(bencher: divan::Bencher, count: usize) {
    let candidates: Vec<(usize, Rect)> = (0..count)
        .map(|i| {
            let (col, line) = ((i % 20) as f32, (i / 20) as f32);
            (i, Rect::new(col * 100.0, line * 60.0, 90.0, 50.0))
        })
        .collect();
    let menu = Rect::new(150.0, 40.0, 240.0, 300.0);

    bencher.bench_local(|| overlapping_bounds(divan::black_box(menu), &candidates));
}

// ============================================================================
// Page queries
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn find_overlapping_on_page(bencher: divan::Bencher, cards: usize) {
    let model = AppModel::init(
        make_page(6, cards),
        DropdownConfig::default(),
        PointerCapabilities::touch(),
    );
    let menu = model.page.query_class("info-menu")[0];
    let bounds = model.page.bounding_rect(menu).unwrap_or_default();
    let candidates = model.page.query_any(&model.config.overlap_candidates);

    bencher.bench_local(|| find_overlapping(&model.page, bounds, &candidates, menu));
}

// ============================================================================
// Full transitions
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn toggle_across_dropdowns(bencher: divan::Bencher, cards: usize) {
    let mut model = AppModel::init(
        make_page(6, cards),
        DropdownConfig::default(),
        PointerCapabilities::touch(),
    );
    let mut next = 0;

    bencher.bench_local(|| {
        next = (next + 1) % 6;
        update(&mut model, Msg::Dropdown(DropdownMsg::Toggle(DropdownId(next))))
    });
}
