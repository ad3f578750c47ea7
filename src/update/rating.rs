//! Star rating handlers

use crate::commands::Cmd;
use crate::messages::RatingMsg;
use crate::model::{AppModel, ElementId};

/// Handle rating messages
pub fn update_rating(model: &mut AppModel, msg: RatingMsg) -> Option<Cmd> {
    match msg {
        RatingMsg::Select { group, value } => Cmd::redraw_if(select(model, group, value)),
    }
}

/// Apply `value` to rating group `group`
pub fn select(model: &mut AppModel, group: usize, value: u32) -> bool {
    let AppModel {
        page,
        ratings,
        config,
        ..
    } = model;
    let Some(rating) = ratings.get_mut(group) else {
        tracing::debug!(group, "unknown rating group");
        return false;
    };
    rating.apply(page, &config.rating, value);
    tracing::debug!(group, value, "rating selected");
    true
}

/// Locate the star on the bubbling path of `target`, as `(group, index)`
pub fn star_at(model: &AppModel, target: ElementId) -> Option<(usize, usize)> {
    model.page.ancestors_inclusive(target).find_map(|element| {
        model
            .ratings
            .iter()
            .enumerate()
            .find_map(|(group, rating)| rating.star_index(element).map(|index| (group, index)))
    })
}

/// Select the rating of the star under `target`, if any (star k sets k+1)
pub fn select_star_at(model: &mut AppModel, target: ElementId) -> bool {
    match star_at(model, target) {
        Some((group, index)) => select(model, group, index as u32 + 1),
        None => false,
    }
}
