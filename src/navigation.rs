use tracing::debug;

use crate::{
    cycle::CycleDay,
    page::models::{NavLink, Surface},
    schedule::Schedule,
};

/// One link per known day, sorted, today's one marked as active
pub fn build(schedule: &Schedule, today: CycleDay) -> Vec<NavLink> {
    schedule
        .day_ids()
        .into_iter()
        .map(|day| NavLink {
            day: day.to_owned(),
            active: today.is(day),
        })
        .collect()
}

/// Rebuild the whole navigation list
pub fn setup(surface: &mut impl Surface, schedule: &Schedule, today: CycleDay) {
    let links = build(schedule, today);
    debug!(links = links.len(), %today, "navigation built");

    surface.replace_navigation(links);
}

/// Move the active marking to the link of `day`
pub fn update_active(surface: &mut impl Surface, day: &str) {
    for link in surface.navigation_mut() {
        link.active = link.day == day;
    }
}
