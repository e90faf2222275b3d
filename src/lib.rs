//! Renders a recurring seven-day class schedule.
//!
//! The schedule data file is loaded once, indexed by day identifier, then the
//! navigation links and the content of the current cycle day are rendered into
//! a [`page::models::Surface`].

pub mod app;
pub mod cycle;
pub mod loader;
pub mod navigation;
pub mod page;
pub mod prompt;
pub mod render;
pub mod schedule;
