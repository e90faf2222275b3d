use tracing::{debug, error, info, warn};

use crate::{
    cycle::Clock,
    loader::ScheduleSource,
    navigation,
    page::models::Surface,
    render,
    schedule::Schedule,
};

/// Lifecycle of the application
#[derive(Debug)]
pub enum State {
    Uninitialized,
    Loading,
    /// The schedule couldn't be loaded, nothing else will happen
    Failed(String),
    Ready {
        schedule: Schedule,
        /// Day currently shown in the content panel
        displayed: String,
    },
}

/// Element a click bubbled up to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    Navigation,
    Content,
}

/// Element that was clicked
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A navigation link and its `data-day`
    Link { day: String },
    /// Anything else inside the mount point
    Element,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Click {
    pub mount: Mount,
    pub target: Target,
}

impl Click {
    /// Click on the navigation link of `day`
    pub fn link(day: &str) -> Self {
        Self {
            mount: Mount::Navigation,
            target: Target::Link {
                day: day.to_owned(),
            },
        }
    }
}

/// Outcome of a dispatched click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A listener took the click, the default action is prevented
    Handled,
    Ignored,
}

/// Listener delegating clicks on the navigation links
#[derive(Debug)]
struct Listener {
    mount: Mount,
}

impl Listener {
    /// Day the click asks for, if it concerns this listener
    fn target<'a>(&self, click: &'a Click) -> Option<&'a str> {
        if click.mount != self.mount {
            return None;
        }

        match &click.target {
            Target::Link { day } => Some(day),
            Target::Element => None,
        }
    }
}

pub struct App<S: Surface> {
    surface: S,
    clock: Clock,
    admin_url: String,
    state: State,
    listener: Option<Listener>,
}

impl<S: Surface> App<S> {
    pub fn new(surface: S, clock: Clock, admin_url: &str) -> Self {
        Self {
            surface,
            clock,
            admin_url: admin_url.to_owned(),
            state: State::Uninitialized,
            listener: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Load the schedule, then render the navigation and today's content
    pub async fn init(&mut self, source: &(impl ScheduleSource + ?Sized)) -> &State {
        if !matches!(self.state, State::Uninitialized) {
            warn!("already initialized");
            return &self.state;
        }

        self.state = State::Loading;
        info!(source = source.location(), "loading schedule");

        let document = match source.fetch().await {
            Ok(document) => document,
            Err(err) => {
                error!("schedule loading error: {err}");
                self.surface
                    .replace_content(render::load_failure(&err, &self.admin_url));
                self.state = State::Failed(err.to_string());
                return &self.state;
            }
        };

        let schedule = Schedule::from_document(document);
        if schedule.is_empty() {
            warn!(source = source.location(), "schedule has no day");
        }
        let today = self.clock.today();

        navigation::setup(&mut self.surface, &schedule, today);
        render::display(&mut self.surface, &schedule, &today.id(), today);

        self.listener = Some(Listener {
            mount: Mount::Navigation,
        });
        info!(days = schedule.len(), %today, "schedule ready");
        self.state = State::Ready {
            schedule,
            displayed: today.id(),
        };

        &self.state
    }

    /// Hand a click to the registered listener
    pub fn dispatch(&mut self, click: &Click) -> Dispatch {
        let Some(day) = self.listener.as_ref().and_then(|listener| listener.target(click)) else {
            return Dispatch::Ignored;
        };
        let State::Ready {
            schedule,
            displayed,
        } = &mut self.state
        else {
            return Dispatch::Ignored;
        };

        let today = self.clock.today();
        debug!(day, "navigating");
        render::display(&mut self.surface, schedule, day, today);
        navigation::update_active(&mut self.surface, day);
        day.clone_into(displayed);

        Dispatch::Handled
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use scraper::{Html, Selector};

    use super::*;
    use crate::{
        loader::{self, LoadError},
        page::Page,
        schedule::models::Document,
    };

    /// Serves a fixed body, or fails like a missing file
    struct Stub(Option<&'static str>);

    #[async_trait]
    impl ScheduleSource for Stub {
        fn location(&self) -> &str {
            "/schedule.json"
        }

        async fn fetch(&self) -> Result<Document, LoadError> {
            match self.0 {
                Some(body) => loader::parse(self.location(), body),
                None => Err(LoadError::Status {
                    location: self.location().to_owned(),
                    status: 404,
                }),
            }
        }
    }

    const WEEK: &str = r#"{
        "days": [
            { "day_id": "Day 3", "handbook": [], "timetable": [] },
            { "day_id": "Day 1", "handbook": [ { "announcement": "Assembly" } ],
              "timetable": [ { "period": "1", "time": "08:00-08:45", "subject": "Maths", "location": "B12" } ] },
            { "day_id": "Day 2", "handbook": [], "timetable": [] }
        ]
    }"#;

    const WITHOUT_MONDAY: &str = r#"{
        "days": [
            { "day_id": "Day 2", "handbook": [], "timetable": [] },
            { "day_id": "Day 3", "handbook": [], "timetable": [] }
        ]
    }"#;

    /// 2024-09-02 was a monday
    fn monday() -> Clock {
        Clock::Fixed(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap())
    }

    fn app() -> App<Page> {
        App::new(Page::default(), monday(), "/admin/")
    }

    fn days(page: &Page) -> Vec<&str> {
        page.navigation.iter().map(|link| link.day.as_str()).collect()
    }

    #[tokio::test]
    async fn test_init_renders_today() {
        let mut app = app();
        let state = app.init(&Stub(Some(WEEK))).await;

        assert!(matches!(state, State::Ready { displayed, .. } if displayed == "Day 1"));
        let page = app.surface();
        assert_eq!(days(page), vec!["Day 1", "Day 2", "Day 3"]);
        assert_eq!(page.active_day(), Some("Day 1"));
        assert!(page.content.contains("Assembly"));
        assert!(page.content.contains("(Today)"));
    }

    #[tokio::test]
    async fn test_missing_today_still_builds_navigation() {
        let mut app = app();
        app.init(&Stub(Some(WITHOUT_MONDAY))).await;

        let page = app.surface();
        assert_eq!(page.content, render::not_found("Day 1"));
        assert_eq!(days(page), vec!["Day 2", "Day 3"]);
        assert_eq!(page.active_day(), None);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_error_without_navigation() {
        let mut app = app();
        let state = app.init(&Stub(None)).await;

        assert!(matches!(state, State::Failed(message) if message.contains("404")));
        let page = app.surface();
        assert!(page.navigation.is_empty());
        let html = Html::parse_fragment(&page.content);
        let heading = html.select(&Selector::parse("h2").unwrap()).next().unwrap();
        assert_eq!(heading.inner_html(), "Failed to load schedule data");

        // Nothing listens to the navigation
        assert_eq!(app.dispatch(&Click::link("Day 1")), Dispatch::Ignored);
        assert!(app.surface().navigation.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_load_failure() {
        let mut app = app();
        let state = app.init(&Stub(Some("<!DOCTYPE html>"))).await;

        assert!(matches!(state, State::Failed(_)));
        assert!(app.surface().navigation.is_empty());
    }

    #[tokio::test]
    async fn test_click_on_link_changes_day() {
        let mut app = app();
        app.init(&Stub(Some(WEEK))).await;

        assert_eq!(app.dispatch(&Click::link("Day 3")), Dispatch::Handled);

        assert!(matches!(app.state(), State::Ready { displayed, .. } if displayed == "Day 3"));
        let page = app.surface();
        assert_eq!(page.active_day(), Some("Day 3"));
        assert!(page.content.contains("Day 3"));
        assert!(!page.content.contains("(Today)"));
    }

    #[tokio::test]
    async fn test_click_on_unknown_day_is_local() {
        let mut app = app();
        app.init(&Stub(Some(WEEK))).await;

        assert_eq!(app.dispatch(&Click::link("Day 9")), Dispatch::Handled);
        assert_eq!(app.surface().content, render::not_found("Day 9"));
        assert_eq!(app.surface().navigation.len(), 3);

        // Still usable afterwards
        app.dispatch(&Click::link("Day 2"));
        assert_eq!(app.surface().active_day(), Some("Day 2"));
    }

    #[tokio::test]
    async fn test_clicks_outside_links_are_ignored() {
        let mut app = app();
        app.init(&Stub(Some(WEEK))).await;
        let before = app.surface().content.clone();

        let on_nav = Click {
            mount: Mount::Navigation,
            target: Target::Element,
        };
        let on_content = Click {
            mount: Mount::Content,
            target: Target::Link {
                day: "Day 2".to_owned(),
            },
        };

        assert_eq!(app.dispatch(&on_nav), Dispatch::Ignored);
        assert_eq!(app.dispatch(&on_content), Dispatch::Ignored);
        assert_eq!(app.surface().content, before);
        assert_eq!(app.surface().active_day(), Some("Day 1"));
    }

    #[tokio::test]
    async fn test_init_runs_once() {
        let mut app = app();
        app.init(&Stub(Some(WEEK))).await;
        let state = app.init(&Stub(None)).await;

        assert!(matches!(state, State::Ready { .. }));
        assert_eq!(app.into_surface().navigation.len(), 3);
    }
}
