/// Identifier of the element holding the navigation links
pub const NAVIGATION_ID: &str = "day-navigation";

/// Identifier of the element holding the day's content
pub const CONTENT_ID: &str = "daily-content-display";

/// One link of the navigation list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Day's identifier the link points to
    pub day: String,
    /// Marked as the displayed day
    pub active: bool,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.day)
    }
}

/// The two mount points the application renders into
pub trait Surface {
    /// Replace every navigation link
    fn replace_navigation(&mut self, links: Vec<NavLink>);

    fn navigation_mut(&mut self) -> &mut [NavLink];

    /// Replace the whole content panel
    fn replace_content(&mut self, html: String);
}
