use std::fmt::Write;

use crate::render::escape;

pub mod models;

use models::{NavLink, Surface, CONTENT_ID, NAVIGATION_ID};

/// In-memory page, written out as a full HTML document
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub navigation: Vec<NavLink>,
    pub content: String,
}

impl Surface for Page {
    fn replace_navigation(&mut self, links: Vec<NavLink>) {
        self.navigation = links;
    }

    fn navigation_mut(&mut self) -> &mut [NavLink] {
        &mut self.navigation
    }

    fn replace_content(&mut self, html: String) {
        self.content = html;
    }
}

impl Page {
    /// Day of the link marked as active, if any
    pub fn active_day(&self) -> Option<&str> {
        self.navigation
            .iter()
            .find(|link| link.active)
            .map(|link| link.day.as_str())
    }

    /// Markup of the navigation links
    pub fn navigation_html(&self) -> String {
        self.navigation.iter().fold(String::new(), |mut html, link| {
            let day = escape(&link.day);
            let class = if link.active { r#" class="active""# } else { "" };
            let _ = write!(
                html,
                r#"<a href="{}" data-day="{day}"{class}>{day}</a>"#,
                escape(&link.href())
            );
            html
        })
    }

    /// Full HTML document holding both mount points
    pub fn to_html(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    <header>
        <h1>{title}</h1>
        <nav id="{NAVIGATION_ID}">{}</nav>
    </header>
    <main id="{CONTENT_ID}">{}</main>
</body>
</html>
"#,
            self.navigation_html(),
            self.content,
            title = escape(title),
        )
    }
}
