use std::fmt::Write;

use tracing::debug;

use crate::{
    cycle::CycleDay,
    loader::LoadError,
    page::models::Surface,
    schedule::{
        models::{Announcement, Day, Period},
        Schedule,
    },
};

const NO_ANNOUNCEMENT: &str = "No important announcements or handbook notes today.";
const NO_COURSE: &str = "No classes scheduled today.";
const TODAY: &str = "(Today)";

/// Escape text before inserting it in the markup
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Message shown when a day isn't in the schedule
pub fn not_found(day: &str) -> String {
    format!("<h2>Error: no information found for {}!</h2>", escape(day))
}

/// Message shown when the schedule couldn't be loaded
pub fn load_failure(err: &LoadError, admin_url: &str) -> String {
    format!(
        r#"<h2>Failed to load schedule data</h2><p>Error message: {}</p><p>Please ask an administrator to check that the schedule data was submitted through the <a href="{}">CMS interface</a>.</p>"#,
        escape(&err.to_string()),
        escape(admin_url)
    )
}

fn handbook(announcements: &[Announcement]) -> String {
    if announcements.is_empty() {
        return format!("<p>{NO_ANNOUNCEMENT}</p>");
    }

    let items = announcements.iter().fold(String::new(), |mut html, item| {
        let _ = write!(html, "<li>{}</li>", escape(&item.announcement));
        html
    });

    format!("<ul>{items}</ul>")
}

fn timetable(periods: &[Period]) -> String {
    let body = if periods.is_empty() {
        format!(r#"<tr><td colspan="4">{NO_COURSE}</td></tr>"#)
    } else {
        periods.iter().fold(String::new(), |mut html, row| {
            let _ = write!(
                html,
                "
                <tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                </tr>",
                escape(&row.period),
                escape(&row.time),
                escape(&row.subject),
                escape(&row.location)
            );
            html
        })
    };

    format!(
        r#"
        <div class="timetable">
            <h3>⏰ Class timetable</h3>
            <table>
                <thead>
                    <tr>
                        <th>Period</th>
                        <th>Time</th>
                        <th>Subject</th>
                        <th>Location / Notes</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    "#
    )
}

/// Markup of a day record
pub fn day(record: &Day, today: CycleDay) -> String {
    let marker = if today.is(&record.day_id) { TODAY } else { "" };

    format!(
        r#"<h2>🗓️ {} Information <span class="today-marker">{marker}</span></h2>
        <div class="handbook">
            <h3>📢 Daily handbook / announcements</h3>
            {}
        </div>
    {}"#,
        escape(&record.day_id),
        handbook(&record.handbook),
        timetable(&record.timetable)
    )
}

/// Markup for `day`, or the not found message
pub fn day_content(schedule: &Schedule, day_id: &str, today: CycleDay) -> String {
    match schedule.get(day_id) {
        Some(record) => day(record, today),
        None => {
            debug!(day = day_id, "day not in the schedule");
            not_found(day_id)
        }
    }
}

/// Replace the content panel with `day`
pub fn display(surface: &mut impl Surface, schedule: &Schedule, day_id: &str, today: CycleDay) {
    surface.replace_content(day_content(schedule, day_id, today));
}
