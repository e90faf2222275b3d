use dialoguer::Select;
use tracing::{info, warn};

use crate::{
    app::{App, Click, Dispatch},
    page::{models::NavLink, Page},
};

/// Ask which navigation link to follow, `None` when the user backs out
pub fn pick_day(links: &[NavLink]) -> Result<Option<String>, dialoguer::Error> {
    if links.is_empty() {
        return Ok(None);
    }

    let items: Vec<_> = links.iter().map(label).collect();
    let default = links.iter().position(|link| link.active).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Day to display (ESC to keep the current one)")
        .items(&items[..])
        .default(default)
        .interact_opt()?;

    Ok(selection.map(|i| links[i].day.clone()))
}

/// Display the day given by `pick`, a failing prompt keeps the page as it is
pub fn choose<F>(app: &mut App<Page>, pick: F) -> Dispatch
where
    F: FnOnce(&[NavLink]) -> Result<Option<String>, dialoguer::Error>,
{
    let day = match pick(&app.surface().navigation) {
        Ok(Some(day)) => day,
        Ok(None) => return Dispatch::Ignored,
        Err(err) => {
            warn!("can't ask for a day: {err}");
            return Dispatch::Ignored;
        }
    };

    let dispatch = app.dispatch(&Click::link(&day));
    if dispatch == Dispatch::Handled {
        info!(day = %day, "day picked");
    }

    dispatch
}

/// Names showed to the users
fn label(link: &NavLink) -> String {
    if link.active {
        format!("{} *", link.day)
    } else {
        link.day.clone()
    }
}
