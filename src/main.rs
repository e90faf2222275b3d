use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daycycle::{
    app::{App, Click, State},
    cycle::Clock,
    loader,
    page::Page,
    prompt,
};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Site serving /schedule.json (i.e.: https://school.example) or path to the JSON file
    #[clap(value_parser, default_value = "http://localhost:8080")]
    source: String,

    /// Day to display instead of today, i.e.: "Day 3"
    #[clap(short, long, value_parser, value_name = "DAY")]
    day: Option<String>,

    /// Date used to find today's cycle day (YYYY-MM-DD), default to the local date
    #[clap(short = 't', long, value_parser, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Write the page to a file instead of the standard output
    #[clap(short, long, value_name = "FILE NAME")]
    output: Option<PathBuf>,

    /// Choose the day to display from the navigation links
    #[clap(short, long)]
    interactive: bool,

    /// Link to the data management interface, shown when loading fails
    #[clap(long, value_name = "URL", default_value = "/admin/")]
    admin_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daycycle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let user_agent = format!("daycycle/{}", env!("CARGO_PKG_VERSION"));
    let clock = args.date.map_or(Clock::Local, Clock::Fixed);

    let source = loader::source_for(&args.source, &user_agent)?;
    let mut app = App::new(Page::default(), clock, &args.admin_url);
    let loaded = matches!(app.init(&*source).await, State::Ready { .. });

    if loaded {
        if let Some(day) = &args.day {
            app.dispatch(&Click::link(day));
        }

        if args.interactive {
            prompt::choose(&mut app, prompt::pick_day);
        }
    }

    let html = app.into_surface().to_html("Class schedule");
    match args.output {
        Some(path) => {
            tokio::fs::write(&path, html)
                .await
                .with_context(|| format!("can't write {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => print!("{html}"),
    }

    if !loaded {
        bail!("the schedule couldn't be loaded from {}", source.location());
    }

    Ok(())
}
