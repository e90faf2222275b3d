use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::schedule::models::Document;

/// Where the data file lives on the site
pub const SCHEDULE_PATH: &str = "/schedule.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not load the schedule data file ({location}): HTTP {status}")]
    Status { location: String, status: u16 },

    #[error("could not reach the schedule data file ({location}): {source}")]
    Network {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read the schedule data file ({location}): {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("the schedule data file ({location}) is not valid: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything able to hand out the schedule document
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Human readable location, used in messages
    fn location(&self) -> &str;

    async fn fetch(&self) -> Result<Document, LoadError>;
}

/// Parse the body of the data file
pub fn parse(location: &str, body: &str) -> Result<Document, LoadError> {
    serde_json::from_str(body).map_err(|source| LoadError::Parse {
        location: location.to_owned(),
        source,
    })
}

/// Schedule served by a website, under [`SCHEDULE_PATH`]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(site_root: &str, user_agent: &str) -> Result<Self, reqwest::Error> {
        // Use custom User-Agent
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        let url = format!("{}{SCHEDULE_PATH}", site_root.trim_end_matches('/'));

        Ok(Self { client, url })
    }
}

#[async_trait]
impl ScheduleSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Document, LoadError> {
        let network = |source: reqwest::Error| LoadError::Network {
            location: self.url.clone(),
            source,
        };

        debug!(url = %self.url, "fetching schedule");
        let response = self.client.get(&self.url).send().await.map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network)?;
        let document = parse(&self.url, &body)?;
        info!(url = %self.url, days = document.days.len(), "schedule fetched");

        Ok(document)
    }
}

/// Schedule stored on disk
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();

        Self { path, location }
    }
}

#[async_trait]
impl ScheduleSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Document, LoadError> {
        debug!(path = %self.location, "reading schedule");
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                location: self.location.clone(),
                source,
            })?;

        let document = parse(&self.location, &body)?;
        info!(path = %self.location, days = document.days.len(), "schedule read");

        Ok(document)
    }
}

/// Pick the source matching the user's input: a site root URL or a file path
pub fn source_for(input: &str, user_agent: &str) -> Result<Box<dyn ScheduleSource>, LoadError> {
    if input.starts_with("http://") || input.starts_with("https://") {
        let source = HttpSource::new(input, user_agent).map_err(|source| LoadError::Network {
            location: input.to_owned(),
            source,
        })?;
        Ok(Box::new(source))
    } else {
        Ok(Box::new(FileSource::new(input)))
    }
}
