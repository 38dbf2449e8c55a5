//! [`UserSource`] backed by the randomuser.me API.
//!
//! `GET {base}/api/?results={quantity}&page={page}[&seed={seed}]` answers
//! with `{"results": [...], "info": {...}}`. Only the fields the store shows
//! are decoded; everything else in a record is ignored.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use uuid::Uuid;

use crate::http::Client;
use crate::{AvatarUrls, BusinessConfig, FetchError, PageRequest, User, UserSource};

#[derive(Debug, Clone)]
pub struct RandomUserSource {
    config: BusinessConfig,
}

impl RandomUserSource {
    pub fn new(config: BusinessConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl UserSource for RandomUserSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<User>, FetchError> {
        let url = self.config.api_url();
        let timeout = self.config.request_timeout();
        let mut builder = Client::get(&url)
            .query("results", request.quantity)
            .query("page", request.page_number())
            .header("Accept", "application/json")
            .timeout(timeout);
        if let Some(seed) = self.config.seed() {
            builder = builder.query("seed", seed);
        }

        debug!(
            "GET {url} results={} page={}",
            request.quantity,
            request.page_number()
        );

        let response = builder.send().await.map_err(|err| {
            if err.timed_out {
                warn!("GET {url} gave up after {timeout:?}");
                FetchError::Transport(format!("timed out after {timeout:?}"))
            } else {
                FetchError::Transport(err.message)
            }
        })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let page: RandomUserPage = response.json().map_err(|err| {
            let content_type = response.header("content-type").unwrap_or("unknown");
            FetchError::Decode(format!("{err} (content-type: {content_type})"))
        })?;

        if page.results.len() > request.quantity {
            warn!(
                "Source returned {} users for a page of {}, keeping the first {}",
                page.results.len(),
                request.quantity,
                request.quantity
            );
        }

        Ok(page
            .results
            .into_iter()
            .take(request.quantity)
            .map(User::from)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct RandomUserPage {
    #[serde(default)]
    results: Vec<RandomUserRecord>,
}

#[derive(Debug, Deserialize)]
struct RandomUserRecord {
    #[serde(default)]
    login: Option<Login>,
    name: Name,
    dob: Dob,
    #[serde(default)]
    picture: Picture,
}

#[derive(Debug, Deserialize)]
struct Login {
    uuid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Name {
    title: Option<String>,
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct Dob {
    date: String,
    age: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct Picture {
    #[serde(default)]
    large: String,
    #[serde(default)]
    medium: String,
    #[serde(default)]
    thumbnail: String,
}

impl From<RandomUserRecord> for User {
    fn from(record: RandomUserRecord) -> Self {
        // Records without a login uuid get a fresh one so ids stay unique.
        let id = record
            .login
            .and_then(|login| login.uuid)
            .filter(|uuid| !uuid.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        User::builder()
            .id(id.as_str())
            .maybe_title(record.name.title)
            .first_name(record.name.first)
            .last_name(record.name.last)
            .date_of_birth(record.dob.date)
            .maybe_age(record.dob.age)
            .avatar_urls(AvatarUrls {
                thumbnail: record.picture.thumbnail,
                medium: record.picture.medium,
                large: record.picture.large,
            })
            .build()
    }
}
