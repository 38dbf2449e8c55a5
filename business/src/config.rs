use std::env::vars;
use std::time::Duration;

use anyhow::bail;
use log::info;
use serde::Deserialize;

use crate::PAGE_SIZE;

/// Environment variables read by [`BusinessConfig::init`] start with this.
pub const ENV_PREFIX: &str = "USERLIST_";

const DEFAULT_API_BASE_URL: &str = "https://randomuser.me";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    api_base_url: String,
    page_size: usize,
    /// Fixes the remote result set so consecutive pages do not overlap.
    seed: Option<String>,
    request_timeout: Duration,
}

/// Environment shape, before defaults and validation.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    page_size: Option<usize>,
    seed: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Loads `USERLIST_*` environment variables on top of the defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from {ENV_PREFIX}* environment variables");
        Self::from_vars(vars())
    }

    /// Same as [`BusinessConfig::init`] over an explicit set of variables.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            api_base_url,
            page_size,
            seed,
            request_timeout_secs,
        } = raw;

        let page_size = page_size.unwrap_or(PAGE_SIZE);
        if page_size == 0 {
            bail!("{ENV_PREFIX}PAGE_SIZE must be greater than zero");
        }

        let api_base_url = match api_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided {ENV_PREFIX}API_BASE_URL: {url}");
                url.trim_end_matches('/').to_owned()
            }
            _ => DEFAULT_API_BASE_URL.to_owned(),
        };

        Ok(Self {
            api_base_url,
            page_size,
            seed: seed.filter(|seed| !seed.is_empty()),
            request_timeout: Duration::from_secs(
                request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Endpoint serving user pages.
    pub fn api_url(&self) -> String {
        format!("{}/api/", self.api_base_url.trim_end_matches('/'))
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_size: PAGE_SIZE,
            seed: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
