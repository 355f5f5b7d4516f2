//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Request
//! handlers never read process-wide environment variables.

use crate::constants::{
    DEFAULT_COLLECTION_NAME, DEFAULT_DATABASE_NAME, DEFAULT_JOKE_API_URL, DEFAULT_JOKE_COUNT,
    DEFAULT_PORT, MAX_JOKE_COUNT,
};
use crate::{CoreError, CoreResult};

pub const MONGO_URI_VAR: &str = "MONGO_URI";
pub const PORT_VAR: &str = "PORT";
pub const DATABASE_NAME_VAR: &str = "SHOWCASE_DB_NAME";
pub const COLLECTION_NAME_VAR: &str = "SHOWCASE_COLLECTION";
pub const JOKE_API_URL_VAR: &str = "JOKE_API_URL";
pub const JOKE_COUNT_VAR: &str = "JOKE_COUNT";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    mongo_uri: String,
    database_name: String,
    collection_name: String,
    joke_api_url: String,
    joke_count: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the connection string or any name is blank, the
    /// joke API URL does not parse, or `joke_count` is outside `1..=MAX_JOKE_COUNT`.
    pub fn new(
        mongo_uri: String,
        database_name: String,
        collection_name: String,
        joke_api_url: String,
        joke_count: usize,
    ) -> CoreResult<Self> {
        if mongo_uri.trim().is_empty() {
            return Err(CoreError::InvalidConfig(format!(
                "{MONGO_URI_VAR} cannot be empty"
            )));
        }
        if database_name.trim().is_empty() || collection_name.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "database and collection names cannot be empty".into(),
            ));
        }
        reqwest::Url::parse(&joke_api_url).map_err(|e| {
            CoreError::InvalidConfig(format!("{JOKE_API_URL_VAR} is not a valid URL: {e}"))
        })?;
        if !(1..=MAX_JOKE_COUNT).contains(&joke_count) {
            return Err(CoreError::InvalidConfig(format!(
                "{JOKE_COUNT_VAR} must be between 1 and {MAX_JOKE_COUNT}"
            )));
        }

        Ok(Self {
            mongo_uri,
            database_name,
            collection_name,
            joke_api_url: joke_api_url.trim_end_matches('/').to_string(),
            joke_count,
        })
    }

    /// Resolve configuration from a variable lookup, applying defaults for optional values.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`; tests pass a map.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if `MONGO_URI` is absent or any value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mongo_uri = value(MONGO_URI_VAR).ok_or_else(|| {
            CoreError::InvalidConfig(format!("{MONGO_URI_VAR} is not set"))
        })?;

        Self::new(
            mongo_uri,
            value(DATABASE_NAME_VAR).unwrap_or_else(|| DEFAULT_DATABASE_NAME.into()),
            value(COLLECTION_NAME_VAR).unwrap_or_else(|| DEFAULT_COLLECTION_NAME.into()),
            value(JOKE_API_URL_VAR).unwrap_or_else(|| DEFAULT_JOKE_API_URL.into()),
            joke_count_from_env_value(value(JOKE_COUNT_VAR))?,
        )
    }

    pub fn mongo_uri(&self) -> &str {
        &self.mongo_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn joke_api_url(&self) -> &str {
        &self.joke_api_url
    }

    pub fn joke_count(&self) -> usize {
        self.joke_count
    }
}

/// Parse the joke batch size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default batch size.
pub fn joke_count_from_env_value(value: Option<String>) -> CoreResult<usize> {
    parse_or_default(JOKE_COUNT_VAR, value, DEFAULT_JOKE_COUNT)
}

/// Parse the listen port from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default port.
pub fn port_from_env_value(value: Option<String>) -> CoreResult<u16> {
    parse_or_default(PORT_VAR, value, DEFAULT_PORT)
}

fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> CoreResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|e| CoreError::InvalidConfig(format!("invalid {key} value {v:?}: {e}"))),
    }
}
