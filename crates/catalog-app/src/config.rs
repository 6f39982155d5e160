use crate::api::Credentials;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://minhlong.mlhr.org/api";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL, without a trailing slash.
    pub api_url: String,
    /// Bearer credential; anonymous when unset.
    pub credentials: Credentials,
    /// Page size of the product list request.
    pub page_size: u32,
    /// Command channel capacity of each screen.
    pub channel_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials: Credentials::anonymous(),
            page_size: DEFAULT_PAGE_SIZE,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                          |
    /// |----------------------------|----------------------------------|
    /// | `CATALOG_API_URL`          | `https://minhlong.mlhr.org/api`  |
    /// | `CATALOG_AUTH_TOKEN`       | unset (anonymous)                |
    /// | `CATALOG_PAGE_SIZE`        | `20`                             |
    /// | `CATALOG_CHANNEL_CAPACITY` | `32`                             |
    ///
    /// Numbers that fail to parse, or are zero, fall back to the default with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("CATALOG_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let credentials = Credentials::from(lookup("CATALOG_AUTH_TOKEN"));

        let page_size = parse_or("CATALOG_PAGE_SIZE", lookup("CATALOG_PAGE_SIZE"), DEFAULT_PAGE_SIZE);

        let channel_capacity = parse_or(
            "CATALOG_CHANNEL_CAPACITY",
            lookup("CATALOG_CHANNEL_CAPACITY"),
            DEFAULT_CHANNEL_CAPACITY,
        );

        Self {
            api_url,
            credentials,
            page_size,
            channel_capacity,
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + PartialEq + Default + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => value,
        _ => {
            warn!(key, value = %raw, default = %default, "Invalid setting, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CatalogConfig::from_lookup(lookup(&[]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.credentials.is_present());
        assert_eq!(config.page_size, 20);
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn reads_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_API_URL", "http://localhost:8080/api/"),
            ("CATALOG_AUTH_TOKEN", "tok"),
            ("CATALOG_PAGE_SIZE", "50"),
            ("CATALOG_CHANNEL_CAPACITY", "4"),
        ]));
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.credentials, Credentials::bearer("tok"));
        assert_eq!(config.page_size, 50);
        assert_eq!(config.channel_capacity, 4);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_PAGE_SIZE", "lots"),
            ("CATALOG_CHANNEL_CAPACITY", "0"),
        ]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    }
}
