//! Remote descriptor expansion and the fetch collaborator.
//!
//! The loader only needs "fetch bytes from a URL, or signal failure"; the
//! [`Fetch`] trait is that boundary. Production uses a blocking `reqwest`
//! client with a fixed request timeout; tests substitute an in-memory map.

use std::time::Duration;

use anyhow::{Context, Result};

use super::{FetchUnit, LOG_FILE_NAME, LoadError};

/// Request timeout for the default HTTP fetcher. Cancellation beyond this
/// deadline is the collaborator's whole timeout policy.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("logmon/", env!("CARGO_PKG_VERSION"));

/// Fetch collaborator: yields a URL's text body or a reported failure.
pub trait Fetch: Send + Sync {
    fn fetch_text(&self, url: &str) -> Result<String, LoadError>;
}

/// Blocking HTTP fetcher over `reqwest`.
pub struct HttpFetch {
    client: reqwest::blocking::Client,
}

impl HttpFetch {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetch {
    fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| LoadError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| LoadError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

/// Expand a remote descriptor into one URL unit per configured category.
pub(crate) fn expand(base_url: &str, categories: &[String]) -> Vec<FetchUnit> {
    categories
        .iter()
        .map(|category| FetchUnit::Url {
            url: category_url(base_url, category),
            category: category.clone(),
        })
        .collect()
}

fn category_url(base_url: &str, category: &str) -> String {
    format!(
        "{}/{category}/{LOG_FILE_NAME}",
        base_url.trim_end_matches('/')
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_fixed_layout() {
        assert_eq!(
            category_url("https://logs.example.com/demo", "Autenticacao"),
            "https://logs.example.com/demo/Autenticacao/logs.txt"
        );
        // Trailing slash on the base does not double up.
        assert_eq!(
            category_url("https://logs.example.com/demo/", "Memoria"),
            "https://logs.example.com/demo/Memoria/logs.txt"
        );
    }

    #[test]
    fn expand_keeps_category_order() {
        let categories = vec!["Performance".to_string(), "Memoria".to_string()];
        let units = expand("https://x.test", &categories);
        assert_eq!(units.len(), 2);
        match &units[0] {
            FetchUnit::Url { url, category } => {
                assert_eq!(category, "Performance");
                assert_eq!(url, "https://x.test/Performance/logs.txt");
            }
            other => panic!("unexpected unit {other:?}"),
        }
    }

    #[test]
    fn fetch_map_reports_status_failures() {
        let fetcher = tests_support::FetchMap::new()
            .body("https://x.test/a/logs.txt", "hello")
            .status("https://x.test/b/logs.txt", 500);

        assert_eq!(
            fetcher.fetch_text("https://x.test/a/logs.txt").unwrap(),
            "hello"
        );
        let err = fetcher
            .fetch_text("https://x.test/b/logs.txt")
            .unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
    }
}
