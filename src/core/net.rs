// src/core/net.rs
// Blocking GET with a fixed timeout and a fixed pause before each request.
// One attempt per URL; any transport or status error is reported as `None`.

use std::{thread, time::Duration};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

use crate::config::consts::{BASE_URL, USER_AGENT};
use crate::error::Result;

/// Source of raw page text. `None` means the fetch produced no content.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Option<String>;
}

/// Closures make convenient offline fetchers (tests, captured fixtures).
impl<F> Fetch for F
where
    F: Fn(&str) -> Option<String>,
{
    fn fetch(&self, url: &str) -> Option<String> {
        self(url)
    }
}

pub struct HttpFetcher {
    client: Client,
    pause: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, pause: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, pause })
    }

    fn get(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .send()?
            .error_for_status()?;
        Ok(resp.text()?)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        thread::sleep(self.pause);
        logd!("GET {url}");
        match self.get(url) {
            Ok(body) => {
                logd!("received {} bytes from {url}", body.len());
                Some(body)
            }
            Err(e) => {
                logw!("fetch failed for {url}: {e}");
                None
            }
        }
    }
}

/// Absolute URL for a site-relative path.
pub fn page_url(path: &str) -> String {
    join!(BASE_URL, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_joins_without_double_slash() {
        assert_eq!(page_url("/resultx.php?id_prop=1"), "https://ksis.eu/resultx.php?id_prop=1");
        assert_eq!(page_url("menu.php"), "https://ksis.eu/menu.php");
    }

    #[test]
    fn closures_are_fetchers() {
        let f = |url: &str| (url == "a").then(|| s!("body"));
        assert_eq!(f.fetch("a").as_deref(), Some("body"));
        assert_eq!(f.fetch("b"), None);
    }
}
