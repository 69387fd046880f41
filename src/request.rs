use std::future::Future;

use reqwest::Client;

use crate::{info_time, Result};

/// Anything that can hand back the HTML behind a URL.
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

impl PageSource for Client {
    /// Requests a page and returns a `Result<String>` containing the HTML.
    async fn fetch(&self, url: &str) -> Result<String> {
        info_time!("Requesting page: {url}");
        let res = self.get(url).send().await?.error_for_status()?;
        let html = res.text().await?;
        Ok(html)
    }
}
