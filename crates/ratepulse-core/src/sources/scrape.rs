use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest};
use crate::rate_source::{RateSource, SourceError};
use crate::{CountryId, RateObservation, SourceId};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Central-bank web page scrape strategy.
///
/// Fetches the page with a browser-like `User-Agent` (several banks reject
/// unknown agents) and parses the HTML, but per-bank rate extraction rules
/// are deliberately unimplemented: each bank needs its own selectors, and
/// none have been written. Countries on this strategy resolve from fallback
/// data; the not-implemented error keeps that boundary visible in the logs.
pub struct ScrapeSource {
    http_client: Arc<dyn HttpClient>,
    country: CountryId,
    url: String,
}

impl ScrapeSource {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        country: CountryId,
        url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            country,
            url: url.into(),
        }
    }

    async fn fetch_page(&self) -> Result<RateObservation, SourceError> {
        let request =
            HttpRequest::get(self.url.clone()).with_header("user-agent", BROWSER_USER_AGENT);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| SourceError::unavailable(format!("scrape transport error: {e}")))?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "{} page returned status {}",
                self.country, response.status
            )));
        }

        let _dom = tl::parse(&response.body, tl::ParserOptions::default())
            .map_err(|e| SourceError::malformed(format!("failed to parse html: {e}")))?;

        // TODO: per-bank selectors. Each central bank publishes the rate in a
        // different table/element, so this needs one extraction rule per URL.
        Err(SourceError::not_implemented(format!(
            "no rate extraction rules for {}",
            self.country
        )))
    }
}

impl RateSource for ScrapeSource {
    fn id(&self) -> SourceId {
        SourceId::Scrape
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_source::SourceErrorKind;
    use crate::sources::testing::CannedHttpClient;

    fn country() -> CountryId {
        CountryId::new("영국").expect("valid identifier")
    }

    #[tokio::test]
    async fn sends_a_browser_like_user_agent() {
        let client = Arc::new(CannedHttpClient::ok("<html><body></body></html>"));
        let source = ScrapeSource::new(client.clone(), country(), "https://example.test/rates");

        let error = source.fetch().await.expect_err("extraction is a stub");
        assert_eq!(error.kind(), SourceErrorKind::NotImplemented);

        let request = &client.requests()[0];
        assert_eq!(
            request.headers.get("user-agent").map(String::as_str),
            Some(BROWSER_USER_AGENT)
        );
    }

    #[tokio::test]
    async fn bad_status_is_unavailable() {
        let client = Arc::new(CannedHttpClient::status(403, ""));
        let source = ScrapeSource::new(client, country(), "https://example.test/rates");

        let error = source.fetch().await.expect_err("403 must fail");
        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    }
}
