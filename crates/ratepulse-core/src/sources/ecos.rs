use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::credentials::BOK_API_KEY;
use crate::http_client::{HttpClient, HttpRequest};
use crate::rate_source::{RateSource, SourceError};
use crate::{RateObservation, SourceId};

/// Bank of Korea base rate statistic code.
const STAT_CODE: &str = "010Y002";

/// Bank of Korea ECOS strategy for 한국.
///
/// The transport round trip is wired up; extracting the rate from the
/// `StatisticSearch` payload is not. 한국 therefore resolves from fallback
/// data until the parser lands.
pub struct EcosSource {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
}

impl EcosSource {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
        }
    }

    async fn fetch_statistic(&self) -> Result<RateObservation, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::missing_credential(BOK_API_KEY));
        }

        let url = format!(
            "https://ecos.bok.or.kr/api/StatisticSearch/{}/json/kr/1/1/{STAT_CODE}/DD/20240101/20241231",
            urlencoding::encode(&self.api_key),
        );

        let response = self
            .http_client
            .execute(HttpRequest::get(url))
            .await
            .map_err(|e| SourceError::unavailable(format!("ecos transport error: {e}")))?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "ecos returned status {}",
                response.status
            )));
        }

        tracing::debug!(bytes = response.body.len(), "ecos StatisticSearch payload received");

        // TODO: map the StatisticSearch row layout (StatisticSearch.row[].DATA_VALUE /
        // TIME) into an observation once the response schema is pinned down.
        Err(SourceError::not_implemented(
            "ecos StatisticSearch parsing is not implemented",
        ))
    }
}

impl RateSource for EcosSource {
    fn id(&self) -> SourceId {
        SourceId::Ecos
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_statistic())
    }
}
