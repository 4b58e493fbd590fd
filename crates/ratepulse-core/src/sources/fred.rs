use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::credentials::FRED_API_KEY;
use crate::http_client::{HttpClient, HttpRequest};
use crate::rate_source::{RateSource, SourceError};
use crate::{RateObservation, SourceId};

const ENDPOINT: &str = "https://api.stlouisfed.org/fred/series/observations";
/// Federal Funds Effective Rate.
const SERIES_ID: &str = "DFF";

/// FRED (St. Louis Fed) strategy for 미국.
///
/// Requests the single most recent observation of the `DFF` series and uses
/// its value verbatim. Requires an API key.
pub struct FredSource {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
}

impl FredSource {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
        }
    }

    async fn fetch_latest_observation(&self) -> Result<RateObservation, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::missing_credential(FRED_API_KEY));
        }

        let url = format!(
            "{ENDPOINT}?series_id={}&api_key={}&file_type=json&limit=1&sort_order=desc",
            urlencoding::encode(SERIES_ID),
            urlencoding::encode(&self.api_key),
        );

        let response = self
            .http_client
            .execute(HttpRequest::get(url))
            .await
            .map_err(|e| SourceError::unavailable(format!("fred transport error: {e}")))?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "fred returned status {}",
                response.status
            )));
        }

        let payload: ObservationsResponse = serde_json::from_str(&response.body)
            .map_err(|e| SourceError::malformed(format!("failed to parse fred response: {e}")))?;

        let observation = payload
            .observations
            .first()
            .ok_or_else(|| SourceError::malformed("fred response contained no observations"))?;

        // FRED encodes values as strings; missing observations come back as ".".
        let rate: f64 = observation
            .value
            .parse()
            .map_err(|_| {
                SourceError::malformed(format!(
                    "fred observation value is not numeric: '{}'",
                    observation.value
                ))
            })?;

        RateObservation::new(rate, observation.date.clone(), 0.0, SourceId::Fred)
            .map_err(|e| SourceError::malformed(e.to_string()))
    }
}

impl RateSource for FredSource {
    fn id(&self) -> SourceId {
        SourceId::Fred
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_latest_observation())
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    value: String,
}
