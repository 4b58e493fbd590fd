use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest};
use crate::rate_source::{RateSource, SourceError};
use crate::{RateObservation, SourceId};

const CSV_URL: &str = "https://www.stat-search.boj.or.kr/ssi/mtshtml/csv/m_ir.csv";

/// Bank of Japan CSV strategy for 일본.
///
/// The published series is a plain CSV where the last row is the most recent
/// month: `date,rate,...`. The date is carried verbatim; BOJ does not use
/// ISO 8601 here.
pub struct BojCsvSource {
    http_client: Arc<dyn HttpClient>,
}

impl BojCsvSource {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    async fn fetch_last_row(&self) -> Result<RateObservation, SourceError> {
        let response = self
            .http_client
            .execute(HttpRequest::get(CSV_URL))
            .await
            .map_err(|e| SourceError::unavailable(format!("boj transport error: {e}")))?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "boj returned status {}",
                response.status
            )));
        }

        let lines: Vec<&str> = response.body.trim().lines().collect();
        if lines.len() < 2 {
            return Err(SourceError::malformed(
                "boj csv body is missing data rows",
            ));
        }

        let last = lines[lines.len() - 1];
        let mut fields = last.split(',');
        let date = fields.next().unwrap_or_default().trim();
        let raw_rate = fields.next().unwrap_or_default().trim();

        if raw_rate.is_empty() {
            return Err(SourceError::malformed("boj csv rate field is empty"));
        }

        let rate: f64 = raw_rate.parse().map_err(|_| {
            SourceError::malformed(format!("boj csv rate is not numeric: '{raw_rate}'"))
        })?;

        RateObservation::new(rate, date, 0.0, SourceId::BojCsv)
            .map_err(|e| SourceError::malformed(e.to_string()))
    }
}

impl RateSource for BojCsvSource {
    fn id(&self) -> SourceId {
        SourceId::BojCsv
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_last_row())
    }
}
