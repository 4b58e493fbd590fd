//! Shared helpers for workspace behavior tests.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub use ratepulse_core::{
    CountryId, DatasetBuilder, FallbackRate, RateObservation, RateRecord, RateSource,
    ReferenceData, SourceError, SourceId, SourceRegistry,
};

/// Strategy stub returning a fixed result on every fetch.
pub struct StubSource {
    id: SourceId,
    result: Result<RateObservation, SourceError>,
}

impl StubSource {
    pub fn ok(observation: RateObservation) -> Self {
        Self {
            id: observation.source,
            result: Ok(observation),
        }
    }

    pub fn err(error: SourceError) -> Self {
        Self {
            id: SourceId::Scrape,
            result: Err(error),
        }
    }
}

impl RateSource for StubSource {
    fn id(&self) -> SourceId {
        self.id
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>> {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

pub fn country(name: &str) -> CountryId {
    CountryId::new(name).expect("valid identifier")
}

/// Builds reference data from (country, flag, currency, rate, date, change)
/// rows; an empty date means "no fallback entry for this country".
pub fn reference(rows: &[(&str, &str, &str, f64, &str, f64)]) -> ReferenceData {
    let mut countries = Vec::new();
    let mut flags = HashMap::new();
    let mut currencies = HashMap::new();
    let mut fallback = HashMap::new();

    for (name, flag, currency, rate, date, change) in rows {
        let id = country(name);
        countries.push(id.clone());
        if !flag.is_empty() {
            flags.insert(id.clone(), (*flag).to_owned());
        }
        if !currency.is_empty() {
            currencies.insert(id.clone(), (*currency).to_owned());
        }
        if !date.is_empty() {
            fallback.insert(
                id,
                FallbackRate {
                    rate: *rate,
                    date: (*date).to_owned(),
                    change: *change,
                },
            );
        }
    }

    ReferenceData::new(countries, flags, currencies, fallback)
}
