//! Dataset assembly over the fixed country list.

use std::time::Duration;

use crate::reference::ReferenceData;
use crate::registry::SourceRegistry;
use crate::resolver::RateResolver;
use crate::RateRecord;

/// Pause between countries while live fetching, to stay under unspecified
/// upstream rate limits. Courtesy, not correctness.
pub const COURTESY_DELAY: Duration = Duration::from_millis(500);

/// A finished dataset plus the live-hit count for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub records: Vec<RateRecord>,
    pub live: usize,
}

/// Builds the ordered rate dataset: one record per country, list order
/// preserved, flag/currency attached from the reference tables.
pub struct DatasetBuilder<'a> {
    registry: &'a SourceRegistry,
    reference: &'a ReferenceData,
    courtesy_delay: Duration,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(registry: &'a SourceRegistry, reference: &'a ReferenceData) -> Self {
        Self {
            registry,
            reference,
            courtesy_delay: COURTESY_DELAY,
        }
    }

    /// Overrides the inter-country pause; tests use `Duration::ZERO`.
    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    pub async fn build(&self) -> BuildReport {
        let resolver = RateResolver::new(self.registry, self.reference);
        let live_mode = !self.registry.is_empty();
        let countries = self.reference.countries();
        let mut records = Vec::with_capacity(countries.len());

        for country in countries {
            let resolved = resolver.resolve(country).await;
            records.push(RateRecord {
                country: country.clone(),
                flag: self.reference.flag(country).to_owned(),
                rate: resolved.rate,
                date: resolved.date,
                change: resolved.change,
                currency: self.reference.currency(country).to_owned(),
                source: resolved.source.map(|s| s.label().to_owned()),
            });

            if live_mode && !self.courtesy_delay.is_zero() {
                tokio::time::sleep(self.courtesy_delay).await;
            }
        }

        let live = records.iter().filter(|r| r.source.is_some()).count();
        BuildReport { records, live }
    }
}
