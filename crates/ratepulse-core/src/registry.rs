//! Country → strategy registry.
//!
//! Absence of an entry is the valid "no strategy" case: that country always
//! resolves from fallback data.

use std::collections::HashMap;
use std::sync::Arc;

use crate::credentials::{Credentials, BOK_API_KEY, FRED_API_KEY};
use crate::http_client::HttpClient;
use crate::rate_source::RateSource;
use crate::sources::{BojCsvSource, EcbSdmxSource, EcosSource, FredSource, ScrapeSource};
use crate::CountryId;

const BOE_RATE_URL: &str = "https://www.bankofengland.co.uk/boeapps/database/_iadb-fromshowcolumns.asp?csv.x=yes&SeriesCodes=IUDBEDR&CSVF=TN&Datefrom=01/Jan/2024&Dateto=31/Dec/2024";

/// Immutable map of registered acquisition strategies.
#[derive(Default)]
pub struct SourceRegistry {
    sources: HashMap<CountryId, Arc<dyn RateSource>>,
}

impl SourceRegistry {
    /// An empty registry: every country resolves from fallback data.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, country: CountryId, source: Arc<dyn RateSource>) {
        self.sources.insert(country, source);
    }

    pub fn get(&self, country: &CountryId) -> Option<&Arc<dyn RateSource>> {
        self.sources.get(country)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Live fetching is considered enabled whenever any strategy is present.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Builds the registry of configured upstreams over one shared transport.
pub struct SourceRegistryBuilder {
    http_client: Arc<dyn HttpClient>,
    credentials: Credentials,
}

impl SourceRegistryBuilder {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            credentials: Credentials::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Registers every known upstream. Credentialed strategies are registered
    /// even without a key; they fail fast at fetch time and the country falls
    /// back, matching the degraded behavior of a missing key.
    pub fn build(self) -> SourceRegistry {
        let mut registry = SourceRegistry::new();
        let http = self.http_client;

        registry.register(
            country("미국"),
            Arc::new(FredSource::new(
                http.clone(),
                self.credentials.get(FRED_API_KEY),
            )),
        );
        registry.register(
            country("한국"),
            Arc::new(EcosSource::new(
                http.clone(),
                self.credentials.get(BOK_API_KEY),
            )),
        );
        registry.register(country("일본"), Arc::new(BojCsvSource::new(http.clone())));
        registry.register(country("유로존"), Arc::new(EcbSdmxSource::new(http.clone())));
        registry.register(
            country("영국"),
            Arc::new(ScrapeSource::new(http, country("영국"), BOE_RATE_URL)),
        );

        registry
    }
}

fn country(name: &str) -> CountryId {
    CountryId::new(name).expect("registry country names are valid")
}
