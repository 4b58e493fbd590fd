//! Core contracts for ratepulse.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Static reference data and credential resolution
//! - The `RateSource` strategy trait, its upstream adapters, and the registry
//! - The resolve/build pipeline and the file output writer

pub mod credentials;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod output;
pub mod rate_source;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod source;
pub mod sources;

pub use credentials::{Credentials, BOK_API_KEY, FRED_API_KEY};
pub use dataset::{BuildReport, DatasetBuilder, COURTESY_DELAY};
pub use domain::{CountryId, FallbackRate, RateObservation, RateRecord};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use output::{OutputError, OutputPaths, OutputWriter, JS_FILE, JSON_FILE};
pub use rate_source::{RateSource, SourceError, SourceErrorKind};
pub use reference::ReferenceData;
pub use registry::{SourceRegistry, SourceRegistryBuilder};
pub use resolver::{RateResolver, ResolvedRate};
pub use source::SourceId;
pub use sources::{BojCsvSource, EcbSdmxSource, EcosSource, FredSource, ScrapeSource};
