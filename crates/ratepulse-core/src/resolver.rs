//! Per-country resolution: live → fallback → placeholder.
//!
//! A strict priority cascade. There is no retry and no field-level merging
//! between live and fallback data; whichever tier answers first wins whole.

use crate::reference::ReferenceData;
use crate::registry::SourceRegistry;
use crate::{CountryId, SourceId};

/// Resolution outcome for one country. `source` is `None` for fallback and
/// placeholder records.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRate {
    pub rate: f64,
    pub date: String,
    pub change: f64,
    pub source: Option<SourceId>,
}

pub struct RateResolver<'a> {
    registry: &'a SourceRegistry,
    reference: &'a ReferenceData,
}

impl<'a> RateResolver<'a> {
    pub fn new(registry: &'a SourceRegistry, reference: &'a ReferenceData) -> Self {
        Self {
            registry,
            reference,
        }
    }

    /// Resolves one country. Never fails: a strategy error is logged once
    /// here and demoted to the fallback tier; a country absent from the
    /// fallback table gets the zero-rate placeholder dated today.
    pub async fn resolve(&self, country: &CountryId) -> ResolvedRate {
        if let Some(source) = self.registry.get(country) {
            match source.fetch().await {
                Ok(observation) => {
                    tracing::info!(
                        country = %country,
                        source = observation.source.as_str(),
                        rate = observation.rate,
                        "live rate collected"
                    );
                    return ResolvedRate {
                        rate: observation.rate,
                        date: observation.date,
                        change: observation.change,
                        source: Some(observation.source),
                    };
                }
                Err(error) => {
                    tracing::warn!(
                        country = %country,
                        code = error.code(),
                        "live fetch failed, using fallback data: {error}"
                    );
                }
            }
        }

        if let Some(fallback) = self.reference.fallback(country) {
            return ResolvedRate {
                rate: fallback.rate,
                date: fallback.date.clone(),
                change: fallback.change,
                source: None,
            };
        }

        ResolvedRate {
            rate: 0.0,
            date: today_utc(),
            change: 0.0,
            source: None,
        }
    }
}

/// Today's UTC calendar date as `YYYY-MM-DD`, for the placeholder tier.
pub(crate) fn today_utc() -> String {
    let date = time::OffsetDateTime::now_utc().date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;

    use crate::rate_source::{RateSource, SourceError};
    use crate::{FallbackRate, RateObservation};

    struct StubSource {
        result: Result<RateObservation, SourceError>,
    }

    impl RateSource for StubSource {
        fn id(&self) -> SourceId {
            SourceId::Fred
        }

        fn fetch<'a>(
            &'a self,
        ) -> Pin<Box<dyn Future<Output = Result<RateObservation, SourceError>> + Send + 'a>>
        {
            let result = self.result.clone();
            Box::pin(async move { result })
        }
    }

    fn country(name: &str) -> CountryId {
        CountryId::new(name).expect("valid identifier")
    }

    fn reference_with_fallback(name: &str, fallback: FallbackRate) -> ReferenceData {
        ReferenceData::new(
            vec![country(name)],
            HashMap::new(),
            HashMap::new(),
            HashMap::from([(country(name), fallback)]),
        )
    }

    #[tokio::test]
    async fn live_result_is_used_verbatim_and_tagged() {
        let observation = RateObservation::new(1.5, "2024-01-01", 0.0, SourceId::Fred)
            .expect("valid observation");
        let mut registry = SourceRegistry::new();
        registry.register(
            country("미국"),
            Arc::new(StubSource {
                result: Ok(observation),
            }),
        );
        let reference = reference_with_fallback(
            "미국",
            FallbackRate {
                rate: 5.25,
                date: String::from("2024-12-18"),
                change: 0.0,
            },
        );

        let resolved = RateResolver::new(&registry, &reference)
            .resolve(&country("미국"))
            .await;

        assert_eq!(
            resolved,
            ResolvedRate {
                rate: 1.5,
                date: String::from("2024-01-01"),
                change: 0.0,
                source: Some(SourceId::Fred),
            }
        );
    }

    #[tokio::test]
    async fn strategy_failure_falls_through_to_fallback() {
        let mut registry = SourceRegistry::new();
        registry.register(
            country("미국"),
            Arc::new(StubSource {
                result: Err(SourceError::unavailable("upstream returned status 500")),
            }),
        );
        let reference = reference_with_fallback(
            "미국",
            FallbackRate {
                rate: 5.25,
                date: String::from("2024-12-18"),
                change: 0.0,
            },
        );

        let resolved = RateResolver::new(&registry, &reference)
            .resolve(&country("미국"))
            .await;

        assert_eq!(resolved.rate, 5.25);
        assert_eq!(resolved.date, "2024-12-18");
        assert_eq!(resolved.source, None);
    }

    #[tokio::test]
    async fn no_strategy_resolves_to_the_exact_fallback_record() {
        let registry = SourceRegistry::new();
        let reference = reference_with_fallback(
            "중국",
            FallbackRate {
                rate: 3.45,
                date: String::from("2024-12-20"),
                change: 0.0,
            },
        );

        let resolved = RateResolver::new(&registry, &reference)
            .resolve(&country("중국"))
            .await;

        assert_eq!(
            resolved,
            ResolvedRate {
                rate: 3.45,
                date: String::from("2024-12-20"),
                change: 0.0,
                source: None,
            }
        );
    }

    #[tokio::test]
    async fn unknown_country_gets_zero_rate_placeholder_dated_today() {
        let registry = SourceRegistry::new();
        let reference = ReferenceData::new(
            vec![country("아이슬란드")],
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );

        let resolved = RateResolver::new(&registry, &reference)
            .resolve(&country("아이슬란드"))
            .await;

        assert_eq!(resolved.rate, 0.0);
        assert_eq!(resolved.change, 0.0);
        assert_eq!(resolved.source, None);
        assert_eq!(resolved.date, today_utc());
    }

    #[test]
    fn placeholder_date_is_iso_formatted() {
        let today = today_utc();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
