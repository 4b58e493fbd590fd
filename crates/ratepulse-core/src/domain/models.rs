use serde::{Deserialize, Serialize};

use crate::{CountryId, SourceId, ValidationError};

/// Canonical per-country rate record, one per entry of the country list.
///
/// Field order is fixed; it defines the layout of both output files.
/// `source` is present only for live observations and omitted entirely
/// (not `null`) for fallback/manual records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub country: CountryId,
    pub flag: String,
    pub rate: f64,
    pub date: String,
    pub change: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RateRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country: CountryId,
        flag: impl Into<String>,
        rate: f64,
        date: impl Into<String>,
        change: f64,
        currency: impl Into<String>,
        source: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_rate(rate)?;
        validate_finite("change", change)?;
        let date = date.into();
        if date.is_empty() {
            return Err(ValidationError::EmptyDate);
        }

        Ok(Self {
            country,
            flag: flag.into(),
            rate,
            date,
            change,
            currency: currency.into(),
            source,
        })
    }
}

/// Result of one successful live fetch: the most recent observation a
/// strategy could extract, tagged with its provenance.
///
/// `change` is not computed from history on any live path; every strategy
/// reports 0.0 until real history tracking exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RateObservation {
    pub rate: f64,
    pub date: String,
    pub change: f64,
    pub source: SourceId,
}

impl RateObservation {
    pub fn new(
        rate: f64,
        date: impl Into<String>,
        change: f64,
        source: SourceId,
    ) -> Result<Self, ValidationError> {
        validate_rate(rate)?;
        validate_finite("change", change)?;
        let date = date.into();
        if date.is_empty() {
            return Err(ValidationError::EmptyDate);
        }

        Ok(Self {
            rate,
            date,
            change,
            source,
        })
    }
}

/// Manually curated rate used when live acquisition is unavailable or fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackRate {
    pub rate: f64,
    pub date: String,
    pub change: f64,
}

fn validate_rate(rate: f64) -> Result<(), ValidationError> {
    validate_finite("rate", rate)?;
    if rate < 0.0 {
        return Err(ValidationError::NegativeValue { field: "rate" });
    }
    Ok(())
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}
