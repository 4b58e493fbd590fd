//! Static reference data: the fixed country list, display metadata, and the
//! manually curated fallback table.
//!
//! The fallback `change` values are curated alongside the rates from official
//! announcements; they are constants, not deltas computed from stored history.

use std::collections::HashMap;

use crate::{CountryId, FallbackRate};

const DEFAULT_FLAG: &str = "🌍";
const DEFAULT_CURRENCY: &str = "";

/// country, flag, currency, fallback rate, effective date, change
const BUILTIN: &[(&str, &str, &str, f64, &str, f64)] = &[
    ("미국", "🇺🇸", "USD", 5.25, "2024-12-18", 0.0),
    ("한국", "🇰🇷", "KRW", 3.25, "2024-11-21", 0.0),
    ("일본", "🇯🇵", "JPY", 0.10, "2024-12-19", 0.10),
    ("유로존", "🇪🇺", "EUR", 4.25, "2024-12-12", -0.25),
    ("영국", "🇬🇧", "GBP", 5.25, "2024-12-19", 0.0),
    ("중국", "🇨🇳", "CNY", 3.45, "2024-12-20", 0.0),
    ("캐나다", "🇨🇦", "CAD", 5.00, "2024-12-04", 0.0),
    ("호주", "🇦🇺", "AUD", 4.35, "2024-12-03", 0.0),
    ("뉴질랜드", "🇳🇿", "NZD", 5.50, "2024-11-27", 0.0),
    ("스위스", "🇨🇭", "CHF", 1.50, "2024-12-19", -0.25),
    ("스웨덴", "🇸🇪", "SEK", 4.00, "2024-11-27", 0.0),
    ("노르웨이", "🇳🇴", "NOK", 4.50, "2024-12-19", 0.0),
    ("인도", "🇮🇳", "INR", 6.50, "2024-12-06", 0.0),
    ("브라질", "🇧🇷", "BRL", 10.50, "2024-12-11", -0.50),
    ("멕시코", "🇲🇽", "MXN", 11.25, "2024-12-12", 0.0),
    ("터키", "🇹🇷", "TRY", 45.00, "2024-12-19", 0.0),
    ("남아프리카", "🇿🇦", "ZAR", 8.25, "2024-11-21", 0.0),
    ("러시아", "🇷🇺", "RUB", 16.00, "2024-12-13", 0.0),
    ("싱가포르", "🇸🇬", "SGD", 3.00, "2024-10-14", 0.0),
    ("홍콩", "🇭🇰", "HKD", 5.75, "2024-12-19", 0.0),
];

/// Immutable reference tables, built once at process start and passed
/// explicitly into the resolver and dataset builder.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    countries: Vec<CountryId>,
    flags: HashMap<CountryId, String>,
    currencies: HashMap<CountryId, String>,
    fallback: HashMap<CountryId, FallbackRate>,
}

impl ReferenceData {
    pub fn new(
        countries: Vec<CountryId>,
        flags: HashMap<CountryId, String>,
        currencies: HashMap<CountryId, String>,
        fallback: HashMap<CountryId, FallbackRate>,
    ) -> Self {
        Self {
            countries,
            flags,
            currencies,
            fallback,
        }
    }

    /// The curated table shipped with the binary.
    pub fn builtin() -> Self {
        let mut countries = Vec::with_capacity(BUILTIN.len());
        let mut flags = HashMap::with_capacity(BUILTIN.len());
        let mut currencies = HashMap::with_capacity(BUILTIN.len());
        let mut fallback = HashMap::with_capacity(BUILTIN.len());

        for (name, flag, currency, rate, date, change) in BUILTIN {
            let country = CountryId::new(name).expect("builtin country names are valid");
            countries.push(country.clone());
            flags.insert(country.clone(), (*flag).to_owned());
            currencies.insert(country.clone(), (*currency).to_owned());
            fallback.insert(
                country,
                FallbackRate {
                    rate: *rate,
                    date: (*date).to_owned(),
                    change: *change,
                },
            );
        }

        Self::new(countries, flags, currencies, fallback)
    }

    /// The fixed country list; iteration order defines output order.
    pub fn countries(&self) -> &[CountryId] {
        &self.countries
    }

    pub fn flag(&self, country: &CountryId) -> &str {
        self.flags
            .get(country)
            .map_or(DEFAULT_FLAG, String::as_str)
    }

    pub fn currency(&self, country: &CountryId) -> &str {
        self.currencies
            .get(country)
            .map_or(DEFAULT_CURRENCY, String::as_str)
    }

    pub fn fallback(&self, country: &CountryId) -> Option<&FallbackRate> {
        self.fallback.get(country)
    }
}
