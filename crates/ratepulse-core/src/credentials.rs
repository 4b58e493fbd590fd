//! API credential resolution.
//!
//! Values come from the process environment first; a local key-value file
//! (`.env` by convention) fills in names the environment left empty. Absence
//! is a valid state: an empty string, never an error. Secrets are held in
//! memory for the duration of the run and are never logged or persisted.

use std::collections::HashMap;
use std::path::Path;

/// FRED (St. Louis Fed) API key, used for the 미국 strategy.
pub const FRED_API_KEY: &str = "FRED_API_KEY";
/// Bank of Korea ECOS API key, used for the 한국 strategy.
pub const BOK_API_KEY: &str = "BOK_API_KEY";

const RECOGNIZED: [&str; 2] = [FRED_API_KEY, BOK_API_KEY];

/// Credential name → secret mapping, resolved once per run.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    values: HashMap<String, String>,
}

impl Credentials {
    /// Resolves credentials from the environment, then from `env_file` for
    /// names still empty. A missing file is normal; an unreadable one is
    /// logged and skipped, never fatal.
    pub fn load(env_file: &Path) -> Self {
        let mut credentials = Self::default();

        for name in RECOGNIZED {
            credentials
                .values
                .insert(name.to_owned(), std::env::var(name).unwrap_or_default());
        }

        if env_file.exists() {
            match std::fs::read_to_string(env_file) {
                Ok(contents) => credentials.fill_from_file(&contents),
                Err(error) => {
                    tracing::warn!(path = %env_file.display(), "failed to read credential file: {error}");
                }
            }
        }

        credentials
    }

    /// Parses `KEY=VALUE` lines, skipping `#` comments and lines without
    /// `=`. File values only fill names whose current value is empty;
    /// the environment always wins.
    fn fill_from_file(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let current = self.values.entry(key.to_owned()).or_default();
            if current.is_empty() {
                *current = value.to_owned();
            }
        }
    }

    /// The secret for `name`; empty string when unset.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Directly seeded credentials, for wiring tests and embedding callers.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
