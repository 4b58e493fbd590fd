mod country;
mod models;

pub use country::CountryId;
pub use models::{FallbackRate, RateObservation, RateRecord};
