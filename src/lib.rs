//! Per-country IBAN metadata: the expected IBAN length for an ISO 3166-1 alpha-2 country
//! code, and whether the country is part of SEPA.
//!
//! ```
//! use iban_country_codes::{is_sepa_country, length_for_country_code};
//!
//! assert_eq!(length_for_country_code("DE"), Some(22));
//! assert!(is_sepa_country("DE"));
//! assert_eq!(length_for_country_code("BR"), Some(29));
//! assert!(!is_sepa_country("BR"));
//! assert_eq!(length_for_country_code("XX"), None);
//! ```

pub mod export;
pub mod location;
pub mod reference;

pub use export::{write_registry_csv, write_registry_csv_file};
pub use location::normalize_country_code;
pub use reference::{
    entries, is_known_country_code, is_sepa_country, known_country_codes,
    length_for_country_code, lookup, sepa_country_codes, CountryEntry, COUNTRY_COUNT,
    MAX_IBAN_LENGTH,
};
