use serde::Serialize;

/// Number of registered countries.
pub const COUNTRY_COUNT: usize = 82;

/// Largest IBAN length allowed by ISO 13616.
pub const MAX_IBAN_LENGTH: usize = 34;

// Sorted ISO 3166-1 alpha-2 codes of IBAN-issuing countries. Every lookup is a binary
// search over this table; `table_is_well_formed` rejects an unsorted edit at compile time.
const CODES: [&str; COUNTRY_COUNT] = [
    "AD", "AE", "AL", "AO", "AT", "AZ", "BA", "BE", "BF", "BG", "BH", "BI", "BJ", "BR", "CG",
    "CH", "CI", "CM", "CR", "CV", "CY", "CZ", "DE", "DK", "DO", "DZ", "EE", "EG", "ES", "FI",
    "FO", "FR", "GA", "GB", "GE", "GI", "GL", "GR", "GT", "HR", "HU", "IE", "IL", "IR", "IS",
    "IT", "KW", "KZ", "LB", "LI", "LT", "LU", "LV", "MC", "MD", "ME", "MG", "MK", "ML", "MR",
    "MT", "MU", "MZ", "NL", "NO", "PK", "PL", "PS", "PT", "QA", "RO", "RS", "SA", "SE", "SI",
    "SK", "SM", "SN", "TN", "TR", "UA", "VG",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IbanFormat {
    length: u8,
    sepa: bool,
}

const fn sepa(length: u8) -> IbanFormat {
    IbanFormat { length, sepa: true }
}

const fn other(length: u8) -> IbanFormat {
    IbanFormat { length, sepa: false }
}

// Indexed like CODES.
const FORMATS: [IbanFormat; COUNTRY_COUNT] = [
    other(24), // AD
    other(23), // AE
    other(28), // AL
    other(25), // AO
    sepa(20),  // AT
    other(28), // AZ
    other(20), // BA
    sepa(16),  // BE
    other(27), // BF
    sepa(22),  // BG
    other(22), // BH
    other(16), // BI
    other(28), // BJ
    other(29), // BR
    other(27), // CG
    sepa(21),  // CH
    other(28), // CI
    other(27), // CM
    other(21), // CR
    other(25), // CV
    sepa(28),  // CY
    sepa(24),  // CZ
    sepa(22),  // DE
    sepa(18),  // DK
    other(28), // DO
    other(24), // DZ
    sepa(20),  // EE
    other(27), // EG
    sepa(24),  // ES
    sepa(18),  // FI
    other(18), // FO
    sepa(27),  // FR
    other(27), // GA
    sepa(22),  // GB
    other(22), // GE
    sepa(23),  // GI
    other(18), // GL
    sepa(27),  // GR
    other(28), // GT
    sepa(21),  // HR
    sepa(28),  // HU
    sepa(22),  // IE
    other(23), // IL
    other(26), // IR
    sepa(26),  // IS
    sepa(27),  // IT
    other(30), // KW
    other(20), // KZ
    other(28), // LB
    sepa(21),  // LI
    sepa(20),  // LT
    sepa(20),  // LU
    sepa(21),  // LV
    sepa(27),  // MC
    other(24), // MD
    other(22), // ME
    other(27), // MG
    other(19), // MK
    other(28), // ML
    other(27), // MR
    sepa(31),  // MT
    other(30), // MU
    other(25), // MZ
    sepa(18),  // NL
    sepa(15),  // NO
    other(24), // PK
    sepa(28),  // PL
    other(29), // PS
    sepa(25),  // PT
    other(29), // QA
    sepa(24),  // RO
    other(22), // RS
    other(24), // SA
    sepa(24),  // SE
    sepa(19),  // SI
    sepa(24),  // SK
    other(27), // SM
    other(28), // SN
    other(24), // TN
    other(26), // TR
    other(29), // UA
    other(24), // VG
];

static COUNTRY_CODES: [&str; COUNTRY_COUNT] = CODES;
static IBAN_FORMATS: [IbanFormat; COUNTRY_COUNT] = FORMATS;

const fn code_less_than(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

const fn table_is_well_formed() -> bool {
    let mut i = 0;
    while i < COUNTRY_COUNT {
        let code = CODES[i].as_bytes();
        if code.len() != 2 || !code[0].is_ascii_uppercase() || !code[1].is_ascii_uppercase() {
            return false;
        }
        if i > 0 && !code_less_than(CODES[i - 1], CODES[i]) {
            return false;
        }
        let length = FORMATS[i].length as usize;
        if length == 0 || length > MAX_IBAN_LENGTH {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    table_is_well_formed(),
    "CODES must be strictly ascending two-letter uppercase codes with lengths in 1..=34"
);

/// Metadata for one registered country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    /// Two-letter uppercase ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// Total IBAN length, including the country code and check digits.
    pub iban_length: usize,
    /// Whether the country is part of SEPA.
    pub sepa: bool,
}

impl CountryEntry {
    fn at(index: usize) -> Self {
        let format = IBAN_FORMATS[index];
        CountryEntry {
            code: COUNTRY_CODES[index],
            iban_length: format.length as usize,
            sepa: format.sepa,
        }
    }
}

fn index_of(code: &str) -> Option<usize> {
    COUNTRY_CODES.binary_search(&code).ok()
}

/// Looks up the entry for an exact, uppercase country code.
pub fn lookup(code: &str) -> Option<CountryEntry> {
    index_of(code).map(CountryEntry::at)
}

/// Returns the total IBAN length for `code`, or `None` if it is not a registered
/// two-letter uppercase code.
pub fn length_for_country_code(code: &str) -> Option<usize> {
    index_of(code).map(|index| IBAN_FORMATS[index].length as usize)
}

/// Returns `true` if `code` is registered and part of SEPA. Unknown codes give `false`
/// too; use [`is_known_country_code`] to tell the two apart.
pub fn is_sepa_country(code: &str) -> bool {
    index_of(code).is_some_and(|index| IBAN_FORMATS[index].sepa)
}

/// Returns `true` if `code` is a two-letter uppercase code present in the registry.
///
/// Accepts an absent code, so it can be used to check optional input before the other
/// lookups:
///
/// ```
/// use iban_country_codes::is_known_country_code;
///
/// assert!(is_known_country_code("NL"));
/// assert!(!is_known_country_code("nl"));
/// assert!(!is_known_country_code(None));
/// ```
pub fn is_known_country_code<'a>(code: impl Into<Option<&'a str>>) -> bool {
    match code.into() {
        Some(code) if code.len() == 2 => index_of(code).is_some(),
        _ => false,
    }
}

/// All registered codes in ascending order.
pub fn known_country_codes() -> &'static [&'static str] {
    &COUNTRY_CODES
}

/// All registered entries in ascending code order.
pub fn entries() -> impl Iterator<Item = CountryEntry> {
    (0..COUNTRY_COUNT).map(CountryEntry::at)
}

/// Codes of the SEPA countries, in ascending order.
pub fn sepa_country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRY_CODES
        .iter()
        .zip(IBAN_FORMATS.iter())
        .filter(|(_, format)| format.sepa)
        .map(|(code, _)| *code)
}
