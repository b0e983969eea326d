/// Trims `code` and uppercases it if what remains is two ASCII letters.
///
/// The registry lookups are case-sensitive; user-facing callers run input through this
/// first.
pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_padded_lowercase() {
        assert_eq!(normalize_country_code(" de "), Some("DE".to_string()));
        assert_eq!(normalize_country_code("Nl"), Some("NL".to_string()));
        assert_eq!(normalize_country_code("\tbr\n"), Some("BR".to_string()));
    }

    #[test]
    fn rejects_non_letter_or_wrong_length() {
        assert_eq!(normalize_country_code(""), None);
        assert_eq!(normalize_country_code("D"), None);
        assert_eq!(normalize_country_code("DEU"), None);
        assert_eq!(normalize_country_code("D1"), None);
        assert_eq!(normalize_country_code("D E"), None);
        assert_eq!(normalize_country_code("ÄB"), None);
    }
}
