use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

/// Substituted when every input field tokenizes to nothing, so generation
/// always has at least one base.
pub const FALLBACK_TOKEN: &str = "default";

/// Splits each field on commas, strips all non-alphanumeric characters from
/// every piece and collects the non-empty survivors. Inputs are NFC
/// normalized first so visually identical seeds tokenize identically.
pub fn extract_tokens(fields: &[&str]) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();

    for field in fields {
        let normalized: String = field.nfc().collect();
        for piece in normalized.split(',') {
            let cleaned: String = piece.chars().filter(|c| c.is_alphanumeric()).collect();
            if !cleaned.is_empty() {
                tokens.insert(cleaned);
            }
        }
    }

    if tokens.is_empty() {
        tokens.insert(FALLBACK_TOKEN.to_string());
    }

    tokens
}

/// Extracts 4-digit years from a comma-separated, free-form date string.
///
/// A piece that is exactly four digits is taken as-is; anything else
/// contributes the non-overlapping 4-digit chunks of each of its digit runs
/// ("class of 2005" yields "2005", "19901" yields only "1990").
pub fn parse_years(datestr: &str) -> BTreeSet<String> {
    let mut years = BTreeSet::new();

    for piece in datestr.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        if piece.len() == 4 && piece.chars().all(|c| c.is_ascii_digit()) {
            years.insert(piece.to_string());
            continue;
        }

        for run in piece.split(|c: char| !c.is_ascii_digit()) {
            let digits: Vec<char> = run.chars().collect();
            for chunk in digits.chunks_exact(4) {
                years.insert(chunk.iter().collect());
            }
        }
    }

    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_basic() {
        let tokens = extract_tokens(&["alice,bob", "rex"]);
        assert_eq!(tokens, set(&["alice", "bob", "rex"]));
    }

    #[test]
    fn test_extract_strips_non_alphanumeric() {
        let tokens = extract_tokens(&["o'brien, mary-jane!", "c a t"]);
        assert_eq!(tokens, set(&["obrien", "maryjane", "cat"]));
    }

    #[test]
    fn test_extract_discards_empty_pieces() {
        let tokens = extract_tokens(&["alice,,  , !!!", ""]);
        assert_eq!(tokens, set(&["alice"]));
    }

    #[test]
    fn test_extract_deduplicates_across_fields() {
        let tokens = extract_tokens(&["rex", "rex,rex"]);
        assert_eq!(tokens, set(&["rex"]));
    }

    #[test]
    fn test_extract_fallback_on_empty() {
        let tokens = extract_tokens(&["", "", ""]);
        assert_eq!(tokens, set(&[FALLBACK_TOKEN]));
    }

    #[test]
    fn test_extract_fallback_on_all_symbols() {
        let tokens = extract_tokens(&["!!!, ---"]);
        assert_eq!(tokens, set(&[FALLBACK_TOKEN]));
    }

    #[test]
    fn test_extract_nfc_normalization() {
        // NFD "café" tokenizes the same as its NFC form.
        let nfc = extract_tokens(&["café"]);
        let nfd = extract_tokens(&["cafe\u{0301}"]);
        assert_eq!(nfc, nfd);
    }

    #[test]
    fn test_years_exact() {
        assert_eq!(parse_years("1990"), set(&["1990"]));
    }

    #[test]
    fn test_years_embedded() {
        assert_eq!(parse_years("1990, class of 2005"), set(&["1990", "2005"]));
    }

    #[test]
    fn test_years_multiple_in_one_piece() {
        assert_eq!(parse_years("born 1984 married 2010"), set(&["1984", "2010"]));
    }

    #[test]
    fn test_years_chunking_matches_reference() {
        // Five consecutive digits yield only the leading window.
        assert_eq!(parse_years("19901"), set(&["1990"]));
        // Eight yield two non-overlapping windows.
        assert_eq!(parse_years("12345678"), set(&["1234", "5678"]));
        // Short runs contribute nothing.
        assert_eq!(parse_years("12-31-99"), BTreeSet::new());
    }

    #[test]
    fn test_years_empty_input() {
        assert_eq!(parse_years(""), BTreeSet::new());
        assert_eq!(parse_years(" , , "), BTreeSet::new());
    }

    #[test]
    fn test_years_duplicates_collapse() {
        assert_eq!(parse_years("1990,1990, x1990x"), set(&["1990"]));
    }
}
