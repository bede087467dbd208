//! Splitting and cleaning raw coauthor fields
//!
//! A raw field is split by an ordered list of separators, then every token
//! is stripped of identifier brackets, quoting and punctuation. Tokens that
//! end up empty, null-like, or short and purely numeric are dropped.

/// Candidate separators, applied left to right
const SEPARATORS: [&str; 6] = [";", "|", "\n", " and ", " & ", ","];

/// Values spreadsheet exports use for missing cells
const NULL_MARKERS: [&str; 3] = ["nan", "none", "null"];

/// Bracket content containing one of these is an identifier, not an affiliation
const IDENTIFIER_MARKERS: [&str; 2] = ["orcid", "doi"];

/// Purely numeric tokens shorter than this are export artifacts
const MIN_NUMERIC_TOKEN_LEN: usize = 4;

/// Split a raw field into untrimmed tokens.
///
/// A separator only fires if at least one token produced so far contains
/// it, so separators compose instead of all splitting unconditionally.
pub fn split_field(raw: &str) -> Vec<&str> {
    let mut tokens = vec![raw];
    for sep in SEPARATORS {
        if tokens.iter().any(|t| t.contains(sep)) {
            tokens = tokens.into_iter().flat_map(|t| t.split(sep)).collect();
        }
    }
    tokens
}

/// Whether a value is a missing-cell marker (`nan`, `none`, `null`)
pub fn is_null_marker(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || NULL_MARKERS.iter().any(|m| value.eq_ignore_ascii_case(m))
}

/// Collapse whitespace and drop `.` `,` `;` `:`
///
/// Casing is preserved; the result is what gets displayed.
pub fn clean_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ';' | ':'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-folded, whitespace-collapsed, punctuation-stripped form
pub fn normalize(name: &str) -> String {
    clean_name(name).to_lowercase()
}

/// Normalized form with all whitespace removed
pub fn compact(name: &str) -> String {
    normalize(name).chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a raw coauthor field into cleaned author names.
///
/// Duplicates are kept; deduplication happens on resolved keys.
pub fn parse_authors(raw: &str) -> Vec<String> {
    if is_null_marker(raw) {
        return Vec::new();
    }

    split_field(raw.trim())
        .into_iter()
        .filter_map(clean_token)
        .collect()
}

/// Split an external-identifier field into individual identifiers
pub fn parse_identifiers(raw: &str) -> Vec<String> {
    if is_null_marker(raw) {
        return Vec::new();
    }

    split_field(raw.trim())
        .into_iter()
        .map(str::trim)
        .filter(|t| !is_null_marker(t))
        .map(str::to_string)
        .collect()
}

fn clean_token(token: &str) -> Option<String> {
    let mut token = token.trim();
    if is_null_marker(token) {
        return None;
    }

    if let Some((before, bracketed)) = token.split_once('(') {
        let bracketed = bracketed.to_lowercase();
        if IDENTIFIER_MARKERS.iter().any(|m| bracketed.contains(m)) {
            token = before.trim();
        }
    }

    let token = token.trim_matches(|c| c == '"' || c == '\'');
    let cleaned = clean_name(token);

    let numeric = cleaned.chars().all(|c| c.is_ascii_digit());
    if cleaned.is_empty() || (numeric && cleaned.len() < MIN_NUMERIC_TOKEN_LEN) {
        return None;
    }

    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_compose() {
        let names = parse_authors("Ada Lovelace; Alan Turing and Grace Hopper, Edsger Dijkstra");
        assert_eq!(
            names,
            vec!["Ada Lovelace", "Alan Turing", "Grace Hopper", "Edsger Dijkstra"]
        );
    }

    #[test]
    fn test_pipe_newline_and_ampersand() {
        let names = parse_authors("A One | B Two\nC Three & D Four");
        assert_eq!(names, vec!["A One", "B Two", "C Three", "D Four"]);
    }

    #[test]
    fn test_separator_only_applies_when_present() {
        assert_eq!(split_field("Jane Smith"), vec!["Jane Smith"]);
    }

    #[test]
    fn test_identifier_bracket_stripped_affiliation_kept() {
        assert_eq!(
            parse_authors("Jane Smith (ORCID 0000-0001-2345-6789)"),
            vec!["Jane Smith"]
        );
        assert_eq!(parse_authors("Jane Smith (MIT)"), vec!["Jane Smith (MIT)"]);
    }

    #[test]
    fn test_quotes_and_punctuation_stripped() {
        assert_eq!(parse_authors("\"J. R.  Smith\""), vec!["J R Smith"]);
        assert_eq!(parse_authors("'Ada Lovelace'"), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_short_numeric_tokens_dropped() {
        assert_eq!(parse_authors("12, Jane Smith, 2024"), vec!["Jane Smith", "2024"]);
    }

    #[test]
    fn test_null_like_fields_are_empty() {
        assert!(parse_authors("NaN").is_empty());
        assert!(parse_authors("   ").is_empty());
        assert!(parse_authors("Jane Smith; null; none").len() == 1);
    }

    #[test]
    fn test_normalize_and_compact() {
        assert_eq!(normalize("  Jane   SMITH. "), "jane smith");
        assert_eq!(compact("Jane  Smith"), "janesmith");
        assert_eq!(compact("JaneSmith"), "janesmith");
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!(
            parse_identifiers("0000-0001; nan ;0000-0002"),
            vec!["0000-0001", "0000-0002"]
        );
        assert!(parse_identifiers("none").is_empty());
    }
}
