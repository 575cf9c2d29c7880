/// Normalize a UN/NA identifier for exact lookup.
///
/// Steps:
/// 1. Trim
/// 2. Strip a leading "UN" or "NA" prefix (any case)
/// 3. Trim again, so "UN 1203" and "un1203" both yield "1203"
///
/// Short inputs are not zero-padded: "17" stays "17" and only matches a
/// material whose UN number is literally "17".
pub fn normalize_un(raw: &str) -> &str {
    let s = raw.trim();
    match s.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("un") || prefix.eq_ignore_ascii_case("na") => {
            s[2..].trim()
        }
        _ => s,
    }
}

/// Normalize a free-text product query: trim and lower-case.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True for a canonical table key: exactly four ASCII digits.
pub fn is_canonical_un(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}
