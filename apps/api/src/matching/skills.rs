//! Skill Normalizer: turns comma-separated skill strings into skill tokens.

/// Splits `raw` on commas, trims and lowercases each segment.
///
/// Empty segments (`"python,,sql"`, a trailing comma, blank input) are dropped,
/// so they can neither match nor count towards a job's skill total.
/// Duplicates are kept in their original order.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Like `normalize_skills`, but keeps only the first occurrence of each token.
pub fn skill_set(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for token in normalize_skills(raw) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
