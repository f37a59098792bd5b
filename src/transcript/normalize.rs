//! Lossy text canonicalization for overlap comparison
//!
//! Recognition engines re-send final results that differ from the partials
//! already folded in only by casing or punctuation ("cat sat." vs "Cat sat").
//! Comparing normalized forms lets the accumulator treat those as the same
//! text. Normalized output is never displayed.

/// Canonicalize text for comparison purposes
///
/// Lower-cases, replaces every character outside `[a-z0-9]` with a space,
/// collapses whitespace runs, and trims. Idempotent.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether `base` already ends with `suffix`, ignoring case,
/// punctuation, and whitespace variance
///
/// An empty suffix is vacuously contained. The comparison is a literal
/// trailing-substring test on the normalized forms, not a word-aligned
/// diff; that is sufficient for the tail re-send pattern engines exhibit.
pub fn normalized_ends_with(base: &str, suffix: &str) -> bool {
    let suffix = normalize(suffix);
    if suffix.is_empty() {
        return true;
    }
    normalize(base).ends_with(&suffix)
}
