//! Term extraction for commit messages and file paths.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Maximal ASCII word-character runs.
#[allow(clippy::unwrap_used)] // Compile-time constant regex
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Characters that separate path fragments.
const PATH_SEPARATORS: [char; 4] = ['/', '.', '_', '-'];

/// Path fragments must be longer than this to count as terms.
const MIN_PATH_TERM_LEN: usize = 2;

/// Extracts the distinct lower-cased word terms of a commit message.
pub fn message_terms(message: &str) -> BTreeSet<String> {
    let lowered = message.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts the lower-cased path fragments of a file name.
///
/// Duplicates are kept: a fragment repeated in the path counts once per
/// occurrence.
pub fn file_terms(filename: &str) -> Vec<String> {
    filename
        .to_lowercase()
        .split(PATH_SEPARATORS)
        .filter(|fragment| fragment.chars().count() > MIN_PATH_TERM_LEN)
        .map(str::to_string)
        .collect()
}

/// Returns true when either term contains the other.
///
/// Deliberately loose: short terms such as `log` match any message word
/// containing them.
pub fn terms_overlap(file_term: &str, message_term: &str) -> bool {
    file_term.contains(message_term) || message_term.contains(file_term)
}

/// Counts the file terms that overlap at least one message term.
pub fn count_matching_terms(file_terms: &[String], message_terms: &BTreeSet<String>) -> usize {
    file_terms
        .iter()
        .filter(|term| message_terms.iter().any(|m| terms_overlap(term, m)))
        .count()
}
