//! Commit message versus file change matching.
//!
//! Scores how well a commit message describes the files the commit touches
//! by looking for lexical overlap between message words and path fragments.

pub mod terms;

use tracing::debug;

use crate::data::{
    Classification, CommitDetail, FileChange, FileRelevance, MatchResult, Relevance,
};

pub use terms::{count_matching_terms, file_terms, message_terms, terms_overlap};

/// Confidence assigned before any term matches.
const BASE_CONFIDENCE: f64 = 30.0;

/// Confidence gained per average matched term per file.
const CONFIDENCE_PER_MATCH: f64 = 50.0;

/// Upper bound of the confidence scale.
const MAX_CONFIDENCE: f64 = 100.0;

/// Heuristic analyzer for commit message relevance.
pub struct CommitMatchAnalyzer;

impl CommitMatchAnalyzer {
    /// Analyzes a commit detail.
    pub fn analyze(detail: &CommitDetail) -> MatchResult {
        Self::analyze_parts(&detail.summary.message, detail.files.as_deref())
    }

    /// Analyzes a message against an optional file list.
    ///
    /// A missing or empty file list yields [`MatchResult::unknown`].
    pub fn analyze_parts(message: &str, files: Option<&[FileChange]>) -> MatchResult {
        let files = match files {
            Some(files) if !files.is_empty() => files,
            _ => return MatchResult::unknown(),
        };

        let message_terms = message_terms(message);

        let per_file: Vec<FileRelevance> = files
            .iter()
            .map(|file| {
                let matched_term_count =
                    count_matching_terms(&file_terms(&file.filename), &message_terms);

                FileRelevance {
                    file: file.filename.clone(),
                    change_summary: file.change_summary(),
                    status: file.status.clone(),
                    matched_term_count,
                    relevance: if matched_term_count > 0 {
                        Relevance::High
                    } else {
                        Relevance::Low
                    },
                }
            })
            .collect();

        let total_matches: usize = per_file.iter().map(|f| f.matched_term_count).sum();
        let confidence = confidence_score(total_matches, per_file.len());

        debug!(
            files = per_file.len(),
            total_matches, confidence, "Analyzed commit match"
        );

        MatchResult {
            classification: Classification::from_confidence(confidence),
            confidence,
            per_file,
        }
    }
}

/// Maps matched terms over a file count onto the 0-100 confidence scale.
///
/// `file_count` must be non-zero.
pub(crate) fn confidence_score(total_matches: usize, file_count: usize) -> u8 {
    let raw = total_matches as f64 / file_count as f64 * CONFIDENCE_PER_MATCH + BASE_CONFIDENCE;
    raw.round().clamp(0.0, MAX_CONFIDENCE) as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::data::CommitSummary;
    use chrono::{TimeZone, Utc};

    fn file(filename: &str, additions: u64, deletions: u64, status: &str) -> FileChange {
        FileChange {
            filename: filename.to_string(),
            additions,
            deletions,
            status: status.to_string(),
        }
    }

    fn detail(message: &str, files: Option<Vec<FileChange>>) -> CommitDetail {
        CommitDetail {
            summary: CommitSummary {
                sha: "6dcb09b5b57875f334f61aebed695e2e4193db5e".to_string(),
                author_name: "Monalisa Octocat".to_string(),
                author_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
                message: message.to_string(),
            },
            files,
            html_url: "https://github.com/octo/repo/commit/6dcb09b".to_string(),
        }
    }

    #[test]
    fn login_fix_is_good() {
        let d = detail(
            "fix login bug",
            Some(vec![file("auth/login.ts", 3, 1, "modified")]),
        );
        let result = CommitMatchAnalyzer::analyze(&d);

        assert_eq!(result.confidence, 80);
        assert_eq!(result.classification, Classification::Good);
        assert_eq!(
            result.per_file,
            vec![FileRelevance {
                file: "auth/login.ts".to_string(),
                change_summary: "+3 -1".to_string(),
                status: "modified".to_string(),
                matched_term_count: 1,
                relevance: Relevance::High,
            }]
        );
    }

    #[test]
    fn unrelated_message_is_poor() {
        let d = detail(
            "update readme",
            Some(vec![file("src/core/engine.rs", 10, 2, "modified")]),
        );
        let result = CommitMatchAnalyzer::analyze(&d);

        assert_eq!(result.confidence, 30);
        assert_eq!(result.classification, Classification::Poor);
        assert_eq!(result.per_file[0].matched_term_count, 0);
        assert_eq!(result.per_file[0].relevance, Relevance::Low);
    }

    #[test]
    fn missing_file_list_is_unknown() {
        let result = CommitMatchAnalyzer::analyze(&detail("anything", None));
        assert_eq!(result, MatchResult::unknown());
    }

    #[test]
    fn empty_file_list_is_unknown() {
        let result = CommitMatchAnalyzer::analyze(&detail("anything", Some(Vec::new())));
        assert_eq!(result, MatchResult::unknown());
    }

    #[test]
    fn partial_when_half_the_files_match() {
        let d = detail(
            "tweak parser",
            Some(vec![
                file("src/parser.rs", 1, 1, "modified"),
                file("docs/guide.md", 4, 0, "added"),
            ]),
        );
        let result = CommitMatchAnalyzer::analyze(&d);

        // one match over two files: 0.5 * 50 + 30
        assert_eq!(result.confidence, 55);
        assert_eq!(result.classification, Classification::Partial);
        assert_eq!(result.per_file[0].relevance, Relevance::High);
        assert_eq!(result.per_file[1].relevance, Relevance::Low);
    }

    #[test]
    fn confidence_caps_at_one_hundred() {
        let d = detail(
            "refactor session cache store",
            Some(vec![file("session/cache/store.rs", 5, 5, "modified")]),
        );
        let result = CommitMatchAnalyzer::analyze(&d);

        assert_eq!(result.per_file[0].matched_term_count, 3);
        assert_eq!(result.confidence, 100);
        assert_eq!(result.classification, Classification::Good);
    }

    #[test]
    fn per_file_order_follows_input() {
        let d = detail(
            "misc",
            Some(vec![
                file("z.rs", 0, 0, "removed"),
                file("a.rs", 0, 0, "added"),
                file("m.rs", 0, 0, "renamed"),
            ]),
        );
        let names: Vec<_> = CommitMatchAnalyzer::analyze(&d)
            .per_file
            .into_iter()
            .map(|f| f.file)
            .collect();
        assert_eq!(names, vec!["z.rs", "a.rs", "m.rs"]);
    }

    #[test]
    fn short_substrings_over_match() {
        // "log" is contained in "catalog"
        let d = detail(
            "update catalog",
            Some(vec![file("log/x.rs", 1, 0, "modified")]),
        );
        let result = CommitMatchAnalyzer::analyze(&d);
        assert_eq!(result.per_file[0].matched_term_count, 1);
    }

    #[test]
    fn confidence_rounds_half_up() {
        // 1/4 * 50 + 30 = 42.5
        assert_eq!(confidence_score(1, 4), 43);
        // 1/3 * 50 + 30 = 46.67
        assert_eq!(confidence_score(1, 3), 47);
        assert_eq!(confidence_score(0, 7), 30);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_file() -> impl Strategy<Value = FileChange> {
            ("[a-z_./-]{0,30}", 0u64..1000, 0u64..1000, "added|removed|modified|renamed")
                .prop_map(|(filename, additions, deletions, status)| FileChange {
                    filename,
                    additions,
                    deletions,
                    status,
                })
        }

        proptest! {
            #[test]
            fn confidence_in_range(
                message in ".{0,80}",
                files in proptest::collection::vec(arb_file(), 1..8),
            ) {
                let result = CommitMatchAnalyzer::analyze_parts(&message, Some(files.as_slice()));
                prop_assert!(result.confidence <= 100);
                prop_assert!(result.confidence >= 30);
                prop_assert_eq!(result.per_file.len(), files.len());
            }

            #[test]
            fn analyze_is_idempotent(
                message in ".{0,80}",
                files in proptest::collection::vec(arb_file(), 0..8),
            ) {
                let d = detail(&message, Some(files));
                prop_assert_eq!(CommitMatchAnalyzer::analyze(&d), CommitMatchAnalyzer::analyze(&d));
            }

            #[test]
            fn relevance_tracks_match_count(
                message in "[a-z ]{0,40}",
                files in proptest::collection::vec(arb_file(), 1..8),
            ) {
                let result = CommitMatchAnalyzer::analyze_parts(&message, Some(files.as_slice()));
                for f in &result.per_file {
                    prop_assert_eq!(f.relevance == Relevance::High, f.matched_term_count > 0);
                }
            }

            #[test]
            fn confidence_monotonic_in_matches(
                total in 0usize..200,
                extra in 0usize..50,
                file_count in 1usize..50,
            ) {
                prop_assert!(confidence_score(total + extra, file_count) >= confidence_score(total, file_count));
            }

            #[test]
            fn classification_agrees_with_confidence(
                total in 0usize..200,
                file_count in 1usize..50,
            ) {
                let c = confidence_score(total, file_count);
                let expected = if c > 60 {
                    Classification::Good
                } else if c > 30 {
                    Classification::Partial
                } else {
                    Classification::Poor
                };
                prop_assert_eq!(Classification::from_confidence(c), expected);
            }
        }
    }
}
