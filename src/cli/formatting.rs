//! Text rendering for command output.
//!
//! Pure functions turning reports into the human-readable text format so
//! commands only decide what to print.

use crate::data::{
    Classification, CommitReport, CommitSummary, FileRelevance, Relevance, ScanReport,
    ScanSummary,
};

/// Number of cells in the confidence bar.
const BAR_WIDTH: usize = 20;

/// Returns an emoji icon for a classification.
pub(crate) fn classification_icon(classification: Classification) -> &'static str {
    match classification {
        Classification::Good => "\u{2705}",
        Classification::Partial => "\u{26a0}\u{fe0f}",
        Classification::Poor => "\u{274c}",
        Classification::Unknown => "\u{2754}",
    }
}

/// Renders a confidence score as a fixed-width bar.
pub(crate) fn confidence_bar(confidence: u8) -> String {
    let filled = usize::from(confidence.min(100)) * BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_WIDTH - filled)
    )
}

/// Formats one entry of the commit list.
pub(crate) fn format_commit_line(commit: &CommitSummary) -> String {
    format!(
        "{}  {}  ({}, {})",
        commit.short_sha(),
        commit.subject(),
        commit.author_name,
        commit.author_date.format("%Y-%m-%d")
    )
}

/// Renders a repository's commit list.
pub(crate) fn render_commit_list(repository: &str, commits: &[CommitSummary]) -> String {
    if commits.is_empty() {
        return format!("\u{1f4cb} {repository}: no commits found\n");
    }

    let mut out = format!("\u{1f4cb} {repository}: {} commits\n\n", commits.len());
    for commit in commits {
        out.push_str(&format_commit_line(commit));
        out.push('\n');
    }
    out
}

/// Formats one analysed file.
fn format_file_line(file: &FileRelevance) -> String {
    let marker = match file.relevance {
        Relevance::High => "\u{2713}",
        Relevance::Low => "\u{b7}",
    };
    format!(
        "   {marker} {} ({}, {})",
        file.file, file.change_summary, file.status
    )
}

/// Renders the full analysis of one commit.
pub(crate) fn render_commit_report(report: &CommitReport) -> String {
    let summary = &report.commit.summary;
    let result = &report.result;

    let mut out = String::new();
    out.push_str(&format!("commit {}\n", summary.sha));
    out.push_str(&format!("Author: {}\n", summary.author_name));
    out.push_str(&format!(
        "Date:   {}\n\n",
        summary.author_date.format("%Y-%m-%d %H:%M UTC")
    ));

    for line in summary.message.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out.push('\n');

    out.push_str(&format!(
        "{} Match quality: {} ({}% confidence)\n",
        classification_icon(result.classification),
        result.classification,
        result.confidence
    ));
    out.push_str(&format!("   {}\n\n", confidence_bar(result.confidence)));

    if result.per_file.is_empty() {
        out.push_str("\u{1f4c2} No file changes reported\n");
    } else {
        out.push_str(&format!(
            "\u{1f4c2} Files changed ({}):\n",
            result.per_file.len()
        ));
        for file in &result.per_file {
            out.push_str(&format_file_line(file));
            out.push('\n');
        }
    }

    out.push_str(&format!("\n\u{1f517} {}\n", report.commit.html_url));
    out
}

/// Formats the per-classification totals of a scan.
pub(crate) fn format_summary_text(summary: &ScanSummary) -> String {
    format!(
        "Summary: {} good, {} partial, {} poor, {} unknown",
        summary.good, summary.partial, summary.poor, summary.unknown
    )
}

/// Renders a scan over several commits.
pub(crate) fn render_scan_report(report: &ScanReport) -> String {
    let mut out = format!(
        "\u{1f4ca} {}: {} commits analyzed\n\n",
        report.repository, report.summary.total_commits
    );

    for entry in &report.commits {
        out.push_str(&format!(
            "{} {}  {:>3}%  {:<7}  {}\n",
            classification_icon(entry.result.classification),
            entry.commit.short_sha(),
            entry.result.confidence,
            entry.result.classification.to_string(),
            entry.commit.subject()
        ));
    }

    out.push('\n');
    out.push_str(&format_summary_text(&report.summary));
    out.push('\n');
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::analysis::CommitMatchAnalyzer;
    use crate::data::{CommitDetail, FileChange, MatchResult, ScanEntry};
    use chrono::{TimeZone, Utc};

    fn summary(sha: &str, message: &str) -> CommitSummary {
        CommitSummary {
            sha: sha.to_string(),
            author_name: "Monalisa Octocat".to_string(),
            author_date: Utc.with_ymd_and_hms(2011, 4, 14, 16, 0, 49).unwrap(),
            message: message.to_string(),
        }
    }

    fn change(filename: &str, additions: u64, deletions: u64) -> FileChange {
        FileChange {
            filename: filename.to_string(),
            additions,
            deletions,
            status: "modified".to_string(),
        }
    }

    fn report(message: &str, files: Option<Vec<FileChange>>) -> CommitReport {
        let sha = "6dcb09b5b57875f334f61aebed695e2e4193db5e";
        let commit = CommitDetail {
            summary: summary(sha, message),
            files,
            html_url: format!("https://github.com/octo/repo/commit/{sha}"),
        };
        let result = CommitMatchAnalyzer::analyze(&commit);
        CommitReport {
            repository: "octo/repo".to_string(),
            commit,
            result,
        }
    }

    // --- confidence_bar ---

    #[test]
    fn confidence_bar_bounds() {
        assert_eq!(confidence_bar(0), format!("[{}]", "\u{2591}".repeat(20)));
        assert_eq!(confidence_bar(100), format!("[{}]", "\u{2588}".repeat(20)));
    }

    #[test]
    fn confidence_bar_partial() {
        let bar = confidence_bar(80);
        assert_eq!(bar.matches('\u{2588}').count(), 16);
        assert_eq!(bar.matches('\u{2591}').count(), 4);
    }

    // --- classification_icon ---

    #[test]
    fn icons_differ_per_classification() {
        let icons = [
            classification_icon(Classification::Good),
            classification_icon(Classification::Partial),
            classification_icon(Classification::Poor),
            classification_icon(Classification::Unknown),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // --- commit list ---

    #[test]
    fn commit_line_uses_subject_and_short_sha() {
        let c = summary(
            "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "Fix all the bugs\n\nAnd then some.",
        );
        assert_eq!(
            format_commit_line(&c),
            "6dcb09b  Fix all the bugs  (Monalisa Octocat, 2011-04-14)"
        );
    }

    #[test]
    fn empty_commit_list_notice() {
        assert_eq!(
            render_commit_list("octo/repo", &[]),
            "\u{1f4cb} octo/repo: no commits found\n"
        );
    }

    // --- commit report ---

    #[test]
    fn commit_report_text() {
        let r = report(
            "fix login bug\n\nUsers could not sign in.",
            Some(vec![change("auth/login.ts", 3, 1), change("docs/README.md", 1, 0)]),
        );
        let rendered = render_commit_report(&r);

        insta::assert_snapshot!(rendered.trim_end(), @r"
        commit 6dcb09b5b57875f334f61aebed695e2e4193db5e
        Author: Monalisa Octocat
        Date:   2011-04-14 16:00 UTC

            fix login bug

            Users could not sign in.

        ⚠️ Match quality: partial (55% confidence)
           [███████████░░░░░░░░░]

        📂 Files changed (2):
           ✓ auth/login.ts (+3 -1, modified)
           · docs/README.md (+1 -0, modified)

        🔗 https://github.com/octo/repo/commit/6dcb09b5b57875f334f61aebed695e2e4193db5e
        ");
    }

    #[test]
    fn commit_report_without_files() {
        let rendered = render_commit_report(&report("merge branch", None));
        assert!(rendered.contains("Match quality: unknown (0% confidence)"));
        assert!(rendered.contains("No file changes reported"));
    }

    // --- scan report ---

    #[test]
    fn scan_report_text() {
        let entries = vec![
            ScanEntry {
                commit: summary("6dcb09b5b57875f334f61aebed695e2e4193db5e", "fix login bug"),
                result: MatchResult {
                    classification: Classification::Good,
                    confidence: 80,
                    per_file: Vec::new(),
                },
            },
            ScanEntry {
                commit: summary("7638417db6d59f3c431d3e1f261cc637155684cd", "update readme"),
                result: MatchResult {
                    classification: Classification::Poor,
                    confidence: 30,
                    per_file: Vec::new(),
                },
            },
        ];
        let report = ScanReport::new("octo/repo".to_string(), entries);

        assert_eq!(
            render_scan_report(&report),
            "\u{1f4ca} octo/repo: 2 commits analyzed\n\n\
             \u{2705} 6dcb09b   80%  good     fix login bug\n\
             \u{274c} 7638417   30%  poor     update readme\n\n\
             Summary: 1 good, 0 partial, 1 poor, 0 unknown\n"
        );
    }
}
