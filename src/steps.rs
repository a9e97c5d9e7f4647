//! Step extraction for free-text recipe instructions
//!
//! Recipe APIs hand back one instructions paragraph per meal. This module
//! turns that paragraph into an ordered list of discrete steps using a chain
//! of punctuation heuristics, each stage a fallback for the one before:
//!
//! 1. Normalize line breaks into a single paragraph
//! 2. Split at sentence boundaries (`. `/`! `/`? ` before an uppercase letter)
//! 3. Otherwise split on `Step N:` labels or clause punctuation (`.;!?`)
//! 4. Strip numeric labels and bullet dashes, drop one-character fragments
//! 5. As a last resort, split the raw text on line breaks
//!
//! Extraction never fails and never reorders: the worst case is an empty list.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Terminal punctuation, a whitespace gap, then an uppercase letter.
/// Only the gap (group 1) is removed when splitting.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?](\s+)[A-Z]").expect("sentence boundary regex"));

/// Either a `Step N:` label (removed entirely) or a bare whitespace gap,
/// which only counts as a split point after clause punctuation.
static LABEL_OR_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)step\s*[0-9]+[:.)\-]?\s*|\s+").expect("step label regex")
});

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s*[:.)\-]\s*").expect("leading number regex"));

static LEADING_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+\s*").expect("leading dash regex"));

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break regex"));

/// Collapse instruction text into one paragraph.
///
/// Every line-break flavor (`\r\n`, `\r`, `\n`) becomes a split point, each
/// line is trimmed, blank lines are dropped and the rest are joined with a
/// single space. Applying it twice gives the same result as applying it once.
pub fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split raw instruction text into an ordered list of steps.
///
/// Every returned step is trimmed and non-empty. Steps produced by the
/// heuristic stages are always longer than one character; the line-break
/// fallback only kicks in when those stages produce nothing at all.
pub fn extract_steps(raw: &str) -> Vec<String> {
    let normalized = normalize(raw);

    let mut pieces = split_sentences(&normalized);
    if pieces.len() <= 1 {
        debug!("no sentence boundaries found, splitting on step labels and clauses");
        pieces = split_labels_and_clauses(&normalized);
    }

    let steps: Vec<String> = pieces.into_iter().filter_map(clean_piece).collect();
    if !steps.is_empty() {
        return steps;
    }

    let fallback = split_lines(raw);
    if !fallback.is_empty() {
        debug!(count = fallback.len(), "heuristics produced no steps, using raw lines");
    }
    fallback
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;

    for caps in SENTENCE_BOUNDARY.captures_iter(text) {
        if let Some(gap) = caps.get(1) {
            pieces.push(text[piece_start..gap.start()].trim());
            piece_start = gap.end();
        }
    }
    pieces.push(text[piece_start..].trim());
    pieces
}

fn split_labels_and_clauses(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    let mut search_from = 0;

    while let Some(m) = LABEL_OR_GAP.find_at(text, search_from) {
        let is_label = !m.as_str().trim().is_empty();
        let after_clause = text[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| matches!(c, '.' | ';' | '!' | '?'));

        if is_label || after_clause {
            pieces.push(text[piece_start..m.start()].trim());
            piece_start = m.end();
            search_from = m.end();
        } else {
            // A gap inside a clause; a label may still start one char later.
            let width = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            search_from = m.start() + width;
        }
    }
    pieces.push(text[piece_start..].trim());
    pieces
}

fn clean_piece(piece: &str) -> Option<String> {
    let without_number = LEADING_NUMBER.replace(piece, "");
    let without_bullet = LEADING_DASHES.replace(&without_number, "");
    let cleaned = without_bullet.trim();
    (cleaned.chars().count() > 1).then(|| cleaned.to_string())
}

fn split_lines(raw: &str) -> Vec<String> {
    LINE_BREAKS
        .split(raw)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_joins_lines_with_single_spaces() {
        assert_eq!(normalize("  Mix.\r\n\r\n  Bake. \rServe.\n"), "Mix. Bake. Serve.");
    }

    #[test]
    fn sentence_split_keeps_punctuation_on_left_piece() {
        assert_eq!(
            split_sentences("Boil water. Add pasta! Done?"),
            vec!["Boil water.", "Add pasta!", "Done?"]
        );
    }

    #[test]
    fn sentence_split_ignores_lowercase_continuation() {
        assert_eq!(split_sentences("Add 1 tsp. salt"), vec!["Add 1 tsp. salt"]);
    }

    #[test]
    fn label_split_prefers_label_over_clause_gap() {
        assert_eq!(
            split_labels_and_clauses("Chop. Step 2: fry"),
            vec!["Chop.", "fry"]
        );
    }

    #[test]
    fn label_split_finds_label_inside_whitespace_run() {
        assert_eq!(
            split_labels_and_clauses("chop  step 2) fry"),
            vec!["chop", "fry"]
        );
    }

    #[test]
    fn clean_piece_strips_number_then_dashes() {
        assert_eq!(clean_piece("3) -- whisk").as_deref(), Some("whisk"));
        assert_eq!(clean_piece("12 : stir").as_deref(), Some("stir"));
        assert_eq!(clean_piece("."), None);
        assert_eq!(clean_piece("1."), None);
    }

    #[test]
    fn split_lines_drops_blank_lines() {
        assert_eq!(split_lines("a\n\n  \r\nb"), vec!["a", "b"]);
    }
}
