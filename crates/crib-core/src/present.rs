//! Display-ready output: list labels and highlighted document text.
//!
//! Nothing here touches a terminal. Display layers take [`ListEntry`] rows and
//! rendered strings and draw them however they like.

use crate::outline::line_segments;
use crate::search::SearchOutcome;
use crate::status::Status;
use crate::types::{DocumentSet, ListEntry, SearchResultSet};
use memchr::memmem;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Placeholder row shown when nothing is listed.
pub const NO_RESULTS_LABEL: &str = "No cheatsheets found";

/// Default emphasis marker (Markdown bold).
pub const DEFAULT_EMPHASIS: &str = "**";

/// Build list rows for `documents`, in name order with 1-based ranks.
///
/// Documents that have an entry in `sections` get a parenthesised summary of
/// their matched headings.
pub fn render_list(documents: &DocumentSet, sections: &SearchResultSet) -> Vec<ListEntry> {
    documents
        .iter()
        .enumerate()
        .map(|(idx, (name, path))| {
            let rank = idx + 1;
            let matched = sections.get(name).unwrap_or_default();
            ListEntry {
                rank,
                name: name.to_string(),
                path: path.to_path_buf(),
                sections: matched.to_vec(),
                label: list_label(rank, name, matched),
            }
        })
        .collect()
}

/// [`render_list`] over a search outcome.
pub fn render_outcome(outcome: &SearchOutcome) -> Vec<ListEntry> {
    render_list(&outcome.documents, &outcome.sections)
}

/// Label text for every row, or the single placeholder when there are none.
pub fn display_lines(entries: &[ListEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NO_RESULTS_LABEL.to_string()];
    }
    entries.iter().map(|entry| entry.label.clone()).collect()
}

/// `" 1 - git (Branching, Remotes)"`: rank padded to two columns, lowercased
/// name, and the section summary when there is one.
pub fn list_label(rank: usize, name: &str, sections: &[String]) -> String {
    let base = format!("{rank:>2} - {}", name.to_lowercase());
    match section_summary(sections) {
        Some(summary) => format!("{base} ({summary})"),
        None => base,
    }
}

/// Summarise matched headings: all of them up to three, otherwise the first
/// two and a `+N` count of the rest.
///
/// ```rust
/// use crib_core::present::section_summary;
///
/// let many: Vec<String> = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(section_summary(&many).as_deref(), Some("A, B, +3"));
/// assert_eq!(section_summary(&[]), None);
/// ```
pub fn section_summary(sections: &[String]) -> Option<String> {
    match sections {
        [] => None,
        [only] => Some(only.clone()),
        few if few.len() <= 3 => Some(few.join(", ")),
        [first, second, rest @ ..] => Some(format!("{first}, {second}, +{}", rest.len())),
    }
}

/// Wrap every case-insensitive occurrence of `query` in `**`.
///
/// ```rust
/// use crib_core::highlight;
///
/// assert_eq!(highlight("Git clone, git CLONE", "clone"), "Git **clone**, git **CLONE**");
/// assert_eq!(highlight("aaaa", "aa"), "**aa****aa**");
/// assert_eq!(highlight("unchanged", ""), "unchanged");
/// ```
pub fn highlight(content: &str, query: &str) -> String {
    highlight_with(content, query, DEFAULT_EMPHASIS)
}

/// [`highlight`] with a custom marker.
///
/// Occurrences are found on a case-folded copy and the original text is
/// sliced at the corresponding offsets, so the emphasised text keeps its
/// original casing. Occurrences never overlap: after one match, scanning
/// resumes at its end.
pub fn highlight_with(content: &str, query: &str, marker: &str) -> String {
    let spans = occurrences(content, query);
    wrap_spans(content, &spans, |text| format!("{marker}{text}{marker}"))
}

/// Replace each byte span of `content` with `wrap(span_text)`.
///
/// `spans` must be sorted, non-overlapping and on character boundaries, as
/// returned by [`occurrences`]. Spans that are not are left unwrapped.
pub fn wrap_spans(
    content: &str,
    spans: &[(usize, usize)],
    mut wrap: impl FnMut(&str) -> String,
) -> String {
    let mut out = String::with_capacity(content.len() + spans.len() * 8);
    let mut cursor = 0;
    for &(start, end) in spans {
        let (Some(before), Some(inner)) = (content.get(cursor..start), content.get(start..end))
        else {
            continue;
        };
        out.push_str(before);
        out.push_str(&wrap(inner));
        cursor = end;
    }
    out.push_str(content.get(cursor..).unwrap_or_default());
    out
}

/// Byte spans in `content` of non-overlapping, case-insensitive occurrences
/// of `query`.
pub fn occurrences(content: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let (folded, origin) = fold_case(content);

    // Spans cover whole original characters, including ones that lowercase
    // to several (`İ`).
    let char_end = |offset: usize| {
        offset
            + content[offset..]
                .chars()
                .next()
                .map_or(0, char::len_utf8)
    };

    let mut spans: Vec<(usize, usize)> = Vec::new();
    for found in memmem::find_iter(folded.as_bytes(), needle.as_bytes()) {
        let (Some(&start), Some(&last)) =
            (origin.get(found), origin.get(found + needle.len() - 1))
        else {
            continue;
        };
        let end = char_end(last);
        if spans.last().is_some_and(|&(_, prev_end)| start < prev_end) {
            continue;
        }
        spans.push((start, end));
    }
    spans
}

/// Lowercase `text`, recording for each byte of the result the byte offset of
/// the original character it came from.
fn fold_case(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            let before = folded.len();
            folded.push(lower);
            origin.extend(std::iter::repeat_n(offset, folded.len() - before));
        }
    }
    (folded, origin)
}

/// Prefix each line with a right-aligned line number.
///
/// Lines end with two spaces so Markdown renderers keep the breaks.
pub fn number_lines(content: &str) -> String {
    line_segments(content)
        .enumerate()
        .map(|(idx, line)| format!("{:>4}: {line}  ", idx + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A document prepared for full display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Markdown body, highlighted when a query is active. Read failures are
    /// rendered as a Markdown error heading instead.
    pub body: String,
    /// The body before highlighting.
    pub source: String,
    /// Byte spans of `source` that `body` wraps in the marker.
    pub highlights: Vec<(usize, usize)>,
    pub status: Status,
}

/// Read a document and highlight `query` in it.
///
/// Surrounding whitespace in `query` is ignored; a blank query leaves the
/// text untouched.
pub fn render_document(path: &Path, query: &str, marker: &str) -> RenderedDocument {
    let query = query.trim();
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (source, highlights) = match fs::read_to_string(path) {
        Ok(content) => {
            let spans = occurrences(&content, query);
            (content, spans)
        },
        Err(err) if err.kind() == ErrorKind::NotFound => (
            format!("## Error: File '{}' not found", path.display()),
            Vec::new(),
        ),
        Err(err) => (format!("## Error reading file: {err}"), Vec::new()),
    };
    let body = wrap_spans(&source, &highlights, |text| format!("{marker}{text}{marker}"));

    let status = Status::Viewing {
        stem,
        query: (!query.is_empty()).then(|| query.to_string()),
    };

    RenderedDocument {
        body,
        source,
        highlights,
        status,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn summary_by_count() {
        assert_eq!(section_summary(&strings(&["A"])).as_deref(), Some("A"));
        assert_eq!(section_summary(&strings(&["A", "B"])).as_deref(), Some("A, B"));
        assert_eq!(
            section_summary(&strings(&["A", "B", "C"])).as_deref(),
            Some("A, B, C")
        );
        assert_eq!(
            section_summary(&strings(&["A", "B", "C", "D"])).as_deref(),
            Some("A, B, +2")
        );
    }

    #[test]
    fn label_with_five_sections() {
        let sections = strings(&["Setup", "Remotes", "Stash", "Tags", "Hooks"]);
        assert_eq!(
            list_label(3, "Git Basics", &sections),
            " 3 - git basics (Setup, Remotes, +3)"
        );
    }

    #[test]
    fn label_without_sections() {
        assert_eq!(list_label(12, "Docker", &[]), "12 - docker");
    }

    #[test]
    fn render_list_ranks_by_name() {
        let mut docs = DocumentSet::new();
        docs.insert("Vim", "/s/vim.md");
        docs.insert("Git", "/s/git.md");
        let mut sections = SearchResultSet::new();
        sections.insert("Vim", strings(&["Motions"]));

        let entries = render_list(&docs, &sections);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].name, "Git");
        assert_eq!(entries[0].label, " 1 - git");
        assert!(entries[0].sections.is_empty());
        assert_eq!(entries[1].label, " 2 - vim (Motions)");
        assert_eq!(entries[1].path, PathBuf::from("/s/vim.md"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(display_lines(&[]), vec![NO_RESULTS_LABEL.to_string()]);
    }

    #[test]
    fn highlight_keeps_original_case() {
        assert_eq!(
            highlight("Checkout BRANCH and branch", "Branch"),
            "Checkout **BRANCH** and **branch**"
        );
    }

    #[test]
    fn highlight_does_not_overlap() {
        assert_eq!(highlight("aaaa", "aa"), "**aa****aa**");
        assert_eq!(highlight("aaa", "aa"), "**aa**a");
        assert_eq!(occurrences("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn highlight_empty_query_is_identity() {
        assert_eq!(highlight("# Title\nbody", ""), "# Title\nbody");
    }

    #[test]
    fn highlight_handles_multibyte_text() {
        assert_eq!(highlight("Größe GRÖSSE", "größe"), "**Größe** GRÖSSE");
        assert_eq!(highlight("naïve NAÏVE", "naïve"), "**naïve** **NAÏVE**");
    }

    #[test]
    fn highlight_covers_characters_that_expand_when_lowercased() {
        assert_eq!(highlight("İstanbul", "i"), "**İ**stanbul");
        assert_eq!(occurrences("xİx", "i"), vec![(1, 3)]);
        assert_eq!(highlight("İİ", "i"), "**İ****İ**");
    }

    #[test]
    fn highlight_leaves_existing_markers_alone() {
        let content = "def f(**kwargs): branch";
        assert_eq!(highlight(content, "branch"), "def f(**kwargs): **branch**");
        assert_eq!(occurrences(content, "branch"), vec![(17, 23)]);
    }

    #[test]
    fn wrap_spans_uses_callback() {
        let wrapped = wrap_spans("git clone", &[(4, 9)], |text| text.to_uppercase());
        assert_eq!(wrapped, "git CLONE");
        assert_eq!(wrap_spans("plain", &[], |_| String::new()), "plain");
    }

    #[test]
    fn highlight_with_custom_marker() {
        assert_eq!(highlight_with("git clone", "clone", "=="), "git ==clone==");
    }

    #[test]
    fn numbers_every_line() {
        assert_eq!(number_lines("a\nb"), "   1: a  \n   2: b  ");
        assert_eq!(number_lines("a\n"), "   1: a  \n   2:   ");
        assert_eq!(number_lines("a\rb\r\nc"), "   1: a  \n   2: b  \n   3: c  ");
    }

    #[test]
    fn renders_document_with_status() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("git.md");
        fs::write(&path, "git clone").unwrap();

        let rendered = render_document(&path, "  clone ", DEFAULT_EMPHASIS);

        assert_eq!(rendered.body, "git **clone**");
        assert_eq!(rendered.source, "git clone");
        assert_eq!(rendered.highlights, vec![(4, 9)]);
        assert_eq!(
            rendered.status,
            Status::Viewing {
                stem: "git".into(),
                query: Some("clone".into())
            }
        );
    }

    #[test]
    fn renders_missing_document_as_error_heading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.md");

        let rendered = render_document(&path, "", DEFAULT_EMPHASIS);

        assert!(rendered.body.starts_with("## Error: File '"));
        assert!(rendered.body.ends_with("not found"));
        assert_eq!(rendered.body, rendered.source);
        assert!(rendered.highlights.is_empty());
        assert_eq!(
            rendered.status,
            Status::Viewing {
                stem: "gone".into(),
                query: None
            }
        );
    }

    proptest! {
        #[test]
        fn highlight_removing_markers_restores_content(
            content in "[a-cA-C \n]{0,40}",
            query in "[a-cA-C]{1,3}",
        ) {
            let highlighted = highlight_with(&content, &query, "|");
            prop_assert_eq!(highlighted.replace('|', ""), content.clone());

            let spans = occurrences(&content, &query);
            for pair in spans.windows(2) {
                prop_assert!(pair[0].1 <= pair[1].0);
            }
            for (start, end) in spans {
                prop_assert_eq!(content[start..end].to_lowercase(), query.to_lowercase());
            }
        }
    }
}
