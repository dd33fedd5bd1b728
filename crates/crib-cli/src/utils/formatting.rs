//! Formatting utilities

use colored::Colorize;
use crib_core::{ListEntry, wrap_spans};
use crib_core::present::section_summary;

/// ANSI-only color cycling functions for cheatsheet names (exclude red)
/// Order: blue → cyan → green → yellow → magenta
pub const NAME_COLORS: &[fn(&str) -> colored::ColoredString] = &[
    |s| s.blue(),
    |s| s.cyan(),
    |s| s.green(),
    |s| s.yellow(),
    |s| s.magenta(),
];

/// Get a color for a cheatsheet name based on its row index
pub fn get_name_color(name: &str, index: usize) -> colored::ColoredString {
    let color_fn = NAME_COLORS[index % NAME_COLORS.len()];
    color_fn(name)
}

/// A list row with colored parts. With colors off it is identical to
/// [`ListEntry::label`].
pub fn colored_label(entry: &ListEntry, index: usize) -> String {
    let rank = format!("{:>2}", entry.rank);
    let name = get_name_color(&entry.name.to_lowercase(), index);
    match section_summary(&entry.sections) {
        Some(summary) => format!(
            "{} - {name} {}",
            rank.bright_black(),
            format!("({summary})").bright_black()
        ),
        None => format!("{} - {name}", rank.bright_black()),
    }
}

/// Render highlighted spans of `source` for the terminal.
///
/// With colors on, each span is bold yellow and `marker` is not used. With
/// colors off, spans are wrapped in `marker` so the output stays valid
/// Markdown. Existing `**` in the text is never treated as a highlight.
pub fn emphasize(source: &str, highlights: &[(usize, usize)], marker: &str) -> String {
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        wrap_spans(source, highlights, |text| text.bold().yellow().to_string())
    } else {
        wrap_spans(source, highlights, |text| format!("{marker}{text}{marker}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(rank: usize, name: &str, sections: &[&str]) -> ListEntry {
        let sections: Vec<String> = sections.iter().map(|s| (*s).to_string()).collect();
        ListEntry {
            rank,
            name: name.to_string(),
            path: PathBuf::from(format!("/sheets/{name}.md")),
            label: crib_core::present::list_label(rank, name, &sections),
            sections,
        }
    }

    #[test]
    fn colored_label_matches_plain_label_without_colors() {
        colored::control::set_override(false);

        for e in [
            entry(1, "Git", &[]),
            entry(2, "Vim", &["Motions"]),
            entry(12, "Docker Compose", &["Up", "Down", "Logs", "Exec"]),
        ] {
            assert_eq!(colored_label(&e, e.rank - 1), e.label);
        }
    }

    #[test]
    fn emphasize_uses_marker_without_colors() {
        colored::control::set_override(false);
        assert_eq!(emphasize("git clone", &[(4, 9)], "**"), "git **clone**");
    }

    #[test]
    fn emphasize_only_wraps_highlighted_spans() {
        colored::control::set_override(false);
        let source = "def f(**kwargs): branch";
        assert_eq!(
            emphasize(source, &[(17, 23)], "**"),
            "def f(**kwargs): **branch**"
        );
        assert_eq!(emphasize(source, &[], "**"), source);
    }
}
