// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Marked-section handling for the target document
//!
//! A [`Document`] keeps the file's lines byte-for-byte, line terminators
//! included, so everything up to and including the marker line can be
//! written back unchanged.

/// Marker line the index is written after
pub const DEFAULT_MARKER: &str = "<!-- index starts -->";

/// What happens to the lines already below the marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionMode {
    /// Carry existing list items forward and append new ones after them
    #[default]
    Append,
    /// Drop everything below the marker and regenerate the list
    Rebuild,
}

/// A text document split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` into lines, keeping each line's terminator
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// The document's lines, terminators included
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full document text
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// Index of the first line containing `marker`
    #[must_use]
    pub fn find_marker(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(marker))
    }

    /// Lines `[0, marker]`, concatenated verbatim
    #[must_use]
    pub fn prefix(&self, marker_index: usize) -> String {
        self.lines[..=marker_index].concat()
    }

    /// List items currently below the marker, terminators included
    #[must_use]
    pub fn existing_items(&self, marker_index: usize) -> Vec<&str> {
        self.lines[marker_index + 1..]
            .iter()
            .map(String::as_str)
            .filter(|line| line.trim_start().starts_with("* ["))
            .collect()
    }

    /// Line terminator of the marker line, used for appended items
    #[must_use]
    pub fn line_ending(&self, marker_index: usize) -> &'static str {
        if self.lines[marker_index].ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Text new entries are deduplicated against under `mode`
    ///
    /// Only text that survives [`Document::rewrite`] counts: the prefix,
    /// plus the carried-forward items in append mode.
    #[must_use]
    pub fn known_text(&self, marker_index: usize, mode: SectionMode) -> String {
        let mut known = self.prefix(marker_index);
        if mode == SectionMode::Append {
            known.extend(self.existing_items(marker_index));
        }
        known
    }

    /// Rewrite the section below the marker
    ///
    /// Returns the full new document text: the prefix unchanged, followed
    /// by the carried-forward items byte-for-byte (append mode only) and
    /// then `new_items`, joined with the marker line's terminator. Nothing
    /// follows the last new item.
    #[must_use]
    pub fn rewrite(&self, marker_index: usize, mode: SectionMode, new_items: &[String]) -> String {
        let eol = self.line_ending(marker_index);
        let mut out = self.prefix(marker_index);

        if mode == SectionMode::Append {
            for item in self.existing_items(marker_index) {
                if !out.ends_with('\n') {
                    out.push_str(eol);
                }
                out.push_str(item);
            }
        }
        if !new_items.is_empty() {
            if !out.ends_with('\n') {
                out.push_str(eol);
            }
            out.push_str(&new_items.join(eol));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    const README: &str = "# Project\n\nIntro text.\n\n<!-- index starts -->\n";

    fn items(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_parse_keeps_bytes() {
        let text = "a\r\nb\n\nc";
        let doc = Document::parse(text);
        assert_eq!(doc.lines().len(), 4);
        assert_eq!(doc.text(), text);
    }

    #[test]
    fn test_find_marker() {
        let doc = Document::parse(README);
        assert_eq!(doc.find_marker(DEFAULT_MARKER), Some(4));
    }

    #[test]
    fn test_find_marker_substring_match() {
        let doc = Document::parse("intro\n  <!-- index starts --> (generated)\n");
        assert_eq!(doc.find_marker(DEFAULT_MARKER), Some(1));
    }

    #[test]
    fn test_find_marker_first_wins() {
        let doc = Document::parse("<!-- index starts -->\nx\n<!-- index starts -->\n");
        assert_eq!(doc.find_marker(DEFAULT_MARKER), Some(0));
    }

    #[test]
    fn test_find_marker_missing() {
        let doc = Document::parse("# Project\n\nNo marker here.\n");
        assert_eq!(doc.find_marker(DEFAULT_MARKER), None);
    }

    #[test]
    fn test_rewrite_appends_block() {
        let doc = Document::parse(README);
        let out = doc.rewrite(4, SectionMode::Append, &items(&["* [Fix bug](abc123)"]));
        assert_eq!(out, format!("{README}* [Fix bug](abc123)"));
    }

    #[test]
    fn test_rewrite_carries_existing_items() {
        let doc = Document::parse(
            "<!-- index starts -->\n* [Old](aaa)\nstray text\n* [Older](bbb)\n",
        );
        let out = doc.rewrite(0, SectionMode::Append, &items(&["* [New](ccc)"]));
        assert_eq!(
            out,
            "<!-- index starts -->\n* [Old](aaa)\n* [Older](bbb)\n* [New](ccc)"
        );
    }

    #[test]
    fn test_rewrite_rebuild_drops_existing_items() {
        let doc = Document::parse("<!-- index starts -->\n* [Old](aaa)\n");
        let out = doc.rewrite(0, SectionMode::Rebuild, &items(&["* [New](ccc)"]));
        assert_eq!(out, "<!-- index starts -->\n* [New](ccc)");
    }

    #[test]
    fn test_rewrite_marker_without_newline() {
        let doc = Document::parse("intro\n<!-- index starts -->");
        let out = doc.rewrite(1, SectionMode::Append, &items(&["* [New](ccc)"]));
        assert_eq!(out, "intro\n<!-- index starts -->\n* [New](ccc)");
    }

    #[test]
    fn test_rewrite_empty_block_keeps_prefix() {
        let doc = Document::parse("intro\n<!-- index starts -->\ntrailing\n");
        let out = doc.rewrite(1, SectionMode::Append, &[]);
        assert_eq!(out, "intro\n<!-- index starts -->\n");
    }

    #[test]
    fn test_rewrite_is_stable_on_own_output() {
        let doc = Document::parse(README);
        let first = doc.rewrite(4, SectionMode::Append, &items(&["* [A](a1)", "* [B](b2)"]));
        let again = Document::parse(&first);
        let second = again.rewrite(4, SectionMode::Append, &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_known_text_by_mode() {
        let doc = Document::parse("<!-- index starts -->\n* [Old](aaa)\n");
        assert!(doc.known_text(0, SectionMode::Append).contains("aaa"));
        assert!(!doc.known_text(0, SectionMode::Rebuild).contains("aaa"));
    }

    #[test]
    fn test_known_text_skips_dropped_lines() {
        let doc = Document::parse("see aaa\n<!-- index starts -->\n* [Old](bbb)\nsee ccc\n");
        let known = doc.known_text(1, SectionMode::Append);
        assert!(known.contains("aaa"));
        assert!(known.contains("bbb"));
        assert!(!known.contains("ccc"));
    }

    #[test]
    fn test_rewrite_keeps_crlf_items_untouched() {
        let text = "intro\r\n<!-- index starts -->\r\n* [Old](aaa)\r\n* [Older](bbb)\r\n";
        let doc = Document::parse(text);
        assert_eq!(doc.rewrite(1, SectionMode::Append, &[]), text);
    }

    #[test]
    fn test_rewrite_appends_with_crlf() {
        let doc = Document::parse("<!-- index starts -->\r\n* [Old](aaa)");
        let out = doc.rewrite(0, SectionMode::Append, &items(&["* [A](a1)", "* [B](b2)"]));
        assert_eq!(
            out,
            "<!-- index starts -->\r\n* [Old](aaa)\r\n* [A](a1)\r\n* [B](b2)"
        );
    }
}
