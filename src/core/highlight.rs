//! Word-boundary highlighting of token forms inside a display sentence.
//!
//! Occurrences are located on the raw sentence, merged, and the output is
//! written in one left-to-right pass. Each raw segment goes through
//! [`Markup::escape`] before it is written, and markers are never searched
//! again, so several forms can be highlighted in the same sentence safely.

use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Output dialect: highlight markers plus the escaping that goes with them.
pub trait Markup {
    fn open(&self) -> &str;
    fn close(&self) -> &str;
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

#[derive(Debug, Clone)]
pub struct HtmlMarkup {
    open: String,
}

impl HtmlMarkup {
    pub fn new(highlight_class: &str) -> Self {
        Self {
            open: format!("<span class=\"{}\">", escape_html(highlight_class)),
        }
    }
}

impl Default for HtmlMarkup {
    fn default() -> Self {
        Self::new("highlight")
    }
}

impl Markup for HtmlMarkup {
    fn open(&self) -> &str {
        &self.open
    }

    fn close(&self) -> &str {
        "</span>"
    }

    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        escape_html(raw)
    }
}

/// Unescaped text output; corpus text is written as is between the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainMarkup {
    pub open: String,
    pub close: String,
}

impl Default for PlainMarkup {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
        }
    }
}

impl Markup for PlainMarkup {
    fn open(&self) -> &str {
        &self.open
    }

    fn close(&self) -> &str {
        &self.close
    }

    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }
}

pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// A grapheme is part of a word when any of its characters is a letter, so a
/// base letter followed by combining marks counts as one letter.
fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme.chars().any(char::is_alphabetic)
}

/// Byte offsets where a grapheme starts, plus the end of the string.
fn grapheme_boundaries(haystack: &str) -> Vec<usize> {
    haystack
        .grapheme_indices(true)
        .map(|(i, _)| i)
        .chain(std::iter::once(haystack.len()))
        .collect()
}

fn form_pattern(form: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(form))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::warn!("Cannot build highlight pattern for '{}': {}", form, e))
        .ok()
}

/// Byte ranges of every case-insensitive occurrence of `form` in `haystack`
/// that starts and ends on grapheme boundaries and whose neighbouring
/// graphemes are not letters.
pub fn find_occurrences(haystack: &str, form: &str) -> Vec<Range<usize>> {
    if form.is_empty() {
        return Vec::new();
    }
    let Some(pattern) = form_pattern(form) else {
        return Vec::new();
    };

    let boundaries = grapheme_boundaries(haystack);
    let on_boundary = |offset: usize| boundaries.binary_search(&offset).is_ok();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        let Some(found) = pattern.find_at(haystack, start) else {
            break;
        };

        let before = haystack[..found.start()].graphemes(true).next_back();
        let after = haystack[found.end()..].graphemes(true).next();
        let bounded = on_boundary(found.start())
            && on_boundary(found.end())
            && !before.is_some_and(is_word_grapheme)
            && !after.is_some_and(is_word_grapheme);

        if bounded && !found.range().is_empty() {
            ranges.push(found.range());
            start = found.end();
        } else {
            // Retry one character later so overlapping candidates are not skipped.
            match haystack[found.start()..].chars().next() {
                Some(c) => start = found.start() + c.len_utf8(),
                None => break,
            }
        }
    }
    ranges
}

/// Sorts and merges overlapping or touching ranges.
fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| (r.start, std::cmp::Reverse(r.end)));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start < last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Renders `sentence` through `markup`, wrapping every bounded occurrence of
/// any of `forms`.
pub fn highlight<M, S>(sentence: &str, forms: &[S], markup: &M) -> String
where
    M: Markup + ?Sized,
    S: AsRef<str>,
{
    let ranges = merge_ranges(
        forms
            .iter()
            .flat_map(|form| find_occurrences(sentence, form.as_ref()))
            .collect(),
    );
    render_ranges(sentence, &ranges, markup)
}

/// Writes `sentence` with the given sorted, disjoint byte ranges highlighted.
pub fn render_ranges<M: Markup + ?Sized>(
    sentence: &str,
    ranges: &[Range<usize>],
    markup: &M,
) -> String {
    let mut out = String::with_capacity(sentence.len() + ranges.len() * 32);
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&markup.escape(&sentence[cursor..range.start]));
        out.push_str(markup.open());
        out.push_str(&markup.escape(&sentence[range.clone()]));
        out.push_str(markup.close());
        cursor = range.end;
    }
    out.push_str(&markup.escape(&sentence[cursor..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> PlainMarkup {
        PlainMarkup::default()
    }

    #[test]
    fn test_highlights_every_bounded_occurrence() {
        let out = highlight("Дом, дом и домик. ДОМ!", &["дом"], &plain());
        assert_eq!(out, "[Дом], [дом] и домик. [ДОМ]!");
    }

    #[test]
    fn test_does_not_highlight_inside_longer_words() {
        let out = highlight("cat catalog concat", &["cat"], &plain());
        assert_eq!(out, "[cat] catalog concat");
    }

    #[test]
    fn test_digits_and_punctuation_are_boundaries() {
        let out = highlight("(кот)2кот_кот", &["кот"], &plain());
        assert_eq!(out, "([кот])2[кот]_[кот]");
    }

    #[test]
    fn test_combining_marks_belong_to_the_word() {
        // decomposed й and ё: the form must not end before the diacritic
        let decomposed_short_i = "мои\u{0306} дом";
        assert_eq!(highlight(decomposed_short_i, &["мои"], &plain()), decomposed_short_i);

        let decomposed_yo = "ещ\u{0435}\u{0308} раз";
        assert_eq!(highlight(decomposed_yo, &["еще"], &plain()), decomposed_yo);

        // the full decomposed word is still found
        assert_eq!(
            highlight(decomposed_short_i, &["мои\u{0306}"], &plain()),
            "[мои\u{0306}] дом"
        );
        // a lone mark before the match still glues it to the previous letter
        assert_eq!(highlight("и\u{0306}дом дом", &["дом"], &plain()), "и\u{0306}дом [дом]");
    }

    #[test]
    fn test_overlapping_candidate_after_rejection() {
        // first candidate is glued to a letter, the later one is free
        assert_eq!(find_occurrences("xab ab", "ab"), vec![4..6]);
        assert_eq!(find_occurrences("--a--a", "-a-"), vec![1..4]);
    }

    #[test]
    fn test_multiple_forms_do_not_corrupt_markers() {
        let out = highlight("span class highlight", &["span", "class", "highlight"], &HtmlMarkup::default());
        assert_eq!(
            out,
            "<span class=\"highlight\">span</span> <span class=\"highlight\">class</span> <span class=\"highlight\">highlight</span>"
        );
    }

    #[test]
    fn test_overlapping_forms_are_merged() {
        let out = highlight("New York city", &["New York", "York"], &plain());
        assert_eq!(out, "[New York] city");
    }

    #[test]
    fn test_empty_form_changes_nothing() {
        assert_eq!(highlight("тихо", &[""], &plain()), "тихо");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let out = highlight("a.b axb", &["a.b"], &plain());
        assert_eq!(out, "[a.b] axb");
    }

    #[test]
    fn test_html_output_is_escaped() {
        let out = highlight(
            "<b>x</b> & \"x\"",
            &["x"],
            &HtmlMarkup::default(),
        );
        assert_eq!(
            out,
            "&lt;b&gt;<span class=\"highlight\">x</span>&lt;/b&gt; &amp; &quot;<span class=\"highlight\">x</span>&quot;"
        );
    }

    #[test]
    fn test_markup_in_form_is_escaped() {
        let out = highlight("a <i> b", &["<i>"], &HtmlMarkup::default());
        assert_eq!(out, "a <span class=\"highlight\">&lt;i&gt;</span> b");
    }

    #[test]
    fn test_highlight_class_is_escaped() {
        let markup = HtmlMarkup::new("hl\"><script>");
        assert_eq!(markup.open(), "<span class=\"hl&quot;&gt;&lt;script&gt;\">");
    }
}
