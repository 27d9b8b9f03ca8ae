use corpus_search::core::highlight::{find_occurrences, highlight, HtmlMarkup};

const OPEN: &str = "<span class=\"highlight\">";
const CLOSE: &str = "</span>";

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Strips the highlight markers and checks that nothing outside them could
/// open a tag, then returns the unescaped text.
fn strip_markers(html: &str) -> String {
    let without = html.replace(OPEN, "").replace(CLOSE, "");
    assert!(
        !without.contains('<') && !without.contains('>') && !without.contains('"'),
        "unescaped markup left in {html:?}"
    );
    unescape(&without)
}

#[test]
fn test_escaping_round_trip() {
    let cases: &[(&str, &[&str])] = &[
        ("<script>alert('x')</script> x", &["x"]),
        ("a & b && c", &["b", "&"]),
        ("\"quoted\" and 'single'", &["quoted", "single"]),
        ("&lt; already escaped &lt;", &["lt", "already"]),
        ("<span class=\"highlight\">fake</span>", &["span", "class", "highlight", "fake"]),
        ("Тест <b>тест</b> ТЕСТ", &["тест", "<b>"]),
    ];

    for &(sentence, forms) in cases {
        let html = highlight(sentence, forms, &HtmlMarkup::default());
        assert_eq!(strip_markers(&html), sentence, "round trip failed for {sentence:?}");
    }
}

#[test]
fn test_all_bounded_occurrences_and_no_substrings() {
    let sentence = "Вода, вода! Водами водой вода-вода водаа 1вода";
    let html = highlight(sentence, &["вода"], &HtmlMarkup::default());

    assert_eq!(html.matches(OPEN).count(), 5);
    assert!(html.contains("Водами"));
    assert!(html.contains("водой"));
    assert!(html.contains("водаа"));
    assert!(html.contains(&format!("1{OPEN}вода{CLOSE}")));
    assert!(html.contains(&format!("{OPEN}вода{CLOSE}-{OPEN}вода{CLOSE}")));
}

#[test]
fn test_byte_ranges_align_with_multibyte_text() {
    let sentence = "Ёж и ёжик, ЁЖ.";
    let ranges = find_occurrences(sentence, "ёж");

    let found: Vec<&str> = ranges.iter().map(|r| &sentence[r.clone()]).collect();
    assert_eq!(found, vec!["Ёж", "ЁЖ"]);
}

#[test]
fn test_accented_letters_count_as_letters() {
    let html = highlight("café cafés caf", &["caf"], &HtmlMarkup::default());
    assert_eq!(html, format!("café cafés {OPEN}caf{CLOSE}"));
}
