use crate::domain::model::{Text, Token};

/// Joins token forms with single spaces, without a space before punctuation.
pub fn reconstruct(tokens: &[Token]) -> String {
    let mut sentence = String::new();
    for token in tokens {
        if !sentence.is_empty() && !token.is_punct() {
            sentence.push(' ');
        }
        sentence.push_str(&token.form);
    }
    sentence
}

/// The string a text's matches are highlighted in.
///
/// Precomputed `sentence`/`text` strings are used as they are. Otherwise the
/// sentence is rebuilt from tokens; with a context `window` only the tokens
/// from `window` before the first match to `window` after the last one are kept.
pub fn display_sentence(text: &Text, matched: &[usize], window: Option<usize>) -> String {
    if let Some(precomputed) = text.precomputed() {
        return precomputed.to_string();
    }

    match (window, matched.iter().min(), matched.iter().max()) {
        (Some(window), Some(&first), Some(&last)) => {
            let start = first.saturating_sub(window);
            let end = last.saturating_add(window).saturating_add(1).min(text.tokens.len());
            reconstruct(&text.tokens[start.min(end)..end])
        }
        _ => reconstruct(&text.tokens),
    }
}
