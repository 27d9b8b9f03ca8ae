use crate::domain::model::{Corpus, PartOfSpeech, Text, Token};
use std::collections::BTreeSet;

/// Allowed parts of speech. An empty filter lets every token through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosFilter {
    allowed: BTreeSet<PartOfSpeech>,
}

impl PosFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn only<I: IntoIterator<Item = PartOfSpeech>>(parts: I) -> Self {
        Self {
            allowed: parts.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn allows(&self, pos: &PartOfSpeech) -> bool {
        self.allowed.is_empty() || self.allowed.contains(pos)
    }

    pub fn contains(&self, pos: &PartOfSpeech) -> bool {
        self.allowed.contains(pos)
    }

    /// Flips one part of speech in or out, like a checkbox.
    pub fn toggle(&mut self, pos: PartOfSpeech) -> bool {
        if self.allowed.remove(&pos) {
            false
        } else {
            self.allowed.insert(pos);
            true
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    pub filter: PosFilter,
}

impl SearchQuery {
    /// Trims and case-folds the raw input.
    pub fn new(raw: &str, filter: PosFilter) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
            filter,
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, token: &Token) -> bool {
        token.lemma.to_lowercase().contains(&self.needle) && self.filter.allows(&token.pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'c> {
    pub text: &'c Text,
    pub token_index: usize,
    pub token: &'c Token,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'c> {
    /// Nothing typed yet.
    Prompt,
    NoResults,
    Found(Vec<Match<'c>>),
}

impl<'c> SearchOutcome<'c> {
    pub fn matches(&self) -> &[Match<'c>] {
        match self {
            SearchOutcome::Found(matches) => matches,
            _ => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.matches().len()
    }
}

/// Linear scan over every token of every text, in corpus order.
pub fn find_matches<'c>(corpus: &'c Corpus, query: &SearchQuery) -> Vec<Match<'c>> {
    corpus
        .texts
        .iter()
        .flat_map(|text| {
            text.tokens
                .iter()
                .enumerate()
                .filter(|(_, token)| query.matches(token))
                .map(move |(token_index, token)| Match {
                    text,
                    token_index,
                    token,
                })
        })
        .collect()
}

pub fn search<'c>(corpus: &'c Corpus, query: &SearchQuery) -> SearchOutcome<'c> {
    if query.is_empty() {
        return SearchOutcome::Prompt;
    }

    let matches = find_matches(corpus, query);
    tracing::debug!(
        "Query '{}' matched {} tokens across {} texts",
        query.needle(),
        matches.len(),
        corpus.len()
    );

    if matches.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Found(matches)
    }
}
