use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered sequence of annotated texts, as stored in the corpus JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    pub texts: Vec<Text>,
}

impl Corpus {
    pub fn new(texts: Vec<Text>) -> Self {
        Self { texts }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.texts.iter().map(|t| t.tokens.len()).sum()
    }
}

/// Text ids show up both as numbers and as strings in corpus files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextId {
    Number(u64),
    Name(String),
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextId::Number(n) => write!(f, "{}", n),
            TextId::Name(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub id: TextId,
    pub title: String,
    pub tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Text {
    /// Precomputed display string, `sentence` taking priority over `text`.
    pub fn precomputed(&self) -> Option<&str> {
        self.sentence.as_deref().or(self.text.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub form: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    #[serde(default)]
    pub ana: String,
}

impl Token {
    pub fn is_punct(&self) -> bool {
        self.pos == PartOfSpeech::Punct
    }
}

/// Part-of-speech tag. Tags outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Gerund,
    Punct,
    Other(String),
}

impl PartOfSpeech {
    pub fn as_tag(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Gerund => "gerund",
            PartOfSpeech::Punct => "punct",
            PartOfSpeech::Other(tag) => tag.as_str(),
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "pronoun" => PartOfSpeech::Pronoun,
            "gerund" => PartOfSpeech::Gerund,
            "punct" => PartOfSpeech::Punct,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        PartOfSpeech::from_tag(&tag)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.as_tag().to_string()
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
