use crate::domain::model::PartOfSpeech;
use serde::{Deserialize, Serialize};

/// Language of POS labels and UI strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn pos_label<'a>(&self, pos: &'a PartOfSpeech) -> &'a str {
        match self {
            Language::En => match pos {
                PartOfSpeech::Noun => "noun",
                PartOfSpeech::Verb => "verb",
                PartOfSpeech::Adjective => "adjective",
                PartOfSpeech::Adverb => "adverb",
                PartOfSpeech::Preposition => "preposition",
                PartOfSpeech::Conjunction => "conjunction",
                PartOfSpeech::Pronoun => "pronoun",
                PartOfSpeech::Gerund => "gerund",
                PartOfSpeech::Punct => "punctuation",
                PartOfSpeech::Other(tag) => tag.as_str(),
            },
            Language::Ru => match pos {
                PartOfSpeech::Noun => "существительное",
                PartOfSpeech::Verb => "глагол",
                PartOfSpeech::Adjective => "прилагательное",
                PartOfSpeech::Adverb => "наречие",
                PartOfSpeech::Preposition => "предлог",
                PartOfSpeech::Conjunction => "союз",
                PartOfSpeech::Pronoun => "местоимение",
                PartOfSpeech::Gerund => "деепричастие",
                PartOfSpeech::Punct => "знак препинания",
                PartOfSpeech::Other(tag) => tag.as_str(),
            },
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::Ru => &RU,
        }
    }
}

pub struct Messages {
    pub prompt: &'static str,
    pub no_results: &'static str,
    pub results_found: &'static str,
    pub loading: &'static str,
    pub loaded: &'static str,
    pub load_failed: &'static str,
    pub word: &'static str,
    pub lemma: &'static str,
    pub pos: &'static str,
    pub analysis: &'static str,
}

static EN: Messages = Messages {
    prompt: "Enter a search query",
    no_results: "Nothing matches your query",
    results_found: "Results found",
    loading: "Loading data...",
    loaded: "Data loaded! Texts loaded",
    load_failed: "Failed to load data!",
    word: "Word",
    lemma: "Lemma",
    pos: "Part of speech",
    analysis: "Analysis",
};

static RU: Messages = Messages {
    prompt: "Введите поисковый запрос",
    no_results: "По вашему запросу ничего не найдено",
    results_found: "Найдено результатов",
    loading: "Загружаем данные...",
    loaded: "Данные загружены! Загружено текстов",
    load_failed: "Ошибка загрузки данных!",
    word: "Слово",
    lemma: "Лемма",
    pos: "Часть речи",
    analysis: "Анализ",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_labels() {
        assert_eq!(Language::Ru.pos_label(&PartOfSpeech::Gerund), "деепричастие");
        assert_eq!(Language::En.pos_label(&PartOfSpeech::Punct), "punctuation");
        let other = PartOfSpeech::Other("particle".to_string());
        assert_eq!(Language::Ru.pos_label(&other), "particle");
    }

    #[test]
    fn test_language_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let parsed: Wrapper = toml::from_str("language = \"ru\"").unwrap();
        assert_eq!(parsed.language, Language::Ru);
    }
}
