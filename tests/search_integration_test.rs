use corpus_search::config::toml_config::TomlConfig;
use corpus_search::core::labels::Language;
use corpus_search::{
    renderer_for, source_from_config, FileCorpusSource, HttpCorpusSource, LoadStatus, OutputFormat,
    PartOfSpeech, PosFilter, RenderOptions, SearchQuery, SearchSession, Settings,
};
use httpmock::prelude::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn sample_corpus() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "title": "Зимний вечер",
            "tokens": [
                {"form": "Буря", "lemma": "буря", "pos": "noun", "ana": "S,f,inan=nom,sg"},
                {"form": "мглою", "lemma": "мгла", "pos": "noun", "ana": "S,f,inan=ins,sg"},
                {"form": "небо", "lemma": "небо", "pos": "noun", "ana": "S,n,inan=acc,sg"},
                {"form": "кроет", "lemma": "крыть", "pos": "verb", "ana": "V,ipf,tran=praes,sg,indic,3p"},
                {"form": ",", "lemma": ",", "pos": "punct", "ana": ""},
                {"form": "вихри", "lemma": "вихрь", "pos": "noun", "ana": "S,m,inan=acc,pl"},
                {"form": "снежные", "lemma": "снежный", "pos": "adjective", "ana": "A=acc,pl,plen,inan"},
                {"form": "крутя", "lemma": "крутить", "pos": "gerund", "ana": "V,ipf,tran=ger,praes"},
                {"form": ".", "lemma": ".", "pos": "punct", "ana": ""}
            ]
        },
        {
            "id": "onegin-1",
            "title": "<Онегин>",
            "sentence": "Мой дядя самых честных правил, когда не в шутку занемог.",
            "tokens": [
                {"form": "правил", "lemma": "правило", "pos": "noun", "ana": "S,n,inan=gen,pl"},
                {"form": "честных", "lemma": "честный", "pos": "adjective", "ana": "A=gen,pl,plen"},
                {"form": "занемог", "lemma": "занемочь", "pos": "verb", "ana": "V,pf,intr=praet,sg,indic,m"}
            ]
        }
    ])
}

fn html_session(language: Language) -> SearchSession {
    SearchSession::new(
        renderer_for(
            OutputFormat::Html,
            RenderOptions {
                language,
                ..RenderOptions::default()
            },
        ),
        language,
    )
}

#[tokio::test]
async fn test_end_to_end_search_over_http() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data/texts.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_corpus());
    });

    let source = HttpCorpusSource::new(server.url("/data/texts.json"), Duration::from_secs(5)).unwrap();
    let mut session = html_session(Language::Ru);
    let status = session.load(&source).await.clone();

    api_mock.assert();
    assert_eq!(status, LoadStatus::Loaded { texts: 2 });

    let rendered = session.search(&SearchQuery::new("Н", PosFilter::any()));
    // небо, снежный, честный, занемочь
    assert_eq!(rendered.stats, "Найдено результатов: 4");
    assert!(rendered
        .body
        .contains("Буря мглою <span class=\"highlight\">небо</span> кроет, вихри <span class=\"highlight\">снежные</span> крутя."));
    assert!(rendered.body.contains("<h3>&lt;Онегин&gt; (ID: onegin-1)</h3>"));
    assert!(rendered.body.contains("<span class=\"highlight\">честных</span>"));
    assert!(rendered.body.contains("<span class=\"highlight\">занемог</span>"));
    assert!(rendered.body.contains("<span>Часть речи: прилагательное</span>"));
}

#[tokio::test]
async fn test_filters_restrict_parts_of_speech() {
    let corpus = serde_json::from_value(sample_corpus()).unwrap();
    let session = SearchSession::with_corpus(
        corpus,
        renderer_for(OutputFormat::Text, RenderOptions::default()),
        Language::En,
    );

    let query = SearchQuery::new(
        "н",
        PosFilter::only([PartOfSpeech::Verb, PartOfSpeech::Adjective]),
    );
    let rendered = session.search(&query);

    assert_eq!(rendered.stats, "Results found: 3");
    assert!(!rendered.body.contains("Part of speech: noun"));
    assert!(rendered.body.contains("Part of speech: verb"));
    assert!(rendered.body.contains("Part of speech: adjective"));
}

#[tokio::test]
async fn test_failed_load_is_visible_and_searches_return_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data/texts.json");
        then.status(500);
    });

    let source = HttpCorpusSource::new(server.url("/data/texts.json"), Duration::from_secs(5)).unwrap();
    let mut session = html_session(Language::Ru);
    session.load(&source).await;

    api_mock.assert();
    assert!(session.status().is_error());
    assert!(session.corpus().is_empty());
    let status = session.status_message();
    assert!(status.starts_with("<div class=\"error\">Ошибка загрузки данных!"));
    assert!(status.contains("500"));

    let rendered = session.search(&SearchQuery::new("буря", PosFilter::any()));
    assert_eq!(rendered.stats, "Найдено результатов: 0");
    assert!(rendered.body.contains("По вашему запросу ничего не найдено"));

    let prompt = session.search(&SearchQuery::new("", PosFilter::any()));
    assert_eq!(prompt.stats, "");
    assert!(prompt.body.contains("Введите поисковый запрос"));
}

#[tokio::test]
async fn test_malformed_corpus_is_a_load_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/texts.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"id": 1, "tokens": []}]));
    });

    let source = HttpCorpusSource::new(server.url("/data/texts.json"), Duration::from_secs(5)).unwrap();
    let mut session = html_session(Language::En);
    session.load(&source).await;

    assert!(session.status().is_error());
    assert!(session.corpus().is_empty());
}

#[tokio::test]
async fn test_settings_from_toml_pick_file_source() {
    let mut corpus_file = NamedTempFile::new().unwrap();
    corpus_file
        .write_all(serde_json::to_string(&sample_corpus()).unwrap().as_bytes())
        .unwrap();

    let toml_content = format!(
        "[source]\nlocation = {:?}\n\n[search]\npos = [\"gerund\"]\n\n[render]\nformat = \"text\"\ncontext_window = 1\n",
        corpus_file.path().display().to_string()
    );
    let file = TomlConfig::from_toml_str(&toml_content).unwrap();
    let settings = Settings::from_toml(&file);

    let source = source_from_config(&settings).unwrap();
    assert_eq!(source.describe(), corpus_file.path().display().to_string());

    let mut session = SearchSession::new(
        renderer_for(settings.format, settings.render.clone()),
        settings.render.language,
    );
    session.load(source.as_ref()).await;

    let rendered = session.search(&SearchQuery::new("крут", settings.initial_filter()));
    assert_eq!(rendered.stats, "Results found: 1");
    assert!(rendered.body.contains("  снежные [крутя].\n"));
}

#[tokio::test]
async fn test_file_source_missing_file() {
    let source = FileCorpusSource::new("/definitely/not/here/texts.json");
    let mut session = html_session(Language::En);
    session.load(&source).await;

    assert!(session.status().is_error());
    assert!(session.status_message().contains("Could not read the corpus file"));
}
