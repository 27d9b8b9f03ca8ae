use crate::core::labels::Language;
use crate::core::matcher::{search, SearchQuery};
use crate::core::render::{RenderedResults, ResultRenderer};
use crate::core::{Corpus, CorpusSource};
use crate::utils::error::CorpusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded { texts: usize },
    Failed { message: String },
}

impl LoadStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, LoadStatus::Failed { .. })
    }
}

/// In-memory corpus plus the renderer used for every search over it.
///
/// The corpus is loaded once; a failed load leaves it empty so later
/// searches report no results instead of failing.
pub struct SearchSession {
    corpus: Corpus,
    status: LoadStatus,
    language: Language,
    renderer: Box<dyn ResultRenderer>,
}

impl SearchSession {
    pub fn new(renderer: Box<dyn ResultRenderer>, language: Language) -> Self {
        Self {
            corpus: Corpus::empty(),
            status: LoadStatus::Loading,
            language,
            renderer,
        }
    }

    pub fn with_corpus(corpus: Corpus, renderer: Box<dyn ResultRenderer>, language: Language) -> Self {
        let status = LoadStatus::Loaded {
            texts: corpus.len(),
        };
        Self {
            corpus,
            status,
            language,
            renderer,
        }
    }

    pub async fn load(&mut self, source: &dyn CorpusSource) -> &LoadStatus {
        self.status = LoadStatus::Loading;
        tracing::info!("Loading corpus from {}", source.describe());

        match source.fetch().await {
            Ok(corpus) => {
                tracing::info!(
                    "Corpus loaded: {} texts, {} tokens",
                    corpus.len(),
                    corpus.token_count()
                );
                self.status = LoadStatus::Loaded {
                    texts: corpus.len(),
                };
                self.corpus = corpus;
            }
            Err(e) => {
                tracing::error!("Failed to load corpus from {}: {}", source.describe(), e);
                self.mark_failed(&e);
            }
        }
        &self.status
    }

    /// Drops any loaded texts and records `error` as the visible status.
    pub fn mark_failed(&mut self, error: &CorpusError) {
        tracing::error!("Recovery suggestion: {}", error.recovery_suggestion());
        self.corpus = Corpus::empty();
        self.status = LoadStatus::Failed {
            message: error.user_friendly_message(),
        };
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Localized status line, rendered by the session's renderer.
    pub fn status_message(&self) -> String {
        let msg = self.language.messages();
        let plain = match &self.status {
            LoadStatus::Loading => msg.loading.to_string(),
            LoadStatus::Loaded { texts } => format!("{}: {}", msg.loaded, texts),
            LoadStatus::Failed { message } => format!("{} {}", msg.load_failed, message),
        };
        self.renderer.status(&plain, self.status.is_error())
    }

    pub fn search(&self, query: &SearchQuery) -> RenderedResults {
        self.renderer.render(&search(&self.corpus, query))
    }
}
