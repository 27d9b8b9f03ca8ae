pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{source_from_config, FileCorpusSource, HttpCorpusSource};
pub use app::{Controls, LoadStatus, SearchSession};
pub use config::Settings;
pub use crate::core::matcher::{search, PosFilter, SearchOutcome, SearchQuery};
pub use crate::core::render::{renderer_for, OutputFormat, RenderOptions};
pub use domain::model::{Corpus, PartOfSpeech, Text, TextId, Token};
pub use utils::error::{CorpusError, Result};
