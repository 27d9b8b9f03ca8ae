pub mod toml_config;

use crate::core::labels::Language;
use crate::core::matcher::PosFilter;
use crate::core::render::{OutputFormat, RenderOptions};
use crate::core::{ConfigProvider, PartOfSpeech};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

/// Path the corpus is read from when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "data/texts.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Largest accepted context window, in tokens on each side of a match.
pub const MAX_CONTEXT_WINDOW: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "corpus-search")]
#[command(about = "Search an annotated text corpus by lemma and part of speech")]
pub struct CliConfig {
    /// Corpus location: http(s) URL or local JSON file
    #[arg(short, long)]
    pub source: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Lemma substring to search for
    #[arg(short, long)]
    pub query: Option<String>,

    /// Restrict matches to these parts of speech
    #[arg(long, value_delimiter = ',')]
    pub pos: Vec<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Tokens shown around matches when the sentence is rebuilt from tokens
    #[arg(long)]
    pub context_window: Option<usize>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Read queries from stdin, one per line
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_location: String,
    pub timeout_seconds: u64,
    pub format: OutputFormat,
    pub render: RenderOptions,
    pub pos_filter: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_location: DEFAULT_SOURCE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            format: OutputFormat::default(),
            render: RenderOptions::default(),
            pos_filter: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut settings = Self::default();
        if let Some(location) = &file.source.location {
            settings.source_location = location.clone();
        }
        if let Some(timeout) = file.source.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(pos) = &file.search.pos {
            settings.pos_filter = pos.clone();
        }
        if let Some(format) = file.render.format {
            settings.format = format;
        }
        if let Some(language) = file.render.language {
            settings.render.language = language;
        }
        if let Some(class) = &file.render.highlight_class {
            settings.render.highlight_class = class.clone();
        }
        if file.render.context_window.is_some() {
            settings.render.context_window = file.render.context_window;
        }
        if let Some(open) = &file.render.text_open {
            settings.render.text_markers.open = open.clone();
        }
        if let Some(close) = &file.render.text_close {
            settings.render.text_markers.close = close.clone();
        }
        settings
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut settings = file.map(Self::from_toml).unwrap_or_default();
        if let Some(source) = &cli.source {
            settings.source_location = source.clone();
        }
        if let Some(timeout) = cli.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if !cli.pos.is_empty() {
            settings.pos_filter = cli.pos.clone();
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        if let Some(language) = cli.language {
            settings.render.language = language;
        }
        if cli.context_window.is_some() {
            settings.render.context_window = cli.context_window;
        }
        settings
    }

    pub fn initial_filter(&self) -> PosFilter {
        PosFilter::only(
            self.pos_filter
                .iter()
                .map(|tag| PartOfSpeech::from_tag(tag.trim())),
        )
    }
}

impl ConfigProvider for Settings {
    fn source_location(&self) -> &str {
        &self.source_location
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_location("source", &self.source_location)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        validation::validate_non_empty_string("highlight_class", &self.render.highlight_class)?;
        validation::validate_non_empty_string("text_open", &self.render.text_markers.open)?;
        validation::validate_non_empty_string("text_close", &self.render.text_markers.close)?;
        if let Some(window) = self.render.context_window {
            validation::validate_range("context_window", window, 0, MAX_CONTEXT_WINDOW)?;
        }
        for tag in &self.pos_filter {
            validation::validate_non_empty_string("pos", tag)?;
        }
        Ok(())
    }
}
