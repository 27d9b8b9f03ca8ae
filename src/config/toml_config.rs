use crate::core::labels::Language;
use crate::core::render::OutputFormat;
use crate::utils::error::{CorpusError, Result};
use crate::config::MAX_CONTEXT_WINDOW;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub location: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Parts of speech checked at startup.
    pub pos: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub format: Option<OutputFormat>,
    pub language: Option<Language>,
    pub highlight_class: Option<String>,
    pub context_window: Option<usize>,
    /// Highlight markers for text output.
    pub text_open: Option<String>,
    pub text_close: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Read config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| CorpusError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(location) = &self.source.location {
            validation::validate_location("source.location", location)?;
        }
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 600)?;
        }
        if let Some(class) = &self.render.highlight_class {
            validation::validate_non_empty_string("render.highlight_class", class)?;
        }
        for (field, marker) in [
            ("render.text_open", &self.render.text_open),
            ("render.text_close", &self.render.text_close),
        ] {
            if let Some(marker) = marker {
                validation::validate_non_empty_string(field, marker)?;
            }
        }
        if let Some(window) = self.render.context_window {
            validation::validate_range("render.context_window", window, 0, MAX_CONTEXT_WINDOW)?;
        }
        if let Some(pos) = &self.search.pos {
            for tag in pos {
                validation::validate_non_empty_string("search.pos", tag)?;
            }
        }
        Ok(())
    }
}
