use crate::core::{Corpus, CorpusSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileCorpusSource {
    path: PathBuf,
}

impl FileCorpusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for FileCorpusSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Corpus> {
        tracing::debug!("Reading corpus file: {}", self.path.display());
        let data = fs::read(&self.path)?;
        Ok(Corpus::from_json_slice(&data)?)
    }
}
