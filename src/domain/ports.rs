use crate::domain::model::Corpus;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Human-readable location, used in logs and status messages.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Corpus>;
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
