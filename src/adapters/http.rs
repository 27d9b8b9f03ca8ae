use crate::core::{Corpus, CorpusSource};
use crate::utils::error::{CorpusError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Loads the corpus with a single GET request.
pub struct HttpCorpusSource {
    url: String,
    client: Client,
}

impl HttpCorpusSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CorpusSource for HttpCorpusSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Corpus> {
        tracing::debug!("Making corpus request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Corpus response status: {}", status);
        if !status.is_success() {
            return Err(CorpusError::StatusError {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let corpus = Corpus::from_json_slice(&body)?;
        tracing::debug!(
            "Parsed {} texts ({} tokens) from {} bytes",
            corpus.len(),
            corpus.token_count(),
            body.len()
        );
        Ok(corpus)
    }
}
