// Adapters layer: concrete corpus sources.

pub mod file;
pub mod http;

pub use file::FileCorpusSource;
pub use http::HttpCorpusSource;

use crate::core::{ConfigProvider, CorpusSource};
use crate::utils::error::Result;
use crate::utils::validation::looks_like_url;
use std::time::Duration;

/// Picks an HTTP source for URLs and a file source for everything else.
pub fn source_from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Box<dyn CorpusSource>> {
    let location = config.source_location();
    if looks_like_url(location) {
        let timeout = Duration::from_secs(config.timeout_seconds());
        Ok(Box::new(HttpCorpusSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileCorpusSource::new(location)))
    }
}
