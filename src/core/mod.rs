pub mod highlight;
pub mod labels;
pub mod matcher;
pub mod render;
pub mod sentence;

pub use crate::domain::model::{Corpus, PartOfSpeech, Text, TextId, Token};
pub use crate::domain::ports::{ConfigProvider, CorpusSource};
pub use crate::utils::error::Result;
