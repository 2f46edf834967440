pub mod annotator;
pub mod config;
pub mod converter;
pub mod data;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod reconstruct;
pub mod store;
pub mod token;

pub use annotator::Annotator;
pub use config::SlangConfig;
pub use converter::SlangConverter;
pub use engine::{SubstitutionEngine, pluralize};
pub use error::{SlangError, SlangResult};
pub use lexicon::{Lexicon, LexiconSnapshot, Lookup, SlangEntry};
pub use store::{LexiconStore, RefreshOutcome};
pub use token::{AnnotatedToken, OutputToken, PartOfSpeech};
