use rand::Rng;

use crate::annotator::Annotator;
use crate::config::SlangConfig;
use crate::engine::SubstitutionEngine;
use crate::reconstruct::reconstruct;
use crate::store::LexiconStore;
use crate::token::AnnotatedToken;

/// Rewrites annotated English into Philly slang.
///
/// Each call refreshes the lexicon if its file changed, then works from a
/// single snapshot for the whole call.
pub struct SlangConverter {
    store: LexiconStore,
    engine: SubstitutionEngine,
}

impl SlangConverter {
    pub fn new(config: &SlangConfig) -> Self {
        Self {
            store: LexiconStore::new(config.lexicon_path.clone()),
            engine: SubstitutionEngine::from_config(config),
        }
    }

    pub fn with_store(store: LexiconStore, engine: SubstitutionEngine) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &LexiconStore {
        &self.store
    }

    pub fn engine(&self) -> &SubstitutionEngine {
        &self.engine
    }

    pub fn convert_tokens(&self, tokens: &[AnnotatedToken]) -> String {
        self.convert_tokens_with_rng(tokens, &mut rand::thread_rng())
    }

    pub fn convert_tokens_with_rng<R: Rng + ?Sized>(
        &self,
        tokens: &[AnnotatedToken],
        rng: &mut R,
    ) -> String {
        self.store.refresh_if_stale();
        let snapshot = self.store.current_snapshot();
        tracing::debug!(tokens = tokens.len(), entries = snapshot.lexicon.len(), "converting");

        let out = self.engine.substitute(tokens, &snapshot.lexicon, rng);
        reconstruct(&out)
    }

    pub fn convert_text(&self, annotator: &dyn Annotator, text: &str) -> String {
        let tokens = annotator.annotate(text);
        self.convert_tokens(&tokens)
    }

    pub fn convert_text_with_rng<R: Rng + ?Sized>(
        &self,
        annotator: &dyn Annotator,
        text: &str,
        rng: &mut R,
    ) -> String {
        let tokens = annotator.annotate(text);
        self.convert_tokens_with_rng(&tokens, rng)
    }
}
