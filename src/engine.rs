use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::SlangConfig;
use crate::lexicon::{Lexicon, Lookup};
use crate::token::{AnnotatedToken, OutputToken, PartOfSpeech};

/// Decides, token by token, what slang (if any) replaces the input.
#[derive(Debug, Clone)]
pub struct SubstitutionEngine {
    default_term: String,
    default_plural: String,
    phrase_matching: bool,
}

impl Default for SubstitutionEngine {
    fn default() -> Self {
        Self::from_config(&SlangConfig::default())
    }
}

impl SubstitutionEngine {
    pub fn new(default_term: impl Into<String>, default_plural: Option<String>) -> Self {
        let default_term = default_term.into();
        let default_plural = default_plural.unwrap_or_else(|| pluralize(&default_term));
        Self {
            default_term,
            default_plural,
            phrase_matching: true,
        }
    }

    pub fn from_config(config: &SlangConfig) -> Self {
        Self::new(config.default_term.clone(), config.default_plural.clone())
            .with_phrase_matching(config.phrase_matching)
    }

    pub fn with_phrase_matching(mut self, enabled: bool) -> Self {
        self.phrase_matching = enabled;
        self
    }

    pub fn default_term(&self) -> &str {
        &self.default_term
    }

    pub fn default_plural(&self) -> &str {
        &self.default_plural
    }

    /// Runs left to right with one token of lookahead. A matched two-word
    /// phrase consumes both tokens and yields a single output token.
    pub fn substitute<'a, R: Rng + ?Sized>(
        &self,
        tokens: &'a [AnnotatedToken],
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Vec<OutputToken<'a>> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if self.phrase_matching {
                if let Some(next) = tokens.get(i + 1) {
                    if let Some(phrase) = self.match_phrase(token, next, lexicon, rng) {
                        out.push(phrase);
                        i += 2;
                        continue;
                    }
                }
            }
            out.push(self.substitute_token(token, lexicon, rng));
            i += 1;
        }
        out
    }

    fn match_phrase<'a, R: Rng + ?Sized>(
        &self,
        first: &'a AnnotatedToken,
        second: &AnnotatedToken,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Option<OutputToken<'a>> {
        let key = format!("{} {}", first.lowercase_text(), second.lowercase_text());
        let Lookup::Candidates(candidates) = lexicon.lookup(&key) else {
            return None;
        };
        let pick = choose_candidate(candidates, rng)?;
        tracing::trace!(phrase = %key, replacement = pick, "phrase match");
        Some(OutputToken::new(apply_case(pick, first), first))
    }

    fn substitute_token<'a, R: Rng + ?Sized>(
        &self,
        token: &'a AnnotatedToken,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> OutputToken<'a> {
        let replaced = match token.part_of_speech {
            PartOfSpeech::Pron => self.substitute_pronoun(token, lexicon, rng),
            PartOfSpeech::Noun | PartOfSpeech::Propn => self.substitute_noun(token, lexicon, rng),
            PartOfSpeech::Punct | PartOfSpeech::Other => None,
        };
        match replaced {
            Some(text) => OutputToken::new(text, token),
            None => OutputToken::passthrough(token),
        }
    }

    // Pronouns only change when listed explicitly; there is no default term.
    fn substitute_pronoun<R: Rng + ?Sized>(
        &self,
        token: &AnnotatedToken,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Option<String> {
        match lexicon.lookup(&token.lowercase_text()) {
            Lookup::Candidates(candidates) => {
                choose_candidate(candidates, rng).map(|pick| apply_case(pick, token))
            }
            Lookup::Absent | Lookup::Malformed => None,
        }
    }

    fn substitute_noun<R: Rng + ?Sized>(
        &self,
        token: &AnnotatedToken,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Option<String> {
        let is_plural_noun = token.part_of_speech == PartOfSpeech::Noun && token.is_plural;
        match lexicon.lookup(&token.lowercase_base) {
            Lookup::Candidates(candidates) => {
                let pick = choose_candidate(candidates, rng)?;
                let term = if is_plural_noun && !looks_plural(pick) {
                    pluralize(pick)
                } else {
                    pick.to_string()
                };
                Some(apply_case(&term, token))
            }
            Lookup::Malformed => {
                tracing::debug!(base = %token.lowercase_base, "malformed lexicon entry, passing through");
                None
            }
            Lookup::Absent if token.part_of_speech == PartOfSpeech::Noun => {
                let term = if token.is_plural {
                    &self.default_plural
                } else {
                    &self.default_term
                };
                Some(apply_case(term, token))
            }
            Lookup::Absent => None,
        }
    }
}

fn choose_candidate<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> Option<&'a str> {
    candidates.choose(rng).map(String::as_str)
}

fn apply_case(term: &str, original: &AnnotatedToken) -> String {
    if original.starts_uppercase() {
        capitalize_first(term)
    } else {
        term.to_string()
    }
}

/// Lexicon-local plural: "-y" becomes "-ies", everything else gains "s".
pub fn pluralize(term: &str) -> String {
    match term.strip_suffix('y') {
        Some(stem) => format!("{}ies", stem),
        None => format!("{}s", term),
    }
}

/// Treats a trailing "s" (but not "ss") as an already-plural term.
pub fn looks_plural(term: &str) -> bool {
    term.ends_with('s') && !term.ends_with("ss")
}

/// Uppercases the first character only; the rest keeps its casing.
pub fn capitalize_first(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::SlangEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;
    use std::path::Path;

    fn lexicon(json: &str) -> Lexicon {
        Lexicon::from_json_str(json, Path::new("test.json")).unwrap()
    }

    fn run(tokens: &[AnnotatedToken], lex: &Lexicon) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(7);
        SubstitutionEngine::default()
            .substitute(tokens, lex, &mut rng)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("hoagie"), "hoagies");
        assert_eq!(pluralize("jawn"), "jawns");
        assert_eq!(pluralize("buddy"), "buddies");
        assert_eq!(pluralize(""), "s");
    }

    #[test]
    fn test_capitalize_first_keeps_rest() {
        assert_eq!(capitalize_first("wawa"), "Wawa");
        assert_eq!(capitalize_first("iPhone"), "IPhone");
        assert_eq!(capitalize_first("jAWN"), "JAWN");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_phrase_consumes_both_tokens() {
        let lex = lexicon(r#"{"you all": ["yous"]}"#);
        let tokens = vec![
            AnnotatedToken::word("You", PartOfSpeech::Pron),
            AnnotatedToken::word("all", PartOfSpeech::Other),
            AnnotatedToken::word("good", PartOfSpeech::Other),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let out = SubstitutionEngine::default().substitute(&tokens, &lex, &mut rng);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "Yous");
        assert_eq!(out[0].source.text, "You");
        assert_eq!(out[1].text, "good");
    }

    #[test]
    fn test_phrase_matching_can_be_disabled() {
        let lex = lexicon(r#"{"you all": ["yous"]}"#);
        let tokens = vec![
            AnnotatedToken::word("you", PartOfSpeech::Pron),
            AnnotatedToken::word("all", PartOfSpeech::Other),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let engine = SubstitutionEngine::default().with_phrase_matching(false);
        let out: Vec<String> = engine
            .substitute(&tokens, &lex, &mut rng)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(out, vec!["you", "all"]);
    }

    #[test]
    fn test_phrase_wins_over_pronoun_key() {
        let lex = lexicon(r#"{"you all": "yous", "you": "youse"}"#);
        let tokens = vec![
            AnnotatedToken::word("you", PartOfSpeech::Pron),
            AnnotatedToken::word("all", PartOfSpeech::Other),
            AnnotatedToken::word("you", PartOfSpeech::Pron),
        ];
        assert_eq!(run(&tokens, &lex), vec!["yous", "youse"]);
    }

    #[test]
    fn test_empty_phrase_entry_falls_through() {
        let lex = lexicon(r#"{"you all": [], "you": "youse"}"#);
        let tokens = vec![
            AnnotatedToken::word("You", PartOfSpeech::Pron),
            AnnotatedToken::word("all", PartOfSpeech::Other),
        ];
        assert_eq!(run(&tokens, &lex), vec!["Youse", "all"]);
    }

    #[test]
    fn test_unknown_pronoun_passes_through_verbatim() {
        let lex = lexicon(r#"{"dog": "pup"}"#);
        let tokens = vec![
            AnnotatedToken::word("I", PartOfSpeech::Pron),
            AnnotatedToken::word("THEY", PartOfSpeech::Pron),
        ];
        assert_eq!(run(&tokens, &lex), vec!["I", "THEY"]);
    }

    #[test]
    fn test_unknown_noun_uses_default_term() {
        let lex = Lexicon::default();
        let tokens = vec![
            AnnotatedToken::word("widget", PartOfSpeech::Noun),
            AnnotatedToken::plural("widgets", "widget"),
            AnnotatedToken::word("Widget", PartOfSpeech::Noun),
        ];
        assert_eq!(run(&tokens, &lex), vec!["jawn", "jawns", "Jawn"]);
    }

    #[test]
    fn test_unknown_proper_noun_passes_through() {
        let lex = Lexicon::default();
        let tokens = vec![AnnotatedToken::word("Philly", PartOfSpeech::Propn)];
        assert_eq!(run(&tokens, &lex), vec!["Philly"]);
    }

    #[test]
    fn test_proper_noun_entry_is_not_pluralized() {
        let lex = lexicon(r#"{"eagles": "birds", "wawa": "wawa"}"#);
        let mut tokens = vec![AnnotatedToken::word("Wawa", PartOfSpeech::Propn)];
        tokens[0].is_plural = true;
        assert_eq!(run(&tokens, &lex), vec!["Wawa"]);
    }

    #[test]
    fn test_plural_noun_rules() {
        let lex = lexicon(r#"{"friend": "buddy", "dog": "pup", "person": "bols"}"#);
        let tokens = vec![
            AnnotatedToken::plural("friends", "friend"),
            AnnotatedToken::plural("Dogs", "dog"),
            AnnotatedToken::plural("people", "person"),
        ];
        assert_eq!(run(&tokens, &lex), vec!["buddies", "Pups", "bols"]);
    }

    #[test]
    fn test_malformed_entry_passes_through() {
        let lex = lexicon(r#"{"dog": 42}"#);
        let tokens = vec![AnnotatedToken::word("dog", PartOfSpeech::Noun)];
        assert_eq!(run(&tokens, &lex), vec!["dog"]);
    }

    #[test]
    fn test_other_and_punct_untouched() {
        let lex = lexicon(r#"{"run": "jog", ".": "!"}"#);
        let tokens = vec![
            AnnotatedToken::word("run", PartOfSpeech::Other),
            AnnotatedToken::punct("."),
        ];
        assert_eq!(run(&tokens, &lex), vec!["run", "."]);
    }

    #[test]
    fn test_random_choice_is_seeded() {
        let mut raw = HashMap::new();
        raw.insert(
            "car".to_string(),
            SlangEntry::Candidates(vec!["whip".into(), "ride".into(), "wheels".into()]),
        );
        let lex = Lexicon::new(raw);
        let tokens: Vec<AnnotatedToken> = (0..20)
            .map(|_| AnnotatedToken::word("car", PartOfSpeech::Noun))
            .collect();

        let first = run(&tokens, &lex);
        let second = run(&tokens, &lex);
        assert_eq!(first, second);
        assert!(
            first
                .iter()
                .all(|t| ["whip", "ride", "wheels"].contains(&t.as_str()))
        );
    }

    #[test]
    fn test_custom_default_term() {
        let engine = SubstitutionEngine::new("thingy", None);
        assert_eq!(engine.default_plural(), "thingies");
        let engine = SubstitutionEngine::new("jawn", Some("jawnz".to_string()));
        assert_eq!(engine.default_plural(), "jawnz");
    }
}
