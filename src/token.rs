use serde::{Deserialize, Serialize};

/// Coarse part-of-speech classes the substitution rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Propn,
    Pron,
    Punct,
    Other,
}

impl PartOfSpeech {
    /// Maps a Universal Dependencies style label ("NOUN", "PROPN", ...) onto
    /// the classes used here. Anything unrecognised becomes `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "NOUN" => PartOfSpeech::Noun,
            "PROPN" => PartOfSpeech::Propn,
            "PRON" => PartOfSpeech::Pron,
            "PUNCT" => PartOfSpeech::Punct,
            _ => PartOfSpeech::Other,
        }
    }
}

/// A token as produced by the external annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub lowercase_base: String,
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub is_plural: bool,
    #[serde(default)]
    pub is_punctuation: bool,
}

impl AnnotatedToken {
    pub fn new(
        text: impl Into<String>,
        lowercase_base: impl Into<String>,
        part_of_speech: PartOfSpeech,
        is_plural: bool,
        is_punctuation: bool,
    ) -> Self {
        Self {
            text: text.into(),
            lowercase_base: lowercase_base.into(),
            part_of_speech,
            is_plural,
            is_punctuation,
        }
    }

    /// A word token whose base form is its own lowercased text.
    pub fn word(text: &str, part_of_speech: PartOfSpeech) -> Self {
        Self::new(text, text.to_lowercase(), part_of_speech, false, false)
    }

    pub fn plural(text: &str, lowercase_base: &str) -> Self {
        Self::new(text, lowercase_base, PartOfSpeech::Noun, true, false)
    }

    pub fn punct(text: &str) -> Self {
        Self::new(text, text, PartOfSpeech::Punct, false, true)
    }

    pub fn lowercase_text(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn starts_uppercase(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// One rendered unit of output, tied back to the input token that drives its
/// spacing and capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputToken<'a> {
    pub text: String,
    pub is_punctuation: bool,
    pub source: &'a AnnotatedToken,
}

impl<'a> OutputToken<'a> {
    pub fn new(text: String, source: &'a AnnotatedToken) -> Self {
        Self {
            text,
            is_punctuation: source.is_punctuation,
            source,
        }
    }

    pub fn passthrough(source: &'a AnnotatedToken) -> Self {
        Self::new(source.text.clone(), source)
    }
}
