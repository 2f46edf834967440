use std::collections::HashMap;
use std::path::Path;

use crate::lexicon::{Lexicon, SlangEntry};

const EMBEDDED_LEXICON: &str = include_str!("../data/philly_slang.json");

/// The built-in mapping used until a lexicon resource loads successfully.
pub fn load_default_lexicon() -> Lexicon {
    match Lexicon::from_json_str(EMBEDDED_LEXICON, Path::new("<embedded>")) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            tracing::warn!(error = %e, "embedded lexicon unreadable, using hard-coded table");
            hard_coded_lexicon()
        }
    }
}

fn hard_coded_lexicon() -> Lexicon {
    let pairs = [
        ("person", "bol"),
        ("people", "bols"),
        ("girl", "jawn"),
        ("girls", "jawns"),
        ("sandwich", "hoagie"),
        ("sandwiches", "hoagies"),
        ("friend", "jawn"),
        ("friends", "jawns"),
        ("thing", "jawn"),
        ("things", "jawns"),
        ("car", "whip"),
        ("cars", "whips"),
        ("house", "crib"),
        ("houses", "cribs"),
        ("dog", "pup"),
        ("dogs", "pups"),
    ];
    let raw: HashMap<String, SlangEntry> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), SlangEntry::Candidates(vec![v.to_string()])))
        .collect();
    Lexicon::new(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lookup;

    #[test]
    fn test_embedded_matches_hard_coded_words() {
        let embedded = load_default_lexicon();
        let fallback = hard_coded_lexicon();
        for key in ["person", "sandwich", "car", "house", "dog"] {
            assert_eq!(embedded.lookup(key), fallback.lookup(key), "key {key}");
        }
        assert!(matches!(embedded.lookup("you all"), Lookup::Candidates(_)));
        assert_eq!(embedded.malformed_keys().count(), 0);
    }
}
