use philly_slang::{AnnotatedToken, PartOfSpeech, SlangConfig, SlangConverter};

fn main() {
    let converter = SlangConverter::new(&SlangConfig::default().with_env_overrides());
    println!("lexicon: {}", converter.store().path().display());

    let sentences = vec![
        vec![
            AnnotatedToken::word("I", PartOfSpeech::Pron),
            AnnotatedToken::word("want", PartOfSpeech::Other),
            AnnotatedToken::word("a", PartOfSpeech::Other),
            AnnotatedToken::word("sandwich", PartOfSpeech::Noun),
            AnnotatedToken::punct("."),
        ],
        vec![
            AnnotatedToken::word("You", PartOfSpeech::Pron),
            AnnotatedToken::word("all", PartOfSpeech::Other),
            AnnotatedToken::word("parked", PartOfSpeech::Other),
            AnnotatedToken::word("the", PartOfSpeech::Other),
            AnnotatedToken::plural("cars", "car"),
            AnnotatedToken::word("by", PartOfSpeech::Other),
            AnnotatedToken::word("Wawa", PartOfSpeech::Propn),
            AnnotatedToken::punct("?"),
        ],
        vec![
            AnnotatedToken::word("That", PartOfSpeech::Other),
            AnnotatedToken::word("widget", PartOfSpeech::Noun),
            AnnotatedToken::word("is", PartOfSpeech::Other),
            AnnotatedToken::word("broken", PartOfSpeech::Other),
            AnnotatedToken::punct("!"),
        ],
    ];

    for tokens in &sentences {
        println!("{}", converter.convert_tokens(tokens));
    }
}
