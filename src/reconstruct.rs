use crate::token::OutputToken;

/// Joins output tokens: punctuation attaches to the previous token, every
/// other token is preceded by one space. The result is trimmed.
pub fn reconstruct(tokens: &[OutputToken<'_>]) -> String {
    let mut output = String::with_capacity(tokens.iter().map(|t| t.text.len() + 1).sum());
    for tk in tokens {
        if !tk.is_punctuation {
            output.push(' ');
        }
        output.push_str(&tk.text);
    }
    output.trim().to_string()
}
