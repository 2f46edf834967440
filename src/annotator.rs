use crate::token::AnnotatedToken;

/// Seam for the external part-of-speech annotator.
///
/// Implementations split the text into tokens and classify each one; the
/// converter only consumes the resulting [`AnnotatedToken`]s.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Vec<AnnotatedToken> + Send + Sync,
{
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        self(text)
    }
}
