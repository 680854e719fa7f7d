use crate::case::tokenizer::{mark_humps, scrub, split_words, HumpRule, Punctuation};

/// Convert to kebab-case.
///
/// Humps are marked on the raw input, before punctuation is handled. Under
/// [`Punctuation::Split`] (the kebab default) `foo!Bar` splits at the `!`,
/// under [`Punctuation::Strip`] it becomes the single word `foobar`.
pub fn convert(input: &str, policy: Punctuation) -> String {
    let marked = mark_humps(input, HumpRule::LowerOrDigitUpper);
    let scrubbed = scrub(&marked, policy);

    split_words(&scrubbed)
        .into_iter()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
