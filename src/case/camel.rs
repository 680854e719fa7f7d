use crate::case::tokenizer::{scrub, split_tokens, Punctuation};

/// Convert to camelCase. Existing humps are not word boundaries, every word
/// is re-cased from scratch.
///
/// Only the first token is lower-cased, and that may be the empty token left
/// by a leading separator: `-foo bar` gives `FooBar`.
pub fn convert(input: &str, policy: Punctuation) -> String {
    let scrubbed = scrub(input.trim(), policy);
    let mut camel = String::with_capacity(scrubbed.len());

    for (idx, word) in split_tokens(&scrubbed).into_iter().enumerate() {
        if idx == 0 {
            camel.push_str(&word.to_ascii_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            camel.push(first.to_ascii_uppercase());
            camel.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }

    camel
}
