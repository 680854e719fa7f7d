use crate::case::tokenizer::{mark_humps, scrub, split_words, HumpRule, Punctuation};

/// Convert to dot.case. Only a lowercase letter followed by a capital is a
/// hump here; digits never start one.
pub fn convert(input: &str, policy: Punctuation) -> String {
    let scrubbed = scrub(input.trim(), policy);
    let marked = mark_humps(&scrubbed, HumpRule::LowerUpper);

    split_words(&marked).join(".").to_ascii_lowercase()
}
