//! Word-boundary detection shared by every case.
//!
//! The stages here only decide where words start and end. How each word is
//! cased and joined is up to the individual case modules, which compose these
//! stages in their own order.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref HUMP_LOWER_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref HUMP_LOWER_OR_DIGIT_UPPER: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"[^A-Za-z0-9_\s-]+").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// What to do with characters that are neither ASCII letters, digits,
/// whitespace, hyphens nor underscores.
///
/// Each [`Case`](crate::Case) has its own default, see
/// [`Case::default_punctuation`](crate::Case::default_punctuation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Punctuation {
    /// Drop them: `foo!bar` is one word.
    Strip,
    /// Treat each run of them as a separator: `foo!bar` is two words.
    Split,
}

impl FromStr for Punctuation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strip" => Ok(Punctuation::Strip),
            "split" => Ok(Punctuation::Split),
            _ => Err(format!("Unknown punctuation policy: {}", s)),
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Punctuation::Strip => write!(f, "strip"),
            Punctuation::Split => write!(f, "split"),
        }
    }
}

/// Which lowercase-to-uppercase transitions count as a word boundary.
///
/// Runs of capitals are never split, so `HTTPServer` stays a single word
/// while `parseHTTPServer` splits once, before the `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumpRule {
    /// `fooBar`
    LowerUpper,
    /// `fooBar` and `v2Beta`
    LowerOrDigitUpper,
}

/// Insert a space at every hump so that a later split sees it as a separator.
pub fn mark_humps(input: &str, rule: HumpRule) -> Cow<'_, str> {
    let re: &Regex = match rule {
        HumpRule::LowerUpper => &*HUMP_LOWER_UPPER,
        HumpRule::LowerOrDigitUpper => &*HUMP_LOWER_OR_DIGIT_UPPER,
    };
    re.replace_all(input, "${1} ${2}")
}

/// Apply the punctuation policy. Non-ASCII letters count as punctuation.
pub fn scrub(input: &str, policy: Punctuation) -> Cow<'_, str> {
    match policy {
        Punctuation::Strip => PUNCTUATION.replace_all(input, ""),
        Punctuation::Split => PUNCTUATION.replace_all(input, " "),
    }
}

/// Split on runs of whitespace, hyphens and underscores. A separator at
/// either end leaves an empty token there.
pub fn split_tokens(input: &str) -> Vec<&str> {
    SEPARATORS.split(input).collect()
}

/// Like [`split_tokens`], without the empty tokens.
pub fn split_words(input: &str) -> Vec<&str> {
    SEPARATORS
        .split(input)
        .filter(|word| !word.is_empty())
        .collect()
}
