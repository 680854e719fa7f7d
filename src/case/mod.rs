pub mod camel;
pub mod dot;
pub mod kebab;
pub mod tokenizer;

use crate::error::CaseError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use tokenizer::Punctuation;

/// Target case style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Camel,
    Kebab,
    Dot,
}

impl Case {
    /// kebab-case turns punctuation into hyphens; camelCase and dot.case drop it.
    pub fn default_punctuation(&self) -> Punctuation {
        match self {
            Case::Kebab => Punctuation::Split,
            Case::Camel | Case::Dot => Punctuation::Strip,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        self.apply_with(input, self.default_punctuation())
    }

    pub fn apply_with(&self, input: &str, policy: Punctuation) -> String {
        match self {
            Case::Camel => camel::convert(input, policy),
            Case::Kebab => kebab::convert(input, policy),
            Case::Dot => dot::convert(input, policy),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Case::Camel),
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "dot" | "dot.case" => Ok(Case::Dot),
            _ => Err(format!("Unknown case: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Camel => write!(f, "camel"),
            Case::Kebab => write!(f, "kebab"),
            Case::Dot => write!(f, "dot"),
        }
    }
}

/// `first name` -> `firstName`
pub fn to_camel_case(input: &str) -> String {
    Case::Camel.apply(input)
}

/// `Hello World! ThisIsCamelCase--test` -> `hello-world-this-is-camel-case-test`
pub fn to_kebab_case(input: &str) -> String {
    Case::Kebab.apply(input)
}

/// `alreadyCamelCase` -> `already.camel.case`
pub fn to_dot_case(input: &str) -> String {
    Case::Dot.apply(input)
}

/// Convert an untyped value, rejecting anything that is not a string before
/// touching it.
pub fn convert_value(value: &Value, case: Case, policy: Punctuation) -> Result<String, CaseError> {
    match value {
        Value::String(s) => Ok(case.apply_with(s, policy)),
        other => {
            debug!("rejecting non-string input for {} case: {}", case, other);
            Err(CaseError::InvalidInput)
        }
    }
}
