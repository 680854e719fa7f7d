pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::{convert_value, to_camel_case, to_dot_case, to_kebab_case, Case, Punctuation};
pub use config::Config;
pub use error::CaseError;

/// Outcome of converting one input, as reported by the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: serde_json::Value,
    pub result: Result<String, CaseError>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Convert every input with the configured case and punctuation policy.
pub fn convert_all(inputs: Vec<serde_json::Value>, config: &Config) -> Vec<Conversion> {
    inputs
        .into_iter()
        .map(|input| {
            let result = convert_value(&input, config.case, config.effective_punctuation());
            Conversion { input, result }
        })
        .collect()
}
