use anyhow::{Context, Result};
use serde_json::{Deserializer, Value};
use std::io::{BufRead, Read};

/// Read one plain-text input per line.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Value>> {
    reader
        .lines()
        .map(|line| {
            line.map(Value::String)
                .context("Failed to read input line")
        })
        .collect()
}

/// Read a stream of whitespace-separated JSON values. Top-level arrays are
/// flattened one level, so `["a", "b"] "c"` yields three inputs.
pub fn read_json_values<R: Read>(reader: R) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    for value in Deserializer::from_reader(reader).into_iter::<Value>() {
        match value.context("Failed to parse JSON input")? {
            Value::Array(items) => values.extend(items),
            other => values.push(other),
        }
    }
    Ok(values)
}
