//! Human-readable projections of API responses

use serde_json::Value;

use crate::application::ApplicationError;
use crate::cli::error::{CliError, CliResult};
use crate::domain::Operation;

/// Pretty-print a response body: 2-space indent, non-ASCII kept as is.
pub fn format_json(json: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(json).map_err(|e| ApplicationError::Encode(e).into())
}

/// Render the operation-specific projection, one entry per output line.
pub fn project(operation: Operation, json: &Value) -> CliResult<Vec<String>> {
    match operation {
        // word_list: sentences → tokens → fields
        Operation::Morph => {
            let mut lines = Vec::new();
            for sentence in array(operation, json, "word_list")? {
                for word in as_array(operation, sentence, "word_list")? {
                    lines.push(join_fields(operation, word, ",")?);
                }
            }
            Ok(lines)
        }
        Operation::Similarity => Ok(vec![scalar(field(operation, json, "score")?)]),
        Operation::Hiragana => Ok(vec![scalar(field(operation, json, "converted")?)]),
        Operation::Entity => array(operation, json, "ne_list")?
            .iter()
            .map(|ne| join_fields(operation, ne, ","))
            .collect(),
        Operation::Shortsum => Ok(vec![scalar(field(operation, json, "summary")?)]),
        // keywords: [{word: score}, ...]
        Operation::Keyword => {
            let mut lines = Vec::new();
            for entry in array(operation, json, "keywords")? {
                let object = entry
                    .as_object()
                    .ok_or_else(|| unexpected(operation, "keywords entry is not an object"))?;
                for (word, score) in object {
                    lines.push(format!("{},{}", word, scalar(score)));
                }
            }
            Ok(lines)
        }
        // datetime_list: [[expression, normalized], ...]
        Operation::Chrono => array(operation, json, "datetime_list")?
            .iter()
            .map(|pair| {
                let items = as_array(operation, pair, "datetime_list")?;
                match items.as_slice() {
                    [expression, value, ..] => {
                        Ok(format!("{}: {}", scalar(expression), scalar(value)))
                    }
                    _ => Err(unexpected(operation, "datetime_list entry needs two items")),
                }
            })
            .collect(),
    }
}

fn field<'a>(operation: Operation, json: &'a Value, name: &str) -> CliResult<&'a Value> {
    json.get(name)
        .ok_or_else(|| unexpected(operation, &format!("missing field \"{}\"", name)))
}

fn array<'a>(operation: Operation, json: &'a Value, name: &str) -> CliResult<&'a Vec<Value>> {
    as_array(operation, field(operation, json, name)?, name)
}

fn as_array<'a>(operation: Operation, value: &'a Value, name: &str) -> CliResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| unexpected(operation, &format!("\"{}\" is not a list", name)))
}

fn join_fields(operation: Operation, value: &Value, separator: &str) -> CliResult<String> {
    let items = value
        .as_array()
        .ok_or_else(|| unexpected(operation, "entry is not a list"))?;
    Ok(items.iter().map(scalar).collect::<Vec<_>>().join(separator))
}

/// Strings print bare, everything else as JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn unexpected(operation: Operation, detail: &str) -> CliError {
    CliError::UnexpectedResponse {
        operation,
        detail: detail.to_string(),
    }
}
