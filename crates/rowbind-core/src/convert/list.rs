use crate::{stmt::Value, Error, Result};

const SEPARATOR: char = ',';

pub(super) fn join_ints(value: Value) -> Result<Value> {
    let items = match value {
        Value::Null => return Ok(Value::String(String::new())),
        Value::List(items) => items,
        other => {
            return Err(Error::conversion(
                "join_ints",
                format!("expected List, got {}", other.kind()),
            ))
        }
    };

    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::I32(v) => parts.push(v.to_string()),
            Value::I64(v) => parts.push(v.to_string()),
            other => {
                return Err(Error::conversion(
                    "join_ints",
                    format!("list item is {}, not an integer", other.kind()),
                ))
            }
        }
    }

    Ok(Value::String(parts.join(",")))
}

pub(super) fn join_strings(value: Value) -> Result<Value> {
    let items = match value {
        Value::Null => return Ok(Value::String(String::new())),
        Value::List(items) => items,
        other => {
            return Err(Error::conversion(
                "join_strings",
                format!("expected List, got {}", other.kind()),
            ))
        }
    };

    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(v) => parts.push(v),
            other => {
                return Err(Error::conversion(
                    "join_strings",
                    format!("list item is {}, not a string", other.kind()),
                ))
            }
        }
    }

    Ok(Value::String(parts.join(",")))
}

/// Lossy: empty segments and segments that are not 32-bit integers are
/// dropped without an error, so `"1, ,x,3"` decodes to `[1, 3]`.
pub(super) fn split_ints(value: Value) -> Result<Value> {
    let src = match value {
        Value::Null => return Ok(Value::List(vec![])),
        Value::String(src) => src,
        other => {
            return Err(Error::conversion(
                "split_ints",
                format!("expected String, got {}", other.kind()),
            ))
        }
    };

    let items = segments(&src)
        .filter_map(|segment| segment.parse::<i32>().ok())
        .map(Value::I32)
        .collect();

    Ok(Value::List(items))
}

pub(super) fn split_strings(value: Value) -> Result<Value> {
    let src = match value {
        Value::Null => return Ok(Value::List(vec![])),
        Value::String(src) => src,
        other => {
            return Err(Error::conversion(
                "split_strings",
                format!("expected String, got {}", other.kind()),
            ))
        }
    };

    let items = segments(&src)
        .map(|segment| Value::String(segment.to_string()))
        .collect();

    Ok(Value::List(items))
}

fn segments(src: &str) -> impl Iterator<Item = &str> {
    src.split(SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
