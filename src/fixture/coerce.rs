use serde_json::Value as JsonValue;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::data::{FieldSchema, Key, Value};
use crate::{Error, Result};

const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
// Fallback when the seconds are omitted; they default to zero.
const TIME_FORMAT_SHORT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Convert a raw JSON value into the representation a field's declared
/// schema asks for. Pure; a JSON null passes through as `None` untouched.
pub fn coerce(schema: &FieldSchema, raw: &JsonValue) -> Result<Option<Value>> {
    if raw.is_null() {
        return Ok(None);
    }

    let value = if schema.is_repeated() {
        let items = raw
            .as_array()
            .ok_or_else(|| mismatch(schema, "an array", raw))?;
        match schema {
            FieldSchema::Reference { .. } => {
                let mut keys = Vec::with_capacity(items.len());
                for item in items {
                    keys.push(Key::from_tuple(item)?);
                }
                Value::KeyList(keys)
            }
            _ => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(scalar(schema, item)?);
                }
                Value::List(values)
            }
        }
    } else {
        scalar(schema, raw)?
    };

    Ok(Some(value))
}

fn scalar(schema: &FieldSchema, raw: &JsonValue) -> Result<Value> {
    match schema {
        FieldSchema::Bool { .. } => raw
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| mismatch(schema, "a boolean", raw)),
        FieldSchema::Int { .. } => raw
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| mismatch(schema, "an integer", raw)),
        FieldSchema::Float { .. } => raw
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| mismatch(schema, "a number", raw)),
        FieldSchema::String { .. } => raw
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| mismatch(schema, "a string", raw)),
        FieldSchema::DateTime { .. } => {
            let text = expect_text(schema, raw)?;
            PrimitiveDateTime::parse(text, DATETIME_FORMAT)
                .map(Value::DateTime)
                .map_err(|err| bad_format(schema, text, &err))
        }
        FieldSchema::Date { .. } => {
            let text = expect_text(schema, raw)?;
            Date::parse(text, DATE_FORMAT)
                .map(Value::Date)
                .map_err(|err| bad_format(schema, text, &err))
        }
        FieldSchema::Time { .. } => {
            let text = expect_text(schema, raw)?;
            match Time::parse(text, TIME_FORMAT) {
                Ok(time) => Ok(Value::Time(time)),
                Err(_) => Time::parse(text, TIME_FORMAT_SHORT)
                    .map(Value::Time)
                    .map_err(|err| bad_format(schema, text, &err)),
            }
        }
        FieldSchema::Json { .. } => Ok(Value::Json(raw.clone())),
        FieldSchema::Reference { .. } => Key::from_tuple(raw).map(Value::Key),
    }
}

fn expect_text<'a>(schema: &FieldSchema, raw: &'a JsonValue) -> Result<&'a str> {
    raw.as_str().ok_or_else(|| mismatch(schema, "a string", raw))
}

fn mismatch(schema: &FieldSchema, expected: &str, raw: &JsonValue) -> Error {
    Error::InvalidFieldValue {
        field: schema.field_type().clone(),
        reason: format!("expected {expected}, got {raw}"),
    }
}

fn bad_format(schema: &FieldSchema, text: &str, err: &time::error::Parse) -> Error {
    Error::InvalidFieldValue {
        field: schema.field_type().clone(),
        reason: format!("{text:?} does not match the expected format: {err}"),
    }
}
