// crates/infra/src/codec/commands.rs
//! JSON source documents to [`StaValue`].
//!
//! Strings starting with `@` may be commands:
//!
//! | Command            | Result                                   |
//! |--------------------|------------------------------------------|
//! | `@nil`             | nil                                      |
//! | `@date`            | current local date, `%Y-%m-%d`           |
//! | `@time`            | current local time, `%H:%M:%S`           |
//! | `@datetime`        | `%Y-%m-%d %H:%M:%S`                      |
//! | `@base64@<data>`   | binary decoded from standard base64      |
//! | `@file@<path>`     | binary contents of a file                |
//! | `@binary...`       | rejected, only produced by the viewer    |
//!
//! Any other `@` string is kept verbatim.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Local};
use serde_json::{Number, Value};
use sta_convert_shared_kernel::{CodecError, CodecResult};

use super::{location::Location, value::StaValue};

/// Environment used to expand commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory relative `@file@` paths are resolved against.
    pub base_dir: PathBuf,
    pub now: DateTime<Local>,
}

impl CommandContext {
    pub fn for_source(source: &Path) -> Self {
        let base_dir = source.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { base_dir, now: Local::now() }
    }
}

/// Convert a parsed JSON document, expanding `@` commands.
pub fn from_json(value: &Value, ctx: &CommandContext) -> CodecResult<StaValue> {
    let mut location = Location::default();
    convert(value, ctx, &mut location)
}

fn convert(value: &Value, ctx: &CommandContext, location: &mut Location) -> CodecResult<StaValue> {
    Ok(match value {
        Value::Null => StaValue::Nil,
        Value::Bool(b) => StaValue::Boolean(*b),
        Value::Number(n) => number(n, location)?,
        Value::String(s) => string(s, ctx, location)?,
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                location.push_index(index);
                out.push(convert(item, ctx, location)?);
                location.pop();
            }
            StaValue::List(out)
        }
        Value::Object(map) => {
            let mut out = BTreeMap::new();
            for (key, item) in map {
                location.push_key(key);
                out.insert(key.clone(), convert(item, ctx, location)?);
                location.pop();
            }
            StaValue::Dict(out)
        }
    })
}

#[allow(clippy::cast_possible_truncation)]
fn number(n: &Number, location: &Location) -> CodecResult<StaValue> {
    if n.is_i64() || n.is_u64() {
        return n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(StaValue::Int)
            .ok_or_else(|| CodecError::IntegerOutOfRange { location: location.to_string(), value: n.to_string() });
    }
    let value = n.as_f64().unwrap_or_default();
    if value.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value) {
        return Ok(StaValue::Int(value as i32));
    }
    // f64 -> f32 narrowing is the format's float width
    Ok(StaValue::Float(value as f32))
}

fn string(s: &str, ctx: &CommandContext, location: &Location) -> CodecResult<StaValue> {
    let Some(rest) = s.strip_prefix('@') else {
        return Ok(StaValue::String(s.to_string()));
    };
    let (command, payload) = match rest.split_once('@') {
        Some((command, payload)) => (command, Some(payload)),
        None => (rest, None),
    };

    match command {
        "nil" => Ok(StaValue::Nil),
        "date" => Ok(StaValue::String(ctx.now.format("%Y-%m-%d").to_string())),
        "time" => Ok(StaValue::String(ctx.now.format("%H:%M:%S").to_string())),
        "datetime" => Ok(StaValue::String(ctx.now.format("%Y-%m-%d %H:%M:%S").to_string())),
        "binary" => Err(CodecError::UnsupportedCommand { location: location.to_string(), command: s.to_string() }),
        "base64" => {
            let payload = require_payload(command, payload, location)?;
            STANDARD
                .decode(payload)
                .map(StaValue::Binary)
                .map_err(|e| CodecError::InvalidBase64 { location: location.to_string(), details: e.to_string() })
        }
        "file" => {
            let payload = require_payload(command, payload, location)?;
            let path = ctx.base_dir.join(payload);
            match fs::read(&path) {
                Ok(bytes) if !bytes.is_empty() => Ok(StaValue::Binary(bytes)),
                _ => Err(CodecError::InvalidEmbeddedFile { location: location.to_string(), path }),
            }
        }
        _ => Ok(StaValue::String(s.to_string())),
    }
}

fn require_payload<'a>(command: &str, payload: Option<&'a str>, location: &Location) -> CodecResult<&'a str> {
    payload
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CodecError::MalformedCommand { location: location.to_string(), command: command.to_string() })
}
