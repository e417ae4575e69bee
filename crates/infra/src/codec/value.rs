// crates/infra/src/codec/value.rs
use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use sta_convert_domain::BinaryMode;

/// Leading `i32` of every STA file.
pub const STA_MAGIC: i32 = 0x1991_0929;

/// In-memory STA document.
#[derive(Debug, Clone, PartialEq)]
pub enum StaValue {
    Nil,
    Int(i32),
    Float(f32),
    String(String),
    Binary(Vec<u8>),
    List(Vec<StaValue>),
    Dict(BTreeMap<String, StaValue>),
    Boolean(bool),
}

/// Type tags as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeCode {
    Nil = 0,
    Int = 1,
    Float = 2,
    String = 3,
    Binary = 4,
    List = 5,
    Dict = 6,
    Boolean = 7,
}

impl TypeCode {
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => Self::Nil,
            1 => Self::Int,
            2 => Self::Float,
            3 => Self::String,
            4 => Self::Binary,
            5 => Self::List,
            6 => Self::Dict,
            7 => Self::Boolean,
            _ => return None,
        })
    }
}

impl StaValue {
    pub fn type_code(&self) -> TypeCode {
        match self {
            Self::Nil => TypeCode::Nil,
            Self::Int(_) => TypeCode::Int,
            Self::Float(_) => TypeCode::Float,
            Self::String(_) => TypeCode::String,
            Self::Binary(_) => TypeCode::Binary,
            Self::List(_) => TypeCode::List,
            Self::Dict(_) => TypeCode::Dict,
            Self::Boolean(_) => TypeCode::Boolean,
        }
    }

    /// Convert to a JSON value, rendering binary payloads according to `mode`.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn into_json(self, mode: BinaryMode) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::Nil => Value::Null,
            Self::Int(v) => Value::from(v),
            Self::Float(v) => serde_json::Number::from_f64(f64::from(v)).map_or(Value::Null, Value::Number),
            Self::String(s) => Value::String(s),
            Self::Binary(bytes) => match mode {
                BinaryMode::Bytes => Value::Array(bytes.into_iter().map(Value::from).collect()),
                BinaryMode::Base64 => Value::String(format!("@base64@{}", STANDARD.encode(bytes))),
                BinaryMode::Placeholder => Value::String(format!("@binary@{}", bytes.len())),
            },
            Self::List(items) => Value::Array(items.into_iter().map(|item| item.into_json(mode)).collect()),
            Self::Dict(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, v.into_json(mode))).collect())
            }
            Self::Boolean(b) => Value::Bool(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn binary_rendering_follows_mode() {
        let blob = || StaValue::Binary(vec![1, 2, 3]);
        assert_eq!(blob().into_json(BinaryMode::Bytes), json!([1, 2, 3]));
        assert_eq!(blob().into_json(BinaryMode::Base64), json!("@base64@AQID"));
        assert_eq!(blob().into_json(BinaryMode::Placeholder), json!("@binary@3"));
    }

    #[test]
    fn nan_becomes_null() {
        assert_eq!(StaValue::Float(f32::NAN).into_json(BinaryMode::default()), serde_json::Value::Null);
        assert_eq!(StaValue::Float(0.5).into_json(BinaryMode::default()), json!(0.5));
    }

    #[test]
    fn type_codes_match_tags() {
        for byte in 0..=7u8 {
            assert_eq!(TypeCode::from_byte(byte).map(|c| c as u8), Some(byte));
        }
        assert_eq!(TypeCode::from_byte(8), None);
    }
}
