// crates/infra/src/codec/writer.rs
use sta_convert_shared_kernel::{CodecError, CodecResult};

use super::{
    location::Location,
    value::{STA_MAGIC, StaValue},
};

/// Serialise a full STA file: magic header followed by `value`.
pub fn encode_document(value: &StaValue) -> CodecResult<Vec<u8>> {
    let mut out = Vec::with_capacity(256);
    out.extend_from_slice(&STA_MAGIC.to_le_bytes());
    let mut location = Location::default();
    write_value(value, &mut out, &mut location)?;
    Ok(out)
}

fn write_value(value: &StaValue, out: &mut Vec<u8>, location: &mut Location) -> CodecResult<()> {
    out.push(value.type_code() as u8);
    match value {
        // nil carries one padding byte
        StaValue::Nil => out.push(0),
        StaValue::Int(v) => out.extend_from_slice(&v.to_le_bytes()),
        StaValue::Float(v) => out.extend_from_slice(&v.to_le_bytes()),
        StaValue::String(s) => write_bytes(s.as_bytes(), out, location)?,
        StaValue::Binary(bytes) => write_bytes(bytes, out, location)?,
        StaValue::List(items) => {
            write_len(items.len(), out, location)?;
            for (index, item) in items.iter().enumerate() {
                location.push_index(index);
                write_value(item, out, location)?;
                location.pop();
            }
        }
        StaValue::Dict(entries) => {
            write_len(entries.len(), out, location)?;
            for (key, item) in entries {
                // keys are bare strings without a type tag
                write_bytes(key.as_bytes(), out, location)?;
                location.push_key(key);
                write_value(item, out, location)?;
                location.pop();
            }
        }
        StaValue::Boolean(b) => out.push(u8::from(*b)),
    }
    Ok(())
}

fn write_bytes(bytes: &[u8], out: &mut Vec<u8>, location: &Location) -> CodecResult<()> {
    write_len(bytes.len(), out, location)?;
    out.extend_from_slice(bytes);
    Ok(())
}

fn write_len(len: usize, out: &mut Vec<u8>, location: &Location) -> CodecResult<()> {
    let len32 = i32::try_from(len).map_err(|_| CodecError::LengthOverflow { location: location.to_string(), len })?;
    out.extend_from_slice(&len32.to_le_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn header_and_scalar_layout() {
        let bytes = encode_document(&StaValue::Int(-2)).unwrap();
        assert_eq!(bytes, [0x29, 0x09, 0x91, 0x19, 1, 0xFE, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn nil_has_padding_byte() {
        let bytes = encode_document(&StaValue::Nil).unwrap();
        assert_eq!(&bytes[4..], &[0, 0]);
    }

    #[test]
    fn dict_keys_are_untagged_and_sorted() {
        let mut entries = BTreeMap::new();
        entries.insert("b".to_string(), StaValue::Boolean(true));
        entries.insert("a".to_string(), StaValue::String("x".into()));
        let bytes = encode_document(&StaValue::Dict(entries)).unwrap();

        let expected: Vec<u8> = [
            &[6u8, 2, 0, 0, 0][..],
            &[1, 0, 0, 0, b'a'],
            &[3, 1, 0, 0, 0, b'x'],
            &[1, 0, 0, 0, b'b'],
            &[7, 1],
        ]
        .concat();
        assert_eq!(&bytes[4..], expected.as_slice());
    }
}
