// crates/infra/src/codec/reader.rs
use std::collections::BTreeMap;

use sta_convert_shared_kernel::{CodecError, CodecResult};

use super::{
    location::Location,
    value::{STA_MAGIC, StaValue, TypeCode},
};

/// Deepest list/dict nesting accepted from an artifact.
pub const MAX_DEPTH: usize = 512;

/// Parse a full STA file. Bytes after the root value are ignored.
pub fn decode_document(bytes: &[u8]) -> CodecResult<StaValue> {
    let mut reader = Reader { bytes, pos: 0, depth: 0, location: Location::default() };
    let magic = reader.i32()?;
    if magic != STA_MAGIC {
        return Err(CodecError::BadMagic { expected: STA_MAGIC as u32, found: magic as u32 });
    }
    reader.value()
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    location: Location,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        let end = self.pos.checked_add(n).filter(|&end| end <= self.bytes.len());
        let Some(end) = end else {
            return Err(CodecError::UnexpectedEof { location: self.location.to_string() });
        };
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn u8(&mut self) -> CodecResult<u8> {
        Ok(self.array::<1>()?[0])
    }

    fn i32(&mut self) -> CodecResult<i32> {
        self.array::<4>().map(i32::from_le_bytes)
    }

    fn len(&mut self) -> CodecResult<usize> {
        let length = self.i32()?;
        usize::try_from(length).map_err(|_| CodecError::NegativeLength { location: self.location.to_string(), length })
    }

    fn bytes(&mut self) -> CodecResult<&'a [u8]> {
        let len = self.len()?;
        self.take(len)
    }

    fn string(&mut self) -> CodecResult<String> {
        let raw = self.bytes()?;
        String::from_utf8(raw.to_vec()).map_err(|_| CodecError::InvalidUtf8 { location: self.location.to_string() })
    }

    fn descend(&mut self) -> CodecResult<()> {
        if self.depth == MAX_DEPTH {
            return Err(CodecError::TooDeep { location: self.location.to_string(), limit: MAX_DEPTH });
        }
        self.depth += 1;
        Ok(())
    }

    fn value(&mut self) -> CodecResult<StaValue> {
        let code = self.u8()?;
        let Some(type_code) = TypeCode::from_byte(code) else {
            return Err(CodecError::UnknownTypeCode { location: self.location.to_string(), code });
        };
        Ok(match type_code {
            TypeCode::Nil => {
                self.u8()?;
                StaValue::Nil
            }
            TypeCode::Int => StaValue::Int(self.i32()?),
            TypeCode::Float => StaValue::Float(f32::from_le_bytes(self.array::<4>()?)),
            TypeCode::String => StaValue::String(self.string()?),
            TypeCode::Binary => StaValue::Binary(self.bytes()?.to_vec()),
            TypeCode::List => {
                self.descend()?;
                let count = self.len()?;
                // cap the pre-allocation, the count is untrusted
                let mut items = Vec::with_capacity(count.min(1024));
                for index in 0..count {
                    self.location.push_index(index);
                    items.push(self.value()?);
                    self.location.pop();
                }
                self.depth -= 1;
                StaValue::List(items)
            }
            TypeCode::Dict => {
                self.descend()?;
                let count = self.len()?;
                let mut entries = BTreeMap::new();
                for _ in 0..count {
                    let key = self.string()?;
                    self.location.push_key(&key);
                    let item = self.value()?;
                    self.location.pop();
                    entries.insert(key, item);
                }
                self.depth -= 1;
                StaValue::Dict(entries)
            }
            TypeCode::Boolean => StaValue::Boolean(self.u8()? != 0),
        })
    }
}
