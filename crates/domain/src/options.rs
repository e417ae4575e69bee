use std::fmt;

use serde::{Deserialize, Serialize};
use sta_convert_shared_kernel::DomainError;

/// Selects how binary payloads are represented when an artifact is decoded.
///
/// The numeric codes are part of the command-line surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryMode {
    /// `0`: list of byte values.
    Bytes,
    /// `1`: `"@base64@<data>"`, accepted back by the encoder.
    Base64,
    /// `2`: `"@binary@<size>"` placeholder.
    #[default]
    Placeholder,
}

impl BinaryMode {
    pub fn code(self) -> u8 {
        match self {
            Self::Bytes => 0,
            Self::Base64 => 1,
            Self::Placeholder => 2,
        }
    }
}

impl TryFrom<u8> for BinaryMode {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Bytes),
            1 => Ok(Self::Base64),
            2 => Ok(Self::Placeholder),
            other => Err(DomainError::UnknownBinaryMode(other)),
        }
    }
}

impl fmt::Display for BinaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
