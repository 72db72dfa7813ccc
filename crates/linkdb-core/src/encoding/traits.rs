//! Encoding and decoding traits for serialization.

use crate::CoreError;

/// A trait for types that can be encoded to bytes.
///
/// This trait provides a unified interface for serializing types to a binary format
/// suitable for storage or transmission. Implementations should produce compact output.
pub trait Encoder: Sized {
    /// Encode this value to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails (e.g., due to invalid data).
    fn encode(&self) -> Result<Vec<u8>, CoreError> {
        let mut buf = Vec::new();
        self.encode_to(&mut buf)?;
        Ok(buf)
    }

    /// Encode this value into a pre-allocated buffer.
    ///
    /// This method appends the encoded bytes to the provided buffer,
    /// which can be more efficient when encoding multiple values.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError>;
}

/// A trait for types that can be decoded from bytes.
///
/// Implementors read from a cursor (a byte slice that is advanced past the
/// consumed bytes), which lets several values be decoded back to back.
pub trait Decoder: Sized {
    /// Decode a value from the front of `input`, advancing it.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails (e.g., invalid data, truncated input).
    fn decode_from(input: &mut &[u8]) -> Result<Self, CoreError>;

    /// Decode a value that must span all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or if bytes are left over.
    fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        let mut input = bytes;
        let value = Self::decode_from(&mut input)?;
        if !input.is_empty() {
            return Err(CoreError::Encoding(format!("{} trailing bytes after value", input.len())));
        }
        Ok(value)
    }
}

/// Format version for serialized data.
///
/// This version number is embedded in serialized data to support
/// forward-compatible schema evolution.
pub const FORMAT_VERSION: u8 = 1;

/// Split `N` bytes off the front of `input`.
pub(crate) fn take<const N: usize>(input: &mut &[u8], what: &str) -> Result<[u8; N], CoreError> {
    if input.len() < N {
        return Err(CoreError::truncated(what));
    }
    let (head, rest) = input.split_at(N);
    let bytes: [u8; N] = head.try_into().map_err(|_| CoreError::truncated(what))?;
    *input = rest;
    Ok(bytes)
}
