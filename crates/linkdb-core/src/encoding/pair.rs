//! Serialization for vertex IDs and pair keys.
//!
//! # Format
//!
//! A [`VertexId`] is 4 bytes, big-endian two's complement.
//!
//! A pair key is encoded as:
//! - 1 byte format version
//! - 1 byte variant tag ([`TAG_ARC`] or [`TAG_EDGE`])
//! - 4 bytes first vertex ID
//! - 4 bytes second vertex ID
//!
//! Edges are written in construction order, so decoding gives back the same
//! `first()`/`second()` the encoder saw.

use crate::error::CoreError;
use crate::types::{Arc, Edge, VertexId, VertexPair};

use super::traits::{take, Decoder, Encoder, FORMAT_VERSION};

/// Variant tag for [`Arc`].
pub const TAG_ARC: u8 = 0;

/// Variant tag for [`Edge`].
pub const TAG_EDGE: u8 = 1;

/// Encoded size of a pair key in bytes.
pub const PAIR_ENCODED_LEN: usize = 10;

impl Encoder for VertexId {
    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError> {
        buf.extend_from_slice(&self.as_i32().to_be_bytes());
        Ok(())
    }
}

impl Decoder for VertexId {
    fn decode_from(input: &mut &[u8]) -> Result<Self, CoreError> {
        let bytes = take::<4>(input, "vertex ID")?;
        Ok(Self::new(i32::from_be_bytes(bytes)))
    }
}

fn encode_pair<P: VertexPair>(pair: &P, tag: u8, buf: &mut Vec<u8>) -> Result<(), CoreError> {
    buf.reserve(PAIR_ENCODED_LEN);
    buf.push(FORMAT_VERSION);
    buf.push(tag);
    pair.first().encode_to(buf)?;
    pair.second().encode_to(buf)
}

fn decode_pair<P: VertexPair>(input: &mut &[u8], expected_tag: u8) -> Result<P, CoreError> {
    let [version] = take::<1>(input, "format version")?;
    if version != FORMAT_VERSION {
        return Err(CoreError::Encoding(format!(
            "unsupported format version: {version}, expected {FORMAT_VERSION}"
        )));
    }

    let [tag] = take::<1>(input, "pair tag")?;
    if tag != expected_tag {
        return Err(CoreError::Encoding(format!(
            "unexpected pair tag: {tag}, expected {expected_tag}"
        )));
    }

    let first = VertexId::decode_from(input)?;
    let second = VertexId::decode_from(input)?;
    Ok(P::from_ids(first, second))
}

impl Encoder for Arc {
    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError> {
        encode_pair(self, TAG_ARC, buf)
    }
}

impl Decoder for Arc {
    fn decode_from(input: &mut &[u8]) -> Result<Self, CoreError> {
        decode_pair(input, TAG_ARC)
    }
}

impl Encoder for Edge {
    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError> {
        encode_pair(self, TAG_EDGE, buf)
    }
}

impl Decoder for Edge {
    fn decode_from(input: &mut &[u8]) -> Result<Self, CoreError> {
        decode_pair(input, TAG_EDGE)
    }
}
