//! ASN.1 DER Tag-Length-Value reader and writer.
//!
//! Only the subset of DER needed for key material interchange is handled:
//!
//! - single-byte tags (no high-tag-number form)
//! - definite lengths, short form (`< 0x80`) or long form (`0x80 | N`, `1 <= N <= 4`)
//!
//! Indefinite lengths are a BER feature and never appear in DER, so they are
//! rejected like any other malformed length field.
//!
//! Every function borrows from the input buffer; nothing is copied until the
//! caller decides to own the bytes.

use crate::errors::DerError;

/// Largest number of extension bytes accepted in a long-form length field.
pub const MAX_LENGTH_OCTETS: usize = 4;

const LONG_FORM: u8 = 0x80;

/// Universal tags used by RSA key structures.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asn1Type {
    Integer = 0x02,
    BitString = 0x03,
    OctetString = 0x04,
    Null = 0x05,
    ObjectIdentifier = 0x06,
    Sequence = 0x30,
}

impl From<Asn1Type> for u8 {
    fn from(t: Asn1Type) -> u8 {
        t as u8
    }
}

/// One parsed Tag-Length-Value unit.
///
/// `length` is the raw length field as it appears on the wire (one byte in
/// short form, `1 + N` bytes in long form). `value.len()` always equals the
/// integer that field decodes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlvTriplet<'a> {
    pub tag: u8,
    pub length: &'a [u8],
    pub value: &'a [u8],
}

impl TlvTriplet<'_> {
    /// Number of buffer bytes this triplet occupies (tag + length field + value).
    pub fn encoded_len(&self) -> usize {
        1 + self.length.len() + self.value.len()
    }
}

/// Parse the TLV triplet at the start of `buffer`.
///
/// The remainder after the triplet is not returned; slice it off with
/// [`TlvTriplet::encoded_len`] or use [`skip`].
///
/// # Errors
///
/// - [`DerError::IncorrectTlvLength`] if `buffer` has fewer than two bytes.
/// - [`DerError::IncorrectLengthFieldLength`] if a long-form length declares zero
///   or more than [`MAX_LENGTH_OCTETS`] extension bytes, or more than remain.
/// - [`DerError::IncorrectValueLength`] if the decoded length runs past the end
///   of `buffer`.
pub fn next_tlv_triplet(buffer: &[u8]) -> Result<TlvTriplet<'_>, DerError> {
    let [tag, first, rest @ ..] = buffer else {
        return Err(DerError::IncorrectTlvLength);
    };

    let (length_field_len, value_len) = if *first < LONG_FORM {
        (1, usize::from(*first))
    } else {
        let octets = usize::from(first & !LONG_FORM);
        if octets == 0 || octets > MAX_LENGTH_OCTETS || octets > rest.len() {
            return Err(DerError::IncorrectLengthFieldLength);
        }
        let decoded = rest[..octets]
            .iter()
            .fold(0u32, |acc, b| (acc << 8) | u32::from(*b));
        let decoded = usize::try_from(decoded).map_err(|_| DerError::IncorrectLengthFieldLength)?;
        (1 + octets, decoded)
    };

    let header_len = 1 + length_field_len;
    let available = buffer.len() - header_len;
    if available < value_len {
        return Err(DerError::IncorrectValueLength);
    }

    Ok(TlvTriplet {
        tag: *tag,
        length: &buffer[1..header_len],
        value: &buffer[header_len..header_len + value_len],
    })
}

fn expect_triplet(buffer: &[u8], expected: u8) -> Result<TlvTriplet<'_>, DerError> {
    let triplet = next_tlv_triplet(buffer)?;
    if triplet.tag != expected {
        return Err(DerError::UnexpectedTag {
            expected,
            found: triplet.tag,
        });
    }
    Ok(triplet)
}

/// Return the value of the triplet at the start of `buffer`, which must carry `tag`.
///
/// # Errors
///
/// Any [`next_tlv_triplet`] error, or [`DerError::UnexpectedTag`] on a tag mismatch.
pub fn read(buffer: &[u8], tag: impl Into<u8>) -> Result<&[u8], DerError> {
    expect_triplet(buffer, tag.into()).map(|t| t.value)
}

/// Step over the triplet at the start of `buffer`, which must carry `tag`, and
/// return everything after it. The remainder may be empty.
///
/// # Errors
///
/// Same as [`read`].
pub fn skip(buffer: &[u8], tag: impl Into<u8>) -> Result<&[u8], DerError> {
    let triplet = expect_triplet(buffer, tag.into())?;
    Ok(&buffer[triplet.encoded_len()..])
}

/// Encode `len` as a minimal DER length field.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < usize::from(LONG_FORM) {
        return vec![len as u8];
    }
    let be = len.to_be_bytes();
    let leading = be.iter().take_while(|b| **b == 0).count();
    let octets = &be[leading..];
    let mut out = Vec::with_capacity(1 + octets.len());
    out.push(LONG_FORM | octets.len() as u8);
    out.extend_from_slice(octets);
    out
}

/// Encode a complete TLV triplet.
pub fn encode_tlv(tag: impl Into<u8>, value: &[u8]) -> Vec<u8> {
    let length = encode_length(value.len());
    let mut out = Vec::with_capacity(1 + length.len() + value.len());
    out.push(tag.into());
    out.extend_from_slice(&length);
    out.extend_from_slice(value);
    out
}
