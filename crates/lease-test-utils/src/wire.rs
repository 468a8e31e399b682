//! Hand-built Protobuf wire fragments.
//!
//! These bypass `prost` so tests can feed the decoder bytes a newer (or
//! broken) producer would send.

/// Wire type of a varint field.
pub const WIRE_VARINT: u8 = 0;
/// Wire type of a fixed 64-bit field.
pub const WIRE_FIXED64: u8 = 1;
/// Wire type of a length-delimited field.
pub const WIRE_LEN: u8 = 2;
/// Wire type of a fixed 32-bit field.
pub const WIRE_FIXED32: u8 = 5;

/// Encodes `value` as a base-128 varint.
#[allow(clippy::cast_possible_truncation)]
pub fn varint(mut value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Encodes a field key: `(field_number << 3) | wire_type`.
pub fn key(field_number: u32, wire_type: u8) -> Vec<u8> {
    varint((u64::from(field_number) << 3) | u64::from(wire_type))
}

/// A complete varint field. Negative `int32` values are sign-extended to 64 bits.
#[allow(clippy::cast_sign_loss)]
pub fn varint_field(field_number: u32, value: i64) -> Vec<u8> {
    let mut out = key(field_number, WIRE_VARINT);
    out.extend(varint(value as u64));
    out
}

/// A complete length-delimited field.
pub fn len_field(field_number: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = key(field_number, WIRE_LEN);
    out.extend(varint(payload.len() as u64));
    out.extend_from_slice(payload);
    out
}

/// A complete fixed 32-bit field.
pub fn fixed32_field(field_number: u32, value: u32) -> Vec<u8> {
    let mut out = key(field_number, WIRE_FIXED32);
    out.extend_from_slice(&value.to_le_bytes());
    out
}

/// A complete fixed 64-bit field.
pub fn fixed64_field(field_number: u32, value: u64) -> Vec<u8> {
    let mut out = key(field_number, WIRE_FIXED64);
    out.extend_from_slice(&value.to_le_bytes());
    out
}
