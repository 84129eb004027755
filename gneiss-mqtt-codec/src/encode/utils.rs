/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Internal utilities to encode MQTT 3.1.1 packets into a contiguous buffer.
 */

use crate::error::{GneissError, GneissResult};
use crate::mqtt::utils::*;

use log::*;

/// Largest value a variable length integer can carry (2 ^ 28 - 1)
pub const MAXIMUM_VARIABLE_LENGTH_INTEGER: usize = (1 << 28) - 1;

/// Returns how many bytes the variable length integer encoding of `value` takes up
pub fn compute_variable_length_integer_encode_size(value: usize) -> GneissResult<usize> {
    if value < 1usize << 7 {
        Ok(1)
    } else if value < 1usize << 14 {
        Ok(2)
    } else if value < 1usize << 21 {
        Ok(3)
    } else if value < 1usize << 28 {
        Ok(4)
    } else {
        let message = format!("compute_variable_length_integer_encode_size - value {} exceeds the protocol maximum (2 ^ 28 - 1)", value);
        debug!("{}", message);
        Err(GneissError::new_encoding_failure(message))
    }
}

/// Appends the variable length integer encoding of `value` to `dest`.
pub fn encode_vli(value: u32, dest: &mut Vec<u8>) -> GneissResult<()> {
    if value > MAXIMUM_VARIABLE_LENGTH_INTEGER as u32 {
        let message = format!("encode_vli - value {} exceeds the protocol maximum (2 ^ 28 - 1)", value);
        debug!("{}", message);
        return Err(GneissError::new_encoding_failure(message));
    }

    let mut done = false;
    let mut val = value;
    while !done {
        let mut byte: u8 = (val & 0x7F) as u8;
        val /= 128;

        if val != 0 {
            byte |= 128;
        }

        dest.push(byte);

        done = val == 0;
    }

    Ok(())
}

pub(crate) fn encode_u8(value: u8, dest: &mut Vec<u8>) {
    dest.push(value);
}

pub(crate) fn encode_u16(value: u16, dest: &mut Vec<u8>) {
    dest.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn encode_length_prefixed_bytes(value: &[u8], field_name: &str, dest: &mut Vec<u8>) -> GneissResult<()> {
    if value.len() > MAXIMUM_BINARY_PROPERTY_LENGTH {
        let message = format!("encode_length_prefixed_bytes - {} length ({}) exceeds 65535 bytes", field_name, value.len());
        debug!("{}", message);
        return Err(GneissError::new_encoding_failure(message));
    }

    encode_u16(value.len() as u16, dest);
    dest.extend_from_slice(value);

    Ok(())
}

pub(crate) fn encode_length_prefixed_string(value: &str, field_name: &str, dest: &mut Vec<u8>) -> GneissResult<()> {
    if value.len() > MAXIMUM_STRING_PROPERTY_LENGTH {
        let message = format!("encode_length_prefixed_string - {} length ({}) exceeds 65535 bytes", field_name, value.len());
        debug!("{}", message);
        return Err(GneissError::new_encoding_failure(message));
    }

    encode_length_prefixed_bytes(value.as_bytes(), field_name, dest)
}

macro_rules! define_ack_packet_encoding_impl {
    ($function_name: ident, $packet_type: ident) => {
        pub(crate) fn $function_name(packet: &$packet_type, dest: &mut Vec<u8>) -> GneissResult<()> {
            encode_u16(packet.packet_id, dest);

            Ok(())
        }
    };
}

pub(crate) use define_ack_packet_encoding_impl;

macro_rules! define_empty_packet_encoding_impl {
    ($function_name: ident, $packet_type: ident) => {
        pub(crate) fn $function_name(_: &$packet_type, _: &mut Vec<u8>) -> GneissResult<()> {
            Ok(())
        }
    };
}

pub(crate) use define_empty_packet_encoding_impl;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::utils::*;
    use assert_matches::assert_matches;

    macro_rules! assert_vli_encoding_equals {
        ($target: ident, $value: expr, $expected_result: expr) => {{
            let mut $target = Vec::<u8>::with_capacity(4);
            assert!(encode_vli($value, &mut $target).is_ok());
            assert_eq!($expected_result, &$target[..]);
        }};
    }

    macro_rules! assert_vli_encoding_fails {
        ($target: ident, $value: expr) => {{
            let mut $target = Vec::<u8>::with_capacity(4);
            assert_matches!(encode_vli($value, &mut $target), Err(GneissError::EncodingFailure(_)));
            assert!($target.is_empty());
        }};
    }

    macro_rules! assert_vli_round_trip_success {
        ($value: expr) => {{
            let mut dest = Vec::<u8>::with_capacity(4);
            assert!(encode_vli($value, &mut dest).is_ok());

            for i in 1..dest.len() {
                assert_matches!(decode_vli(&dest[..i]), Err(GneissError::MalformedVarint(_)));
            }

            let expected_bytes =
                compute_variable_length_integer_encode_size($value as usize).unwrap();
            assert_eq!(expected_bytes, dest.len());
            assert_eq!(($value, expected_bytes), decode_vli(&dest).unwrap());
        }};
    }

    #[test]
    fn vli_round_trips() {
        assert_vli_round_trip_success!(0);
        assert_vli_round_trip_success!(1);
        assert_vli_round_trip_success!(47);
        assert_vli_round_trip_success!(127);
        assert_vli_round_trip_success!(128);
        assert_vli_round_trip_success!(129);
        assert_vli_round_trip_success!(511);
        assert_vli_round_trip_success!(8000);
        assert_vli_round_trip_success!(16383);
        assert_vli_round_trip_success!(16384);
        assert_vli_round_trip_success!(16385);
        assert_vli_round_trip_success!(100000);
        assert_vli_round_trip_success!(2097151);
        assert_vli_round_trip_success!(2097152);
        assert_vli_round_trip_success!(4200000);
        assert_vli_round_trip_success!(34200000);
        assert_vli_round_trip_success!(MAXIMUM_VARIABLE_LENGTH_INTEGER as u32);
    }

    #[test]
    fn encode_vli_successes() {
        assert_vli_encoding_equals!(dest, 0, [0u8]);
        assert_vli_encoding_equals!(dest, 1, [1u8]);
        assert_vli_encoding_equals!(dest, 127, [127u8]);
        assert_vli_encoding_equals!(dest, 128, [0x80u8, 1u8]);
        assert_vli_encoding_equals!(dest, 129, [0x81u8, 1u8]);
        assert_vli_encoding_equals!(dest, 321, [0xC1u8, 0x02u8]);
        assert_vli_encoding_equals!(dest, 16384, [0x80u8, 0x80u8, 0x01u8]);
        assert_vli_encoding_equals!(dest, 268_435_455, [0xFFu8, 0xFFu8, 0xFFu8, 0x7Fu8]);
    }

    #[test]
    fn encode_vli_failures() {
        assert_vli_encoding_fails!(dest, MAXIMUM_VARIABLE_LENGTH_INTEGER as u32 + 1);
        assert_vli_encoding_fails!(dest, 0x80000000u32);
        assert_vli_encoding_fails!(dest, 0xFFFFFFFFu32);
    }

    #[test]
    #[rustfmt::skip]
    fn compute_vli_encoding_size_successes() {
        assert_eq!(1, compute_variable_length_integer_encode_size(0).unwrap());
        assert_eq!(1, compute_variable_length_integer_encode_size(1).unwrap());
        assert_eq!(1, compute_variable_length_integer_encode_size(127).unwrap());
        assert_eq!(2, compute_variable_length_integer_encode_size(128).unwrap());
        assert_eq!(2, compute_variable_length_integer_encode_size(256).unwrap());
        assert_eq!(2, compute_variable_length_integer_encode_size(16383).unwrap());
        assert_eq!(3, compute_variable_length_integer_encode_size(16384).unwrap());
        assert_eq!(3, compute_variable_length_integer_encode_size(16385).unwrap());
        assert_eq!(3, compute_variable_length_integer_encode_size(2097151).unwrap());
        assert_eq!(4, compute_variable_length_integer_encode_size(2097152).unwrap());
        assert_eq!(4, compute_variable_length_integer_encode_size(MAXIMUM_VARIABLE_LENGTH_INTEGER).unwrap());
    }

    #[test]
    #[rustfmt::skip]
    fn compute_vli_encoding_size_failures() {
        assert!(compute_variable_length_integer_encode_size(MAXIMUM_VARIABLE_LENGTH_INTEGER + 1).is_err());
        assert!(compute_variable_length_integer_encode_size(u32::MAX as usize).is_err());
        assert!(compute_variable_length_integer_encode_size(usize::MAX).is_err());
    }

    #[test]
    fn length_prefixed_string_encoding() {
        let mut dest = Vec::new();
        encode_length_prefixed_string("MQTT", "ProtocolName", &mut dest).unwrap();
        assert_eq!(vec![0u8, 4, 77, 81, 84, 84], dest);

        let mut dest = Vec::new();
        encode_length_prefixed_string("", "ClientID", &mut dest).unwrap();
        assert_eq!(vec![0u8, 0], dest);
    }

    #[test]
    fn length_prefixed_string_too_long() {
        let mut dest = Vec::new();
        let value = "a".repeat(65536);
        assert_matches!(encode_length_prefixed_string(&value, "TopicName", &mut dest), Err(GneissError::EncodingFailure(_)));
        assert!(dest.is_empty());
    }
}
