/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Internal utilities to decode MQTT 3.1.1 packet fields from a byte slice.

Each helper consumes a field from the front of the slice, writes it into the supplied
location, and returns the remaining bytes.  Running out of bytes is reported as a
TruncatedPayload error naming the field.
 */

use crate::error::{GneissError, GneissResult};

use log::*;

/// Decodes a variable length integer from the front of `buffer`, returning the value and the
/// number of bytes it occupied.
pub fn decode_vli(buffer: &[u8]) -> GneissResult<(u32, usize)> {
    let mut value: u32 = 0;
    let mut shift: u32 = 0;
    let data_len = buffer.len();

    for i in 0..4 {
        if i >= data_len {
            let message = "decode_vli - input ended before the final byte of the variable length integer";
            debug!("{}", message);
            return Err(GneissError::new_malformed_varint(message));
        }

        let byte = buffer[i];
        value |= ((byte & 0x7F) as u32) << shift;
        shift += 7;

        if (byte & 0x80) == 0 {
            return Ok((value, i + 1));
        }
    }

    let message = "decode_vli - variable length integer continues past four bytes";
    debug!("{}", message);
    Err(GneissError::new_malformed_varint(message))
}

pub(crate) fn decode_u8<'a>(bytes: &'a[u8], value: &mut u8, field_name: &'static str) -> GneissResult<&'a[u8]> {
    if bytes.is_empty() {
        debug!("decode_u8 - {} is truncated", field_name);
        return Err(GneissError::new_truncated_payload(field_name));
    }

    *value = bytes[0];

    Ok(&bytes[1..])
}

pub(crate) fn decode_u16<'a>(bytes: &'a[u8], value: &mut u16, field_name: &'static str) -> GneissResult<&'a[u8]> {
    if bytes.len() < 2 {
        debug!("decode_u16 - {} is truncated", field_name);
        return Err(GneissError::new_truncated_payload(field_name));
    }

    *value = u16::from_be_bytes([bytes[0], bytes[1]]);

    Ok(&bytes[2..])
}

pub(crate) fn decode_u8_as_enum<'a, T>(bytes: &'a[u8], value: &mut T, converter: fn(u8) -> GneissResult<T>, field_name: &'static str) -> GneissResult<&'a[u8]> {
    let mut raw_value : u8 = 0;
    let remaining_bytes = decode_u8(bytes, &mut raw_value, field_name)?;

    *value = converter(raw_value)?;

    Ok(remaining_bytes)
}

pub(crate) fn decode_length_prefixed_bytes<'a>(bytes: &'a[u8], value: &mut Vec<u8>, field_name: &'static str) -> GneissResult<&'a[u8]> {
    let mut value_length : u16 = 0;
    let mutable_bytes = decode_u16(bytes, &mut value_length, field_name)?;

    let value_length = value_length as usize;
    if value_length > mutable_bytes.len() {
        debug!("decode_length_prefixed_bytes - {} has length larger than remaining packet bytes", field_name);
        return Err(GneissError::new_truncated_payload(field_name));
    }

    *value = mutable_bytes[..value_length].to_vec();
    Ok(&mutable_bytes[value_length..])
}

pub(crate) fn decode_length_prefixed_string<'a>(bytes: &'a[u8], value: &mut String, field_name: &'static str) -> GneissResult<&'a[u8]> {
    let mut value_length : u16 = 0;
    let mutable_bytes = decode_u16(bytes, &mut value_length, field_name)?;

    let value_length = value_length as usize;
    if value_length > mutable_bytes.len() {
        debug!("decode_length_prefixed_string - {} has length larger than remaining packet bytes", field_name);
        return Err(GneissError::new_truncated_payload(field_name));
    }

    let decode_utf8_result = std::str::from_utf8(&mutable_bytes[..value_length]);
    match decode_utf8_result {
        Ok(decoded) => {
            *value = decoded.to_string();
            Ok(&mutable_bytes[value_length..])
        }
        Err(error) => {
            debug!("decode_length_prefixed_string - {} is not valid utf-8", field_name);
            Err(error.into())
        }
    }
}

pub(crate) fn check_no_trailing_bytes(bytes: &[u8], function_name: &str) -> GneissResult<()> {
    if !bytes.is_empty() {
        let message = format!("{} - body length does not match expected overall packet length", function_name);
        debug!("{}", message);
        return Err(GneissError::new_decoding_failure(message));
    }

    Ok(())
}

macro_rules! define_ack_packet_decode_function {
    ($function_name: ident, $mqtt_packet_type:ident, $packet_type: ident, $function_name_as_string: expr) => {
        pub(crate) fn $function_name(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
            let mut packet_id : u16 = 0;

            let mutable_body = decode_u16(packet_body, &mut packet_id, "PacketID")?;
            check_no_trailing_bytes(mutable_body, $function_name_as_string)?;

            Ok(MqttPacket::$mqtt_packet_type($packet_type {
                packet_id
            }))
        }
    };
}

pub(crate) use define_ack_packet_decode_function;

macro_rules! define_empty_packet_decode_function {
    ($function_name: ident, $mqtt_packet_type:ident, $packet_type: ident, $function_name_as_string: expr) => {
        pub(crate) fn $function_name(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
            check_no_trailing_bytes(packet_body, $function_name_as_string)?;

            Ok(MqttPacket::$mqtt_packet_type($packet_type {}))
        }
    };
}

pub(crate) use define_empty_packet_decode_function;
