/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Functionality for decoding MQTT packets from their wire representation.

Decoding is a single call per packet: the fixed header is parsed, the body is handed to the
variant's decode function, and a fully-constructed packet is returned or an error is.  No state
survives between calls.
 */

pub(crate) mod utils;

use crate::config::CodecConfig;
use crate::error::{GneissError, GneissResult};
use crate::header::*;
use crate::logging::*;
use crate::mqtt::*;
use crate::registry::decode_packet_body;

use log::*;

/// Decodes a packet body whose fixed header has already been decoded.  `body` must hold exactly
/// the header's remaining length in bytes.
pub fn decode_packet(header: &FixedHeader, body: &[u8]) -> GneissResult<MqttPacket> {
    let remaining_length = header.remaining_length() as usize;
    if body.len() < remaining_length {
        debug!("decode_packet - {} body has {} bytes but remaining length is {}", header.packet_type(), body.len(), remaining_length);
        return Err(GneissError::new_truncated_payload("RemainingLength"));
    }

    if body.len() > remaining_length {
        let message = format!("decode_packet - {} body has {} bytes but remaining length is {}", header.packet_type(), body.len(), remaining_length);
        debug!("{}", message);
        return Err(GneissError::new_decoding_failure(message));
    }

    let packet = decode_packet_body(header, body)?;
    log_packet("Successfully decoded incoming packet: ", &packet);

    Ok(packet)
}

pub(crate) fn decode_packet_from_bytes_with_config(bytes: &[u8], config: &CodecConfig) -> GneissResult<(MqttPacket, usize)> {
    let (header, header_length) = decode_fixed_header(bytes)?;

    let packet_size = header_length + header.remaining_length() as usize;
    if packet_size > config.maximum_packet_size as usize {
        debug!("decode_packet_from_bytes - {} size ({}) exceeds the maximum packet size ({})", header.packet_type(), packet_size, config.maximum_packet_size);
        return Err(GneissError::new_packet_too_large(packet_size, config.maximum_packet_size));
    }

    if bytes.len() < packet_size {
        debug!("decode_packet_from_bytes - {} frame needs {} bytes but only {} are available", header.packet_type(), packet_size, bytes.len());
        return Err(GneissError::new_truncated_payload("RemainingLength"));
    }

    let packet = decode_packet(&header, &bytes[header_length..packet_size])?;

    Ok((packet, packet_size))
}

/// Decodes one complete packet frame from the front of `bytes`.  Returns the packet and the
/// number of bytes the frame occupied; any bytes after the frame are left untouched.
pub fn decode_packet_from_bytes(bytes: &[u8]) -> GneissResult<(MqttPacket, usize)> {
    decode_packet_from_bytes_with_config(bytes, &CodecConfig::default())
}
