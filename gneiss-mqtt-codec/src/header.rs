/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing the MQTT fixed header: the packet type and flag byte followed by the
variable length integer encoding of the remaining length.
 */

use crate::decode::utils::*;
use crate::encode::utils::*;
use crate::error::{FixedHeaderFault, GneissError, GneissResult};
use crate::mqtt::*;
use crate::mqtt::utils::*;

use log::*;

/// The fixed header that starts every MQTT packet.
///
/// See [MQTT311 Fixed Header](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718020)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedHeader {
    pub(crate) packet_type: PacketType,
    pub(crate) duplicate: bool,
    pub(crate) qos: QualityOfService,
    pub(crate) retain: bool,
    pub(crate) remaining_length: u32,
}

impl FixedHeader {

    /// Creates a header for a non-publish packet type.  Flags are set to the fixed value the
    /// packet type requires.
    pub fn new(packet_type: PacketType, remaining_length: u32) -> Self {
        let qos =
            if required_fixed_header_flags(packet_type) == FIXED_HEADER_REQUIRED_FLAGS_AT_LEAST_ONCE {
                QualityOfService::AtLeastOnce
            } else {
                QualityOfService::AtMostOnce
            };

        FixedHeader {
            packet_type,
            duplicate: false,
            qos,
            retain: false,
            remaining_length,
        }
    }

    /// Creates a header for a publish packet
    pub fn new_publish(duplicate: bool, qos: QualityOfService, retain: bool, remaining_length: u32) -> Self {
        FixedHeader {
            packet_type: PacketType::Publish,
            duplicate,
            qos,
            retain,
            remaining_length,
        }
    }

    /// Returns the type of the packet this header introduces
    pub fn packet_type(&self) -> PacketType { self.packet_type }

    /// Returns the duplicate delivery flag.  Only meaningful for publish packets.
    pub fn duplicate(&self) -> bool { self.duplicate }

    /// Returns the qos bits of the flag nibble
    pub fn qos(&self) -> QualityOfService { self.qos }

    /// Returns the retain flag.  Only meaningful for publish packets.
    pub fn retain(&self) -> bool { self.retain }

    /// Returns the exact byte length of the packet body that follows the header
    pub fn remaining_length(&self) -> u32 { self.remaining_length }

    /// Returns the encoded first byte: packet type in the high nibble, flags in the low
    pub fn first_byte(&self) -> u8 {
        let packet_type_bits = (self.packet_type as u8) << 4;

        if self.packet_type != PacketType::Publish {
            return packet_type_bits | required_fixed_header_flags(self.packet_type);
        }

        let mut flags = (self.qos as u8) << 1;
        if self.duplicate {
            flags |= PUBLISH_PACKET_FIXED_HEADER_DUPLICATE_FLAG;
        }

        if self.retain {
            flags |= PUBLISH_PACKET_FIXED_HEADER_RETAIN_FLAG;
        }

        packet_type_bits | flags
    }

    /// Total size in bytes of the encoded header
    pub fn encoded_length(&self) -> GneissResult<usize> {
        Ok(1 + compute_variable_length_integer_encode_size(self.remaining_length as usize)?)
    }

    /// Decodes a fixed header from its first byte and the bytes that follow it.  Returns the
    /// header and the number of remaining length bytes that were consumed.
    pub fn decode(first_byte: u8, remaining_length_bytes: &[u8]) -> GneissResult<(FixedHeader, usize)> {
        let packet_type = PacketType::try_from(first_byte >> 4)?;
        let flags = first_byte & FIXED_HEADER_FLAGS_MASK;

        let mut header =
            if packet_type == PacketType::Publish {
                let qos_bits = (flags >> 1) & QOS_MASK;
                let qos = match QualityOfService::try_from(qos_bits) {
                    Ok(qos) => { qos }
                    Err(_) => {
                        debug!("FixedHeader::decode - publish first byte 0x{:02X} has invalid qos", first_byte);
                        return Err(GneissError::new_malformed_fixed_header(first_byte, FixedHeaderFault::InvalidQos));
                    }
                };

                FixedHeader::new_publish(
                    (flags & PUBLISH_PACKET_FIXED_HEADER_DUPLICATE_FLAG) != 0,
                    qos,
                    (flags & PUBLISH_PACKET_FIXED_HEADER_RETAIN_FLAG) != 0,
                    0)
            } else {
                if flags != required_fixed_header_flags(packet_type) {
                    debug!("FixedHeader::decode - first byte 0x{:02X} has invalid flags for {}", first_byte, packet_type);
                    return Err(GneissError::new_malformed_fixed_header(first_byte, FixedHeaderFault::ReservedFlags));
                }

                FixedHeader::new(packet_type, 0)
            };

        let (remaining_length, bytes_consumed) = decode_vli(remaining_length_bytes)?;
        header.remaining_length = remaining_length;

        Ok((header, bytes_consumed))
    }

    /// Appends the encoded header to `dest`
    pub fn encode(&self, dest: &mut Vec<u8>) -> GneissResult<()> {
        encode_u8(self.first_byte(), dest);
        encode_vli(self.remaining_length, dest)
    }
}

/// Decodes the fixed header at the front of `bytes`.  Returns the header and the total number
/// of bytes it occupied (first byte plus remaining length).
pub fn decode_fixed_header(bytes: &[u8]) -> GneissResult<(FixedHeader, usize)> {
    if bytes.is_empty() {
        debug!("decode_fixed_header - no bytes available");
        return Err(GneissError::new_truncated_payload("PacketType"));
    }

    let (header, remaining_length_size) = FixedHeader::decode(bytes[0], &bytes[1..])?;

    Ok((header, 1 + remaining_length_size))
}
