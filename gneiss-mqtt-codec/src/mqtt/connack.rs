/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::utils::*;
use crate::encode::utils::*;
use crate::error::{GneissError, GneissResult};
use crate::header::FixedHeader;
use crate::logging::*;
use crate::mqtt::*;
use crate::validate::*;

use log::*;
use std::fmt;

pub(crate) fn write_connack_body(packet: &ConnackPacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    let flags = if packet.session_present { CONNACK_PACKET_SESSION_PRESENT_FLAG_MASK } else { 0 };

    encode_u8(flags, dest);
    encode_u8(packet.return_code as u8, dest);

    Ok(())
}

pub(crate) fn decode_connack_packet(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
    let mut flags : u8 = 0;
    let mut return_code = ConnectReturnCode::Accepted;

    let mut mutable_body = packet_body;
    mutable_body = decode_u8(mutable_body, &mut flags, "SessionPresent")?;

    // only bit 0 is defined
    if (flags & !CONNACK_PACKET_SESSION_PRESENT_FLAG_MASK) != 0 {
        let message = "decode_connack_packet - connack flags reserved bits set";
        debug!("{}", message);
        return Err(GneissError::new_decoding_failure(message));
    }

    mutable_body = decode_u8_as_enum(mutable_body, &mut return_code, convert_u8_to_connect_return_code, "ReturnCode")?;
    check_no_trailing_bytes(mutable_body, "decode_connack_packet")?;

    Ok(MqttPacket::Connack(ConnackPacket {
        session_present: (flags & CONNACK_PACKET_SESSION_PRESENT_FLAG_MASK) != 0,
        return_code
    }))
}

pub(crate) fn validate_connack_packet(packet: &ConnackPacket, _: &ValidationContext) -> ValidationOutcome {
    // a server must not report a session when it rejects the connection
    if packet.session_present && packet.return_code != ConnectReturnCode::Accepted {
        return ValidationOutcome::ProtocolViolation;
    }

    ValidationOutcome::Accepted
}

impl fmt::Display for ConnackPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConnackPacket {{")?;
        log_primitive_value!(self.session_present, f, "session_present");
        log_enum!(self.return_code, f, "return_code", connect_return_code_to_str);
        write!(f, " }}")
    }
}
