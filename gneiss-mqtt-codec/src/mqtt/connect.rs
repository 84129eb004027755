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

fn compute_connect_flags(packet: &ConnectPacket) -> u8 {
    let mut flags: u8 = 0;
    if packet.reserved_flag {
        flags |= CONNECT_PACKET_RESERVED_FLAG_MASK;
    }

    if packet.clean_session {
        flags |= CONNECT_PACKET_CLEAN_SESSION_FLAG_MASK;
    }

    if let Some(will) = &packet.will {
        flags |= CONNECT_PACKET_HAS_WILL_FLAG_MASK;
        flags |= (will.qos as u8) << CONNECT_PACKET_WILL_QOS_FLAG_SHIFT;
        if will.retain {
            flags |= CONNECT_PACKET_WILL_RETAIN_FLAG_MASK;
        }
    }

    if packet.password.is_some() {
        flags |= CONNECT_PACKET_HAS_PASSWORD_FLAG_MASK;
    }

    if packet.username.is_some() {
        flags |= CONNECT_PACKET_HAS_USERNAME_FLAG_MASK;
    }

    flags
}

pub(crate) fn write_connect_body(packet: &ConnectPacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    encode_length_prefixed_string(&packet.protocol_name, "ProtocolName", dest)?;
    encode_u8(packet.protocol_version, dest);
    encode_u8(compute_connect_flags(packet), dest);
    encode_u16(packet.keep_alive_interval_seconds, dest);
    encode_length_prefixed_string(&packet.client_id, "ClientID", dest)?;

    if let Some(will) = &packet.will {
        encode_length_prefixed_string(&will.topic, "WillTopic", dest)?;
        encode_length_prefixed_bytes(&will.payload, "WillMessage", dest)?;
    }

    if let Some(username) = &packet.username {
        encode_length_prefixed_string(username, "Username", dest)?;
    }

    if let Some(password) = &packet.password {
        encode_length_prefixed_bytes(password, "Password", dest)?;
    }

    Ok(())
}

// protocol name and level are decoded as-is; validation decides whether they are acceptable
pub(crate) fn decode_connect_packet(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
    let mut packet = ConnectPacket {
        protocol_name: String::new(),
        protocol_version: 0,
        ..Default::default()
    };

    let mut mutable_body = packet_body;
    mutable_body = decode_length_prefixed_string(mutable_body, &mut packet.protocol_name, "ProtocolName")?;
    mutable_body = decode_u8(mutable_body, &mut packet.protocol_version, "ProtocolVersion")?;

    let mut connect_flags : u8 = 0;
    mutable_body = decode_u8(mutable_body, &mut connect_flags, "Flags")?;

    packet.reserved_flag = (connect_flags & CONNECT_PACKET_RESERVED_FLAG_MASK) != 0;
    packet.clean_session = (connect_flags & CONNECT_PACKET_CLEAN_SESSION_FLAG_MASK) != 0;

    let has_will = (connect_flags & CONNECT_PACKET_HAS_WILL_FLAG_MASK) != 0;
    let will_retain = (connect_flags & CONNECT_PACKET_WILL_RETAIN_FLAG_MASK) != 0;
    let will_qos = convert_u8_to_quality_of_service((connect_flags >> CONNECT_PACKET_WILL_QOS_FLAG_SHIFT) & QOS_MASK)?;

    if !has_will && (will_retain || will_qos != QualityOfService::AtMostOnce) {
        let message = "decode_connect_packet - will qos or retain set without a will";
        debug!("{}", message);
        return Err(GneissError::new_decoding_failure(message));
    }

    let has_username = (connect_flags & CONNECT_PACKET_HAS_USERNAME_FLAG_MASK) != 0;
    let has_password = (connect_flags & CONNECT_PACKET_HAS_PASSWORD_FLAG_MASK) != 0;

    mutable_body = decode_u16(mutable_body, &mut packet.keep_alive_interval_seconds, "KeepAlive")?;
    mutable_body = decode_length_prefixed_string(mutable_body, &mut packet.client_id, "ClientID")?;

    if has_will {
        let mut will = Will {
            qos: will_qos,
            retain: will_retain,
            ..Default::default()
        };

        mutable_body = decode_length_prefixed_string(mutable_body, &mut will.topic, "WillTopic")?;
        mutable_body = decode_length_prefixed_bytes(mutable_body, &mut will.payload, "WillMessage")?;

        packet.will = Some(will);
    }

    if has_username {
        let mut username = String::new();
        mutable_body = decode_length_prefixed_string(mutable_body, &mut username, "Username")?;
        packet.username = Some(username);
    }

    if has_password {
        let mut password = Vec::new();
        mutable_body = decode_length_prefixed_bytes(mutable_body, &mut password, "Password")?;
        packet.password = Some(password);
    }

    check_no_trailing_bytes(mutable_body, "decode_connect_packet")?;

    Ok(MqttPacket::Connect(packet))
}

fn is_supported_protocol(packet: &ConnectPacket) -> Option<bool> {
    match packet.protocol_name.as_str() {
        MQTT311_PROTOCOL_NAME => { Some(packet.protocol_version == MQTT311_PROTOCOL_VERSION) }
        MQTT31_PROTOCOL_NAME => { Some(packet.protocol_version == MQTT31_PROTOCOL_VERSION) }
        _ => { None }
    }
}

pub(crate) fn validate_connect_packet(packet: &ConnectPacket, _: &ValidationContext) -> ValidationOutcome {
    match is_supported_protocol(packet) {
        None => { return ValidationOutcome::ProtocolViolation; }
        Some(false) => { return ValidationOutcome::UnacceptableProtocolVersion; }
        Some(true) => {}
    }

    if packet.reserved_flag {
        return ValidationOutcome::ProtocolViolation;
    }

    if packet.client_id.len() > MAXIMUM_STRING_PROPERTY_LENGTH {
        return ValidationOutcome::ProtocolViolation;
    }

    if packet.password.is_some() && packet.username.is_none() {
        return ValidationOutcome::ProtocolViolation;
    }

    if let Some(username) = &packet.username {
        if username.len() > MAXIMUM_STRING_PROPERTY_LENGTH {
            return ValidationOutcome::ProtocolViolation;
        }
    }

    if let Some(password) = &packet.password {
        if password.len() > MAXIMUM_BINARY_PROPERTY_LENGTH {
            return ValidationOutcome::ProtocolViolation;
        }
    }

    if let Some(will) = &packet.will {
        if !is_valid_topic(&will.topic) {
            return ValidationOutcome::TopicNameInvalid;
        }
    }

    // 3.1 servers may not assign identifiers, 3.1.1 servers only do so for clean sessions
    if packet.client_id.is_empty() && (!packet.clean_session || packet.protocol_name == MQTT31_PROTOCOL_NAME) {
        return ValidationOutcome::IdentifierRejected;
    }

    ValidationOutcome::Accepted
}

impl fmt::Display for Will {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        log_string!(self.topic, f, "topic");
        log_enum!(self.qos, f, "qos", quality_of_service_to_str);
        log_primitive_value!(self.retain, f, "retain");
        log_binary_data!(self.payload, f, "payload");
        write!(f, " }}")
    }
}

impl fmt::Display for ConnectPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConnectPacket {{")?;
        log_string!(self.protocol_name, f, "protocol_name");
        log_primitive_value!(self.protocol_version, f, "protocol_version");
        log_primitive_value!(self.clean_session, f, "clean_session");
        log_primitive_value!(self.keep_alive_interval_seconds, f, "keep_alive_interval_seconds");
        log_string!(self.client_id, f, "client_id");
        log_optional_string_sensitive!(self.username, f, "username");
        log_optional_binary_data_sensitive!(self.password, f, "password");

        if let Some(will) = &self.will {
            write!(f, " will:{}", will)?;
        }

        if self.reserved_flag {
            log_primitive_value!(self.reserved_flag, f, "reserved_flag");
        }

        write!(f, " }}")
    }
}
