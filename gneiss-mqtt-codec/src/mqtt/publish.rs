/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::utils::*;
use crate::encode::utils::*;
use crate::error::GneissResult;
use crate::header::FixedHeader;
use crate::logging::*;
use crate::mqtt::*;
use crate::validate::*;

use std::fmt;

pub(crate) fn write_publish_body(packet: &PublishPacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    encode_length_prefixed_string(&packet.topic, "TopicName", dest)?;

    if packet.qos != QualityOfService::AtMostOnce {
        encode_u16(packet.packet_id, dest);
    }

    dest.extend_from_slice(&packet.payload);

    Ok(())
}

pub(crate) fn decode_publish_packet(header: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
    let mut topic = String::new();
    let mut packet_id : u16 = 0;

    let mut mutable_body = packet_body;
    mutable_body = decode_length_prefixed_string(mutable_body, &mut topic, "TopicName")?;

    if header.qos() != QualityOfService::AtMostOnce {
        mutable_body = decode_u16(mutable_body, &mut packet_id, "PacketID")?;
    }

    Ok(MqttPacket::Publish(PublishPacket {
        packet_id,
        topic,
        qos: header.qos(),
        duplicate: header.duplicate(),
        retain: header.retain(),
        payload: mutable_body.to_vec(),
    }))
}

pub(crate) fn validate_publish_packet(packet: &PublishPacket, _: &ValidationContext) -> ValidationOutcome {
    if packet.qos == QualityOfService::AtMostOnce {
        if packet.packet_id != 0 {
            return ValidationOutcome::SurplusPacketId;
        }

        if packet.duplicate {
            return ValidationOutcome::ProtocolViolation;
        }
    } else if packet.packet_id == 0 {
        return ValidationOutcome::MissingPacketId;
    }

    if !is_valid_topic(&packet.topic) {
        return ValidationOutcome::TopicNameInvalid;
    }

    ValidationOutcome::Accepted
}

impl fmt::Display for PublishPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PublishPacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        log_string!(self.topic, f, "topic");
        log_enum!(self.qos, f, "qos", quality_of_service_to_str);
        log_primitive_value!(self.duplicate, f, "duplicate");
        log_primitive_value!(self.retain, f, "retain");
        log_binary_data!(self.payload, f, "payload");
        write!(f, " }}")
    }
}
