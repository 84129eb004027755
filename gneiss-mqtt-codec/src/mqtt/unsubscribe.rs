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

pub(crate) fn write_unsubscribe_body(packet: &UnsubscribePacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    encode_u16(packet.packet_id, dest);

    for topic_filter in &packet.topic_filters {
        encode_length_prefixed_string(topic_filter, "TopicFilter", dest)?;
    }

    Ok(())
}

pub(crate) fn decode_unsubscribe_packet(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
    let mut packet_id : u16 = 0;
    let mut topic_filters = Vec::new();

    let mut mutable_body = packet_body;
    mutable_body = decode_u16(mutable_body, &mut packet_id, "PacketID")?;

    while !mutable_body.is_empty() {
        let mut topic_filter = String::new();
        mutable_body = decode_length_prefixed_string(mutable_body, &mut topic_filter, "TopicFilter")?;
        topic_filters.push(topic_filter);
    }

    Ok(MqttPacket::Unsubscribe(UnsubscribePacket {
        packet_id,
        topic_filters
    }))
}

pub(crate) fn validate_unsubscribe_packet(packet: &UnsubscribePacket, _: &ValidationContext) -> ValidationOutcome {
    if packet.packet_id == 0 {
        return ValidationOutcome::MissingPacketId;
    }

    if packet.topic_filters.is_empty() {
        return ValidationOutcome::ProtocolViolation;
    }

    if packet.topic_filters.iter().any(|topic_filter| !is_valid_topic_filter(topic_filter)) {
        return ValidationOutcome::TopicFilterInvalid;
    }

    ValidationOutcome::Accepted
}

impl fmt::Display for UnsubscribePacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnsubscribePacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        write!(f, " topic_filters: [")?;
        for (i, topic_filter) in self.topic_filters.iter().enumerate() {
            write!(f, " {}:\"{}\"", i, topic_filter)?;
        }
        write!(f, " ]")?;
        write!(f, " }}")
    }
}
