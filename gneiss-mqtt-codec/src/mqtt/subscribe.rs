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

pub(crate) fn write_subscribe_body(packet: &SubscribePacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    encode_u16(packet.packet_id, dest);

    for subscription in &packet.subscriptions {
        encode_length_prefixed_string(&subscription.topic_filter, "TopicFilter", dest)?;
        encode_u8(subscription.qos as u8, dest);
    }

    Ok(())
}

fn decode_subscription<'a>(bytes: &'a[u8], subscription: &mut Subscription) -> GneissResult<&'a[u8]> {
    let mut mutable_bytes = bytes;
    mutable_bytes = decode_length_prefixed_string(mutable_bytes, &mut subscription.topic_filter, "TopicFilter")?;

    let mut options : u8 = 0;
    mutable_bytes = decode_u8(mutable_bytes, &mut options, "QoS")?;

    if (options & SUBSCRIPTION_OPTIONS_RESERVED_BITS_MASK311) != 0 {
        let message = "decode_subscription - requested qos byte has reserved bits set";
        debug!("{}", message);
        return Err(GneissError::new_decoding_failure(message));
    }

    subscription.qos = convert_u8_to_quality_of_service(options & QOS_MASK)?;

    Ok(mutable_bytes)
}

pub(crate) fn decode_subscribe_packet(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
    let mut packet_id : u16 = 0;
    let mut subscriptions = Vec::new();

    let mut mutable_body = packet_body;
    mutable_body = decode_u16(mutable_body, &mut packet_id, "PacketID")?;

    while !mutable_body.is_empty() {
        let mut subscription = Subscription::default();
        mutable_body = decode_subscription(mutable_body, &mut subscription)?;
        subscriptions.push(subscription);
    }

    Ok(MqttPacket::Subscribe(SubscribePacket {
        packet_id,
        subscriptions
    }))
}

pub(crate) fn validate_subscribe_packet(packet: &SubscribePacket, _: &ValidationContext) -> ValidationOutcome {
    if packet.packet_id == 0 {
        return ValidationOutcome::MissingPacketId;
    }

    if packet.subscriptions.is_empty() {
        return ValidationOutcome::ProtocolViolation;
    }

    if packet.subscriptions.iter().any(|subscription| !is_valid_topic_filter(&subscription.topic_filter)) {
        return ValidationOutcome::TopicFilterInvalid;
    }

    ValidationOutcome::Accepted
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        log_string!(self.topic_filter, f, "topic_filter");
        log_enum!(self.qos, f, "qos", quality_of_service_to_str);
        write!(f, " }}")
    }
}

impl fmt::Display for SubscribePacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SubscribePacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        write!(f, " subscriptions: [")?;
        for (i, subscription) in self.subscriptions.iter().enumerate() {
            write!(f, " {}:{}", i, subscription)?;
        }
        write!(f, " ]")?;
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::testing::*;
    use crate::encode::*;
    use assert_matches::assert_matches;

    #[test]
    fn subscribe_round_trip_encode_decode_default() {
        let packet = SubscribePacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Subscribe(packet)));
    }

    fn create_subscribe_packet() -> SubscribePacket {
        SubscribePacket::builder()
            .with_packet_id(rand::random::<u16>() | 1)
            .with_subscription(Subscription::new("hello/world", QualityOfService::AtLeastOnce))
            .with_subscription_simple("a/b/#", QualityOfService::ExactlyOnce)
            .with_subscription_simple("+/status", QualityOfService::AtMostOnce)
            .build()
    }

    #[test]
    fn subscribe_round_trip_encode_decode_multiple_subscriptions() {
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Subscribe(create_subscribe_packet())));
    }

    #[test]
    fn subscribe_encode_known_bytes() {
        let packet = SubscribePacket::builder()
            .with_packet_id(10)
            .with_subscription_simple("a/b", QualityOfService::AtLeastOnce)
            .build();

        let encoding = encode_packet_to_vec(&MqttPacket::Subscribe(packet)).unwrap();
        assert_eq!(vec![0x82u8, 0x08, 0x00, 0x0A, 0x00, 0x03, 0x61, 0x2F, 0x62, 0x01], encoding);
    }

    #[test]
    fn subscribe_decode_failure_bad_fixed_header() {
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Subscribe(create_subscribe_packet()), 2);
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Subscribe(create_subscribe_packet()), 1);
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Subscribe(create_subscribe_packet()), 8);
    }

    #[test]
    fn subscribe_decode_failure_invalid_qos() {
        let corrupt_qos = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();

            // fixed header (2) + packet id (2) + "hello/world" (13) puts the first qos at byte 17
            clone[17] = 3;
            clone
        };

        let error = do_mutated_decode_failure_test(&MqttPacket::Subscribe(create_subscribe_packet()), corrupt_qos);
        assert_matches!(error, GneissError::DecodingFailure(_));
    }

    #[test]
    fn subscribe_decode_failure_reserved_qos_bits() {
        let set_reserved_bits = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[17] |= 0x04;
            clone
        };

        let error = do_mutated_decode_failure_test(&MqttPacket::Subscribe(create_subscribe_packet()), set_reserved_bits);
        assert_matches!(error, GneissError::DecodingFailure(_));
    }

    #[test]
    fn subscribe_decode_failure_truncated() {
        let packet = MqttPacket::Subscribe(create_subscribe_packet());

        do_truncated_body_decode_failure_test(&packet, 1, "PacketID");
        do_truncated_body_decode_failure_test(&packet, 3, "TopicFilter");
        do_truncated_body_decode_failure_test(&packet, 10, "TopicFilter");
        do_truncated_body_decode_failure_test(&packet, 15, "QoS");
    }

    #[test]
    fn subscribe_validate_success() {
        assert_eq!(ValidationOutcome::Accepted, MqttPacket::Subscribe(create_subscribe_packet()).validate());
    }

    #[test]
    fn subscribe_validate_failure_packet_id_zero() {
        let mut packet = create_subscribe_packet();
        packet.packet_id = 0;

        assert_eq!(ValidationOutcome::MissingPacketId, MqttPacket::Subscribe(packet).validate());
    }

    #[test]
    fn subscribe_validate_failure_no_subscriptions() {
        let packet = SubscribePacket::builder().with_packet_id(1).build();
        assert_eq!(ValidationOutcome::ProtocolViolation, MqttPacket::Subscribe(packet).validate());
    }

    #[test]
    fn subscribe_validate_failure_invalid_topic_filter() {
        let packet = SubscribePacket::builder()
            .with_packet_id(1)
            .with_subscription_simple("a/b", QualityOfService::AtMostOnce)
            .with_subscription_simple("a/#/b", QualityOfService::AtMostOnce)
            .build();

        assert_eq!(ValidationOutcome::TopicFilterInvalid, MqttPacket::Subscribe(packet).validate());
    }
}
