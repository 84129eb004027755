/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module mapping packet type codes to packet variants.  This is the single place a packet
variant is registered with the codec.
 */

use crate::error::{GneissError, GneissResult};
use crate::header::FixedHeader;
use crate::mqtt::*;
use crate::mqtt::connack::*;
use crate::mqtt::connect::*;
use crate::mqtt::disconnect::*;
use crate::mqtt::pingreq::*;
use crate::mqtt::pingresp::*;
use crate::mqtt::puback::*;
use crate::mqtt::pubcomp::*;
use crate::mqtt::publish::*;
use crate::mqtt::pubrec::*;
use crate::mqtt::pubrel::*;
use crate::mqtt::suback::*;
use crate::mqtt::subscribe::*;
use crate::mqtt::unsuback::*;
use crate::mqtt::unsubscribe::*;
use crate::mqtt::utils::*;

use log::*;

impl TryFrom<u8> for PacketType {
    type Error = GneissError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            PACKET_TYPE_CONNECT => { Ok(PacketType::Connect) }
            PACKET_TYPE_CONNACK => { Ok(PacketType::Connack) }
            PACKET_TYPE_PUBLISH => { Ok(PacketType::Publish) }
            PACKET_TYPE_PUBACK => { Ok(PacketType::Puback) }
            PACKET_TYPE_PUBREC => { Ok(PacketType::Pubrec) }
            PACKET_TYPE_PUBREL => { Ok(PacketType::Pubrel) }
            PACKET_TYPE_PUBCOMP => { Ok(PacketType::Pubcomp) }
            PACKET_TYPE_SUBSCRIBE => { Ok(PacketType::Subscribe) }
            PACKET_TYPE_SUBACK => { Ok(PacketType::Suback) }
            PACKET_TYPE_UNSUBSCRIBE => { Ok(PacketType::Unsubscribe) }
            PACKET_TYPE_UNSUBACK => { Ok(PacketType::Unsuback) }
            PACKET_TYPE_PINGREQ => { Ok(PacketType::Pingreq) }
            PACKET_TYPE_PINGRESP => { Ok(PacketType::Pingresp) }
            PACKET_TYPE_DISCONNECT => { Ok(PacketType::Disconnect) }
            _ => {
                debug!("PacketType::try_from - unsupported packet type code ({})", code);
                Err(GneissError::new_unsupported_packet_type(code))
            }
        }
    }
}

/// Creates an empty (default-valued) packet of the requested type
pub fn new_packet(packet_type: PacketType) -> MqttPacket {
    match packet_type {
        PacketType::Connect => { MqttPacket::Connect(ConnectPacket::default()) }
        PacketType::Connack => { MqttPacket::Connack(ConnackPacket::default()) }
        PacketType::Publish => { MqttPacket::Publish(PublishPacket::default()) }
        PacketType::Puback => { MqttPacket::Puback(PubackPacket::default()) }
        PacketType::Pubrec => { MqttPacket::Pubrec(PubrecPacket::default()) }
        PacketType::Pubrel => { MqttPacket::Pubrel(PubrelPacket::default()) }
        PacketType::Pubcomp => { MqttPacket::Pubcomp(PubcompPacket::default()) }
        PacketType::Subscribe => { MqttPacket::Subscribe(SubscribePacket::default()) }
        PacketType::Suback => { MqttPacket::Suback(SubackPacket::default()) }
        PacketType::Unsubscribe => { MqttPacket::Unsubscribe(UnsubscribePacket::default()) }
        PacketType::Unsuback => { MqttPacket::Unsuback(UnsubackPacket::default()) }
        PacketType::Pingreq => { MqttPacket::Pingreq(PingreqPacket::default()) }
        PacketType::Pingresp => { MqttPacket::Pingresp(PingrespPacket::default()) }
        PacketType::Disconnect => { MqttPacket::Disconnect(DisconnectPacket::default()) }
    }
}

/// Creates an empty packet from a raw 4-bit packet type code
pub fn new_packet_from_code(code: u8) -> GneissResult<MqttPacket> {
    Ok(new_packet(PacketType::try_from(code)?))
}

/// Decodes a packet body whose fixed header has already been parsed.  `body` must be exactly
/// the remaining length bytes announced by `header`.
pub(crate) fn decode_packet_body(header: &FixedHeader, body: &[u8]) -> GneissResult<MqttPacket> {
    match header.packet_type() {
        PacketType::Connect => { decode_connect_packet(header, body) }
        PacketType::Connack => { decode_connack_packet(header, body) }
        PacketType::Publish => { decode_publish_packet(header, body) }
        PacketType::Puback => { decode_puback_packet(header, body) }
        PacketType::Pubrec => { decode_pubrec_packet(header, body) }
        PacketType::Pubrel => { decode_pubrel_packet(header, body) }
        PacketType::Pubcomp => { decode_pubcomp_packet(header, body) }
        PacketType::Subscribe => { decode_subscribe_packet(header, body) }
        PacketType::Suback => { decode_suback_packet(header, body) }
        PacketType::Unsubscribe => { decode_unsubscribe_packet(header, body) }
        PacketType::Unsuback => { decode_unsuback_packet(header, body) }
        PacketType::Pingreq => { decode_pingreq_packet(header, body) }
        PacketType::Pingresp => { decode_pingresp_packet(header, body) }
        PacketType::Disconnect => { decode_disconnect_packet(header, body) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn packet_type_codes_round_trip() {
        for code in 1..15u8 {
            let packet_type = PacketType::try_from(code).unwrap();
            assert_eq!(code, packet_type as u8);

            let packet = new_packet_from_code(code).unwrap();
            assert_eq!(packet_type, packet.packet_type());
        }
    }

    #[test]
    fn reserved_packet_type_codes() {
        assert_matches!(PacketType::try_from(0), Err(GneissError::UnsupportedPacketType(context)) => {
            assert_eq!(0, context.code);
        });
        assert_matches!(PacketType::try_from(15), Err(GneissError::UnsupportedPacketType(_)));
        assert_matches!(new_packet_from_code(16), Err(GneissError::UnsupportedPacketType(_)));
    }

    #[test]
    fn new_packet_is_empty() {
        assert_eq!(MqttPacket::Puback(PubackPacket { packet_id: 0 }), new_packet(PacketType::Puback));
        assert_eq!(MqttPacket::Pingreq(PingreqPacket {}), new_packet(PacketType::Pingreq));

        if let MqttPacket::Subscribe(subscribe) = new_packet(PacketType::Subscribe) {
            assert!(subscribe.subscriptions().is_empty());
        } else {
            panic!("expected a subscribe packet");
        }
    }

    #[test]
    fn dispatch_uses_header_type() {
        let header = FixedHeader::new(PacketType::Unsuback, 2);
        let packet = decode_packet_body(&header, &[0x01, 0x02]).unwrap();
        assert_eq!(MqttPacket::Unsuback(UnsubackPacket { packet_id: 258 }), packet);
    }
}
