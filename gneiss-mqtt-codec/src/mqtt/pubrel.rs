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

define_ack_packet_encoding_impl!(write_pubrel_body, PubrelPacket);

define_ack_packet_decode_function!(decode_pubrel_packet, Pubrel, PubrelPacket, "decode_pubrel_packet");

validate_ack_packet!(validate_pubrel_packet, PubrelPacket);

define_ack_packet_display_trait!(PubrelPacket, "PubrelPacket");

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::*;
    use crate::decode::testing::*;
    use crate::encode::*;
    use crate::error::GneissError;
    use crate::validate::testing::*;
    use assert_matches::assert_matches;

    #[test]
    fn pubrel_round_trip_encode_decode_default() {
        let packet = PubrelPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pubrel(packet)));
    }

    #[test]
    fn pubrel_round_trip_encode_decode_random_id() {
        let packet = PubrelPacket::new(rand::random::<u16>());
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pubrel(packet)));
    }

    fn create_pubrel_packet() -> PubrelPacket {
        PubrelPacket::new(12)
    }

    #[test]
    fn pubrel_first_byte_carries_required_flags() {
        let packet = MqttPacket::Pubrel(create_pubrel_packet());
        let encoding = encode_packet_to_vec(&packet).unwrap();
        assert_eq!(packet.fixed_header().unwrap().first_byte(), encoding[0]);
        assert_eq!(vec![0x62u8, 0x02, 0x00, 0x0C], encoding);
    }

    #[test]
    fn pubrel_decode_failure_zero_flags() {
        assert_matches!(decode_packet_from_bytes(&[0x60, 0x02, 0x00, 0x0C]), Err(GneissError::MalformedFixedHeader(_)));
    }

    #[test]
    fn pubrel_decode_failure_bad_fixed_header() {
        for flags_mask in 1..16u8 {
            do_fixed_header_flag_decode_failure_test(&MqttPacket::Pubrel(create_pubrel_packet()), flags_mask);
        }
    }

    #[test]
    fn pubrel_decode_failure_truncated_packet_id() {
        do_truncated_body_decode_failure_test(&MqttPacket::Pubrel(create_pubrel_packet()), 1, "PacketID");
    }

    test_ack_validate_success!(pubrel_validate_success, Pubrel, create_pubrel_packet);
    test_ack_validate_strict_packet_id_zero!(pubrel_validate_strict_packet_id_zero, Pubrel, create_pubrel_packet, PacketType::Pubrel);
}
