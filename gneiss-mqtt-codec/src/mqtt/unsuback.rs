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

define_ack_packet_encoding_impl!(write_unsuback_body, UnsubackPacket);

define_ack_packet_decode_function!(decode_unsuback_packet, Unsuback, UnsubackPacket, "decode_unsuback_packet");

validate_ack_packet!(validate_unsuback_packet, UnsubackPacket);

define_ack_packet_display_trait!(UnsubackPacket, "UnsubackPacket");

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::*;
    use crate::decode::testing::*;
    use crate::error::GneissError;
    use crate::validate::testing::*;
    use assert_matches::assert_matches;

    #[test]
    fn unsuback_round_trip_encode_decode_default() {
        let packet = UnsubackPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Unsuback(packet)));
    }

    #[test]
    fn unsuback_round_trip_encode_decode_random_id() {
        let packet = UnsubackPacket::new(rand::random::<u16>());
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Unsuback(packet)));
    }

    fn create_unsuback_packet() -> UnsubackPacket {
        UnsubackPacket::new(16384)
    }

    #[test]
    fn unsuback_decode_known_bytes() {
        let (packet, _) = decode_packet_from_bytes(&[0xB0, 0x02, 0x40, 0x00]).unwrap();
        assert_eq!(MqttPacket::Unsuback(create_unsuback_packet()), packet);
    }

    #[test]
    fn unsuback_decode_failure_truncated_packet_id() {
        do_truncated_body_decode_failure_test(&MqttPacket::Unsuback(create_unsuback_packet()), 1, "PacketID");
    }

    #[test]
    fn unsuback_decode_failure_bad_fixed_header() {
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Unsuback(create_unsuback_packet()), 1);
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Unsuback(create_unsuback_packet()), 2);
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Unsuback(create_unsuback_packet()), 8);
    }

    #[test]
    fn unsuback_decode_failure_trailing_bytes() {
        let add_trailing_byte = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();

            clone[1] += 1;
            clone.push(0);

            clone
        };

        let error = do_mutated_decode_failure_test(&MqttPacket::Unsuback(create_unsuback_packet()), add_trailing_byte);
        assert_matches!(error, GneissError::DecodingFailure(_));
    }

    test_ack_validate_success!(unsuback_validate_success, Unsuback, create_unsuback_packet);
    test_ack_validate_strict_packet_id_zero!(unsuback_validate_strict_packet_id_zero, Unsuback, create_unsuback_packet, PacketType::Unsuback);
}
