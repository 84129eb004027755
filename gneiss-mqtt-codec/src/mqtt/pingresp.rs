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

use std::fmt;

define_empty_packet_encoding_impl!(write_pingresp_body, PingrespPacket);

define_empty_packet_decode_function!(decode_pingresp_packet, Pingresp, PingrespPacket, "decode_pingresp_packet");

define_empty_packet_display_trait!(PingrespPacket, "PingrespPacket");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::*;
    use crate::decode::testing::*;
    use crate::encode::*;
    use crate::error::GneissError;
    use crate::validate::ValidationOutcome;
    use assert_matches::assert_matches;

    #[test]
    fn pingresp_round_trip_encode_decode() {
        let packet = PingrespPacket {};
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pingresp(packet)));
    }

    #[test]
    fn pingresp_encode_known_bytes() {
        let encoding = encode_packet_to_vec(&MqttPacket::Pingresp(PingrespPacket {})).unwrap();
        assert_eq!(vec![0xD0u8, 0x00], encoding);
    }

    #[test]
    fn pingresp_decode_failure_bad_fixed_header() {
        let packet = PingrespPacket {};

        do_fixed_header_flag_decode_failure_test(&MqttPacket::Pingresp(packet.clone()), 1);
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Pingresp(packet), 0x0F);
    }

    #[test]
    fn pingresp_decode_failure_non_empty_body() {
        assert_matches!(decode_packet_from_bytes(&[0xD0, 0x01, 0x00]), Err(GneissError::DecodingFailure(_)));
    }

    #[test]
    fn pingresp_validate_success() {
        assert_eq!(ValidationOutcome::Accepted, MqttPacket::Pingresp(PingrespPacket {}).validate());
    }
}
