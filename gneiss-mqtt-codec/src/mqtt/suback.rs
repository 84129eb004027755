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

pub(crate) fn write_suback_body(packet: &SubackPacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    encode_u16(packet.packet_id, dest);

    for return_code in &packet.return_codes {
        encode_u8(*return_code as u8, dest);
    }

    Ok(())
}

pub(crate) fn decode_suback_packet(_: &FixedHeader, packet_body: &[u8]) -> GneissResult<MqttPacket> {
    let mut packet_id : u16 = 0;

    let mut mutable_body = packet_body;
    mutable_body = decode_u16(mutable_body, &mut packet_id, "PacketID")?;

    let mut return_codes = Vec::with_capacity(mutable_body.len());
    while !mutable_body.is_empty() {
        let mut return_code = SubackReturnCode::default();
        mutable_body = decode_u8_as_enum(mutable_body, &mut return_code, convert_u8_to_suback_return_code, "ReturnCode")?;
        return_codes.push(return_code);
    }

    Ok(MqttPacket::Suback(SubackPacket {
        packet_id,
        return_codes
    }))
}

pub(crate) fn validate_suback_packet(packet: &SubackPacket, _: &ValidationContext) -> ValidationOutcome {
    if packet.packet_id == 0 {
        return ValidationOutcome::MissingPacketId;
    }

    if packet.return_codes.is_empty() {
        return ValidationOutcome::ProtocolViolation;
    }

    ValidationOutcome::Accepted
}

impl fmt::Display for SubackPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SubackPacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        write!(f, " return_codes: [")?;
        for (i, return_code) in self.return_codes.iter().enumerate() {
            write!(f, " {}:{}", i, suback_return_code_to_str(*return_code))?;
        }
        write!(f, " ]")?;
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::*;
    use crate::decode::testing::*;
    use crate::error::GneissError;
    use assert_matches::assert_matches;

    #[test]
    fn suback_round_trip_encode_decode_default() {
        let packet = SubackPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Suback(packet)));
    }

    fn create_suback_packet() -> SubackPacket {
        SubackPacket::new(
            1023,
            vec![
                SubackReturnCode::GrantedQos0,
                SubackReturnCode::from(QualityOfService::AtLeastOnce),
                SubackReturnCode::GrantedQos2,
                SubackReturnCode::Failure,
            ]
        )
    }

    #[test]
    fn suback_round_trip_encode_decode_all_return_codes() {
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Suback(create_suback_packet())));
    }

    #[test]
    fn suback_decode_known_bytes() {
        let (packet, _) = decode_packet_from_bytes(&[0x90, 0x04, 0x00, 0x05, 0x01, 0x80]).unwrap();
        assert_eq!(MqttPacket::Suback(SubackPacket::new(5, vec![SubackReturnCode::GrantedQos1, SubackReturnCode::Failure])), packet);
    }

    #[test]
    fn suback_decode_failure_bad_fixed_header() {
        do_fixed_header_flag_decode_failure_test(&MqttPacket::Suback(create_suback_packet()), 2);
    }

    #[test]
    fn suback_decode_failure_invalid_return_code() {
        let corrupt_return_code = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[5] = 0x03;
            clone
        };

        let error = do_mutated_decode_failure_test(&MqttPacket::Suback(create_suback_packet()), corrupt_return_code);
        assert_matches!(error, GneissError::DecodingFailure(_));
    }

    #[test]
    fn suback_decode_failure_truncated_packet_id() {
        do_truncated_body_decode_failure_test(&MqttPacket::Suback(create_suback_packet()), 1, "PacketID");
    }

    #[test]
    fn suback_validate() {
        assert_eq!(ValidationOutcome::Accepted, MqttPacket::Suback(create_suback_packet()).validate());
        assert_eq!(ValidationOutcome::MissingPacketId, MqttPacket::Suback(SubackPacket::new(0, vec![SubackReturnCode::Failure])).validate());
        assert_eq!(ValidationOutcome::ProtocolViolation, MqttPacket::Suback(SubackPacket::new(3, vec![])).validate());
    }
}
