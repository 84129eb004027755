/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing miscellaneous constants and conversion functions related to the MQTT specification.
 */

use crate::error::{GneissError, GneissResult};
use crate::mqtt::*;

use log::*;

pub(crate) const PACKET_TYPE_CONNECT: u8 = 1;
pub(crate) const PACKET_TYPE_CONNACK: u8 = 2;
pub(crate) const PACKET_TYPE_PUBLISH: u8 = 3;
pub(crate) const PACKET_TYPE_PUBACK: u8 = 4;
pub(crate) const PACKET_TYPE_PUBREC: u8 = 5;
pub(crate) const PACKET_TYPE_PUBREL: u8 = 6;
pub(crate) const PACKET_TYPE_PUBCOMP: u8 = 7;
pub(crate) const PACKET_TYPE_SUBSCRIBE: u8 = 8;
pub(crate) const PACKET_TYPE_SUBACK: u8 = 9;
pub(crate) const PACKET_TYPE_UNSUBSCRIBE: u8 = 10;
pub(crate) const PACKET_TYPE_UNSUBACK: u8 = 11;
pub(crate) const PACKET_TYPE_PINGREQ: u8 = 12;
pub(crate) const PACKET_TYPE_PINGRESP: u8 = 13;
pub(crate) const PACKET_TYPE_DISCONNECT: u8 = 14;

pub(crate) const FIXED_HEADER_FLAGS_MASK : u8 = 0x0F;
pub(crate) const PUBLISH_PACKET_FIXED_HEADER_DUPLICATE_FLAG : u8 = 8;
pub(crate) const PUBLISH_PACKET_FIXED_HEADER_RETAIN_FLAG : u8 = 1;
pub(crate) const QOS_MASK : u8 = 3;

// pubrel, subscribe, and unsubscribe carry a fixed 0b0010 in the flag nibble
pub(crate) const FIXED_HEADER_REQUIRED_FLAGS_AT_LEAST_ONCE : u8 = 0x02;

pub(crate) const CONNECT_PACKET_RESERVED_FLAG_MASK : u8 = 1;
pub(crate) const CONNECT_PACKET_CLEAN_SESSION_FLAG_MASK : u8 = 1 << 1;
pub(crate) const CONNECT_PACKET_HAS_WILL_FLAG_MASK : u8 = 1 << 2;
pub(crate) const CONNECT_PACKET_WILL_QOS_FLAG_SHIFT : u8 = 3;
pub(crate) const CONNECT_PACKET_WILL_RETAIN_FLAG_MASK : u8 = 1 << 5;
pub(crate) const CONNECT_PACKET_HAS_PASSWORD_FLAG_MASK : u8 = 1 << 6;
pub(crate) const CONNECT_PACKET_HAS_USERNAME_FLAG_MASK : u8 = 1 << 7;

pub(crate) const CONNACK_PACKET_SESSION_PRESENT_FLAG_MASK : u8 = 1;

pub(crate) const MQTT311_PROTOCOL_NAME : &str = "MQTT";
pub(crate) const MQTT311_PROTOCOL_VERSION : u8 = 4;
pub(crate) const MQTT31_PROTOCOL_NAME : &str = "MQIsdp";
pub(crate) const MQTT31_PROTOCOL_VERSION : u8 = 3;

pub(crate) const SUBSCRIPTION_OPTIONS_RESERVED_BITS_MASK311 : u8 = 252;

pub(crate) const MAXIMUM_STRING_PROPERTY_LENGTH : usize = 65535;
pub(crate) const MAXIMUM_BINARY_PROPERTY_LENGTH : usize = 65535;

/// Converts a u8 to a QualityOfService value.  Values above 2 are a decoding failure.
pub(crate) fn convert_u8_to_quality_of_service(value: u8) -> GneissResult<QualityOfService> {
    match value {
        0 => { Ok(QualityOfService::AtMostOnce) }
        1 => { Ok(QualityOfService::AtLeastOnce) }
        2 => { Ok(QualityOfService::ExactlyOnce) }
        _ => {
            let message = format!("convert_u8_to_quality_of_service - invalid qos value ({})", value);
            debug!("{}", message);
            Err(GneissError::new_decoding_failure(message))
        }
    }
}

pub(crate) fn quality_of_service_to_str (qos: QualityOfService) -> &'static str {
    match qos {
        QualityOfService::AtMostOnce => { "0 (AtMostOnce)" }
        QualityOfService::AtLeastOnce => { "1 (AtLeastOnce)" }
        QualityOfService::ExactlyOnce => { "2 (ExactlyOnce)" }
    }
}

/// Converts a u8 to a ConnectReturnCode value.  Values above 5 are a decoding failure.
pub(crate) fn convert_u8_to_connect_return_code(value: u8) -> GneissResult<ConnectReturnCode> {
    match value {
        0 => { Ok(ConnectReturnCode::Accepted) }
        1 => { Ok(ConnectReturnCode::UnacceptableProtocolVersion) }
        2 => { Ok(ConnectReturnCode::IdentifierRejected) }
        3 => { Ok(ConnectReturnCode::ServerUnavailable) }
        4 => { Ok(ConnectReturnCode::BadUsernameOrPassword) }
        5 => { Ok(ConnectReturnCode::NotAuthorized) }
        _ => {
            let message = format!("convert_u8_to_connect_return_code - invalid return code ({})", value);
            debug!("{}", message);
            Err(GneissError::new_decoding_failure(message))
        }
    }
}

pub(crate) fn connect_return_code_to_str(return_code: ConnectReturnCode) -> &'static str {
    match return_code {
        ConnectReturnCode::Accepted => { "Accepted" }
        ConnectReturnCode::UnacceptableProtocolVersion => { "UnacceptableProtocolVersion" }
        ConnectReturnCode::IdentifierRejected => { "IdentifierRejected" }
        ConnectReturnCode::ServerUnavailable => { "ServerUnavailable" }
        ConnectReturnCode::BadUsernameOrPassword => { "BadUsernameOrPassword" }
        ConnectReturnCode::NotAuthorized => { "NotAuthorized" }
    }
}

/// Converts a u8 to a SubackReturnCode value.  Anything other than 0, 1, 2 and 0x80 is a
/// decoding failure.
pub(crate) fn convert_u8_to_suback_return_code(value: u8) -> GneissResult<SubackReturnCode> {
    match value {
        0 => { Ok(SubackReturnCode::GrantedQos0) }
        1 => { Ok(SubackReturnCode::GrantedQos1) }
        2 => { Ok(SubackReturnCode::GrantedQos2) }
        128 => { Ok(SubackReturnCode::Failure) }
        _ => {
            let message = format!("convert_u8_to_suback_return_code - invalid return code ({})", value);
            debug!("{}", message);
            Err(GneissError::new_decoding_failure(message))
        }
    }
}

pub(crate) fn suback_return_code_to_str(return_code: SubackReturnCode) -> &'static str {
    match return_code {
        SubackReturnCode::GrantedQos0 => { "GrantedQos0" }
        SubackReturnCode::GrantedQos1 => { "GrantedQos1" }
        SubackReturnCode::GrantedQos2 => { "GrantedQos2" }
        SubackReturnCode::Failure => { "Failure" }
    }
}

/// The value the low nibble of a fixed header's first byte must hold for every packet
/// type other than publish.
pub(crate) fn required_fixed_header_flags(packet_type: PacketType) -> u8 {
    match packet_type {
        PacketType::Pubrel | PacketType::Subscribe | PacketType::Unsubscribe => { FIXED_HEADER_REQUIRED_FLAGS_AT_LEAST_ONCE }
        _ => { 0 }
    }
}

pub(crate) fn mqtt_packet_to_packet_type(packet: &MqttPacket) -> PacketType {
    match packet {
        MqttPacket::Connect(_) => { PacketType::Connect }
        MqttPacket::Connack(_) => { PacketType::Connack }
        MqttPacket::Publish(_) => { PacketType::Publish}
        MqttPacket::Puback(_) => { PacketType::Puback }
        MqttPacket::Pubrec(_) => { PacketType::Pubrec }
        MqttPacket::Pubrel(_) => { PacketType::Pubrel }
        MqttPacket::Pubcomp(_) => { PacketType::Pubcomp }
        MqttPacket::Subscribe(_) => { PacketType::Subscribe }
        MqttPacket::Suback(_) => { PacketType::Suback }
        MqttPacket::Unsubscribe(_) => { PacketType::Unsubscribe }
        MqttPacket::Unsuback(_) => { PacketType::Unsuback }
        MqttPacket::Pingreq(_) => { PacketType::Pingreq }
        MqttPacket::Pingresp(_) => { PacketType::Pingresp }
        MqttPacket::Disconnect(_) => { PacketType::Disconnect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn quality_of_service_conversions() {
        assert_eq!(QualityOfService::AtMostOnce, convert_u8_to_quality_of_service(0).unwrap());
        assert_eq!(QualityOfService::AtLeastOnce, convert_u8_to_quality_of_service(1).unwrap());
        assert_eq!(QualityOfService::ExactlyOnce, convert_u8_to_quality_of_service(2).unwrap());
        assert_matches!(convert_u8_to_quality_of_service(3), Err(GneissError::DecodingFailure(_)));
        assert_matches!(QualityOfService::try_from(255), Err(GneissError::DecodingFailure(_)));
    }

    #[test]
    fn connect_return_code_conversions() {
        for value in 0..6u8 {
            let return_code = convert_u8_to_connect_return_code(value).unwrap();
            assert_eq!(value, return_code as u8);
        }

        assert_matches!(convert_u8_to_connect_return_code(6), Err(GneissError::DecodingFailure(_)));
        assert_matches!(convert_u8_to_connect_return_code(128), Err(GneissError::DecodingFailure(_)));
    }

    #[test]
    fn suback_return_code_conversions() {
        assert_eq!(SubackReturnCode::GrantedQos0, convert_u8_to_suback_return_code(0).unwrap());
        assert_eq!(SubackReturnCode::GrantedQos2, convert_u8_to_suback_return_code(2).unwrap());
        assert_eq!(SubackReturnCode::Failure, convert_u8_to_suback_return_code(0x80).unwrap());
        assert_matches!(convert_u8_to_suback_return_code(3), Err(GneissError::DecodingFailure(_)));
        assert_matches!(convert_u8_to_suback_return_code(0x81), Err(GneissError::DecodingFailure(_)));
    }

    #[test]
    fn required_flags_per_packet_type() {
        assert_eq!(0x02, required_fixed_header_flags(PacketType::Pubrel));
        assert_eq!(0x02, required_fixed_header_flags(PacketType::Subscribe));
        assert_eq!(0x02, required_fixed_header_flags(PacketType::Unsubscribe));
        assert_eq!(0, required_fixed_header_flags(PacketType::Puback));
        assert_eq!(0, required_fixed_header_flags(PacketType::Connect));
        assert_eq!(0, required_fixed_header_flags(PacketType::Pingreq));
    }
}
