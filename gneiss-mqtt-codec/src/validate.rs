/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing the conformance checks applied to structurally valid packets.

Validation never fails with an error; it produces a [`ValidationOutcome`] that calling code
can turn into a negative acknowledgement or a closed connection.
 */

use crate::error::{GneissError, GneissResult};
use crate::mqtt::*;
use crate::mqtt::connack::*;
use crate::mqtt::connect::*;
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

use std::fmt;

/// Result of validating a packet.  The first six values mirror the CONNACK return codes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ValidationOutcome {

    /// The packet conforms to the protocol
    #[default]
    Accepted,

    /// A connect packet asked for a protocol level the codec does not support
    UnacceptableProtocolVersion,

    /// A connect packet's client identifier cannot be accepted
    IdentifierRejected,

    /// The server is unable to accept connections
    ServerUnavailable,

    /// The username or password is malformed
    BadUsernameOrPassword,

    /// The client is not authorized to connect
    NotAuthorized,

    /// The packet breaks a protocol rule that has no more specific outcome
    ProtocolViolation,

    /// A packet that requires a non-zero packet id carries zero
    MissingPacketId,

    /// A qos 0 publish carries a packet id
    SurplusPacketId,

    /// A topic name is empty, too long, or contains wildcards
    TopicNameInvalid,

    /// A topic filter is empty, too long, or misuses wildcards
    TopicFilterInvalid,

    /// The packet could not be structurally decoded.  Never produced by validation itself; see
    /// [`ValidationOutcome::from_error`].
    MalformedPacket,
}

impl ValidationOutcome {

    /// Returns the CONNACK return code that reports this outcome to a client, if the protocol
    /// defines one.
    pub fn connect_return_code(&self) -> Option<ConnectReturnCode> {
        match self {
            ValidationOutcome::Accepted => { Some(ConnectReturnCode::Accepted) }
            ValidationOutcome::UnacceptableProtocolVersion => { Some(ConnectReturnCode::UnacceptableProtocolVersion) }
            ValidationOutcome::IdentifierRejected => { Some(ConnectReturnCode::IdentifierRejected) }
            ValidationOutcome::ServerUnavailable => { Some(ConnectReturnCode::ServerUnavailable) }
            ValidationOutcome::BadUsernameOrPassword => { Some(ConnectReturnCode::BadUsernameOrPassword) }
            ValidationOutcome::NotAuthorized => { Some(ConnectReturnCode::NotAuthorized) }
            _ => { None }
        }
    }

    /// Returns true if the packet passed validation
    pub fn is_accepted(&self) -> bool {
        *self == ValidationOutcome::Accepted
    }

    /// Converts a non-accepted outcome into a PacketValidation error
    pub fn into_result(self, packet_type: PacketType) -> GneissResult<()> {
        if self.is_accepted() {
            return Ok(());
        }

        Err(GneissError::new_packet_validation(packet_type, self))
    }

    /// Maps an error back onto the outcome a server would report for it.  Structural decode
    /// failures become MalformedPacket, a PacketValidation error yields its wrapped outcome, and
    /// encoding, size, and I/O errors have no outcome.
    pub fn from_error(error: &GneissError) -> Option<ValidationOutcome> {
        match error {
            GneissError::MalformedVarint(_) |
            GneissError::MalformedFixedHeader(_) |
            GneissError::TruncatedPayload(_) |
            GneissError::UnsupportedPacketType(_) |
            GneissError::DecodingFailure(_) => { Some(ValidationOutcome::MalformedPacket) }
            GneissError::PacketValidation(context) => { Some(context.outcome) }
            _ => { None }
        }
    }
}

impl From<ConnectReturnCode> for ValidationOutcome {
    fn from(return_code: ConnectReturnCode) -> Self {
        match return_code {
            ConnectReturnCode::Accepted => { ValidationOutcome::Accepted }
            ConnectReturnCode::UnacceptableProtocolVersion => { ValidationOutcome::UnacceptableProtocolVersion }
            ConnectReturnCode::IdentifierRejected => { ValidationOutcome::IdentifierRejected }
            ConnectReturnCode::ServerUnavailable => { ValidationOutcome::ServerUnavailable }
            ConnectReturnCode::BadUsernameOrPassword => { ValidationOutcome::BadUsernameOrPassword }
            ConnectReturnCode::NotAuthorized => { ValidationOutcome::NotAuthorized }
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Accepted => { write!(f, "Accepted") }
            ValidationOutcome::UnacceptableProtocolVersion => { write!(f, "UnacceptableProtocolVersion") }
            ValidationOutcome::IdentifierRejected => { write!(f, "IdentifierRejected") }
            ValidationOutcome::ServerUnavailable => { write!(f, "ServerUnavailable") }
            ValidationOutcome::BadUsernameOrPassword => { write!(f, "BadUsernameOrPassword") }
            ValidationOutcome::NotAuthorized => { write!(f, "NotAuthorized") }
            ValidationOutcome::ProtocolViolation => { write!(f, "ProtocolViolation") }
            ValidationOutcome::MissingPacketId => { write!(f, "MissingPacketId") }
            ValidationOutcome::SurplusPacketId => { write!(f, "SurplusPacketId") }
            ValidationOutcome::TopicNameInvalid => { write!(f, "TopicNameInvalid") }
            ValidationOutcome::TopicFilterInvalid => { write!(f, "TopicFilterInvalid") }
            ValidationOutcome::MalformedPacket => { write!(f, "MalformedPacket") }
        }
    }
}

/// Settings that adjust how strictly packets are validated
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ValidationContext {
    pub(crate) strict_packet_ids: bool,
}

impl ValidationContext {

    /// Creates a new validation context
    pub fn new(strict_packet_ids: bool) -> Self {
        ValidationContext {
            strict_packet_ids
        }
    }

    /// If true, acknowledgement packets with a packet id of zero are rejected with
    /// MissingPacketId.  Otherwise they are accepted.
    pub fn strict_packet_ids(&self) -> bool { self.strict_packet_ids }
}

/// Checks a packet against the protocol's conformance rules
pub fn validate_packet(packet: &MqttPacket, context: &ValidationContext) -> ValidationOutcome {
    match packet {
        MqttPacket::Connect(packet) => { validate_connect_packet(packet, context) }
        MqttPacket::Connack(packet) => { validate_connack_packet(packet, context) }
        MqttPacket::Publish(packet) => { validate_publish_packet(packet, context) }
        MqttPacket::Puback(packet) => { validate_puback_packet(packet, context) }
        MqttPacket::Pubrec(packet) => { validate_pubrec_packet(packet, context) }
        MqttPacket::Pubrel(packet) => { validate_pubrel_packet(packet, context) }
        MqttPacket::Pubcomp(packet) => { validate_pubcomp_packet(packet, context) }
        MqttPacket::Subscribe(packet) => { validate_subscribe_packet(packet, context) }
        MqttPacket::Suback(packet) => { validate_suback_packet(packet, context) }
        MqttPacket::Unsubscribe(packet) => { validate_unsubscribe_packet(packet, context) }
        MqttPacket::Unsuback(packet) => { validate_unsuback_packet(packet, context) }
        MqttPacket::Pingreq(_) | MqttPacket::Pingresp(_) | MqttPacket::Disconnect(_) => { ValidationOutcome::Accepted }
    }
}

impl MqttPacket {

    /// Validates the packet using default validation settings
    pub fn validate(&self) -> ValidationOutcome {
        validate_packet(self, &ValidationContext::default())
    }
}

/// Returns true if `topic` can be published to: non-empty, at most 65535 bytes, and free of
/// wildcard characters.
pub fn is_valid_topic(topic: &str) -> bool {
    if topic.is_empty() || topic.len() > MAXIMUM_STRING_PROPERTY_LENGTH {
        return false;
    }

    if topic.contains(['#', '+']) {
        return false;
    }

    true
}

/// Returns true if `filter` can be subscribed to.  `#` may only appear as the whole final
/// segment and `+` only as a whole segment.
pub fn is_valid_topic_filter(filter: &str) -> bool {
    if filter.is_empty() || filter.len() > MAXIMUM_STRING_PROPERTY_LENGTH {
        return false;
    }

    let mut seen_mlw = false;
    for segment in filter.split('/') {
        if seen_mlw {
            return false;
        }

        if segment.len() == 1 {
            if segment == "#" {
                seen_mlw = true;
            }
        } else if segment.contains(['#', '+']) {
            return false;
        }
    }

    true
}

macro_rules! validate_ack_packet {
    ($function_name: ident, $packet_type_name: ident) => {
        pub(crate) fn $function_name(packet: &$packet_type_name, context: &ValidationContext) -> ValidationOutcome {
            if packet.packet_id == 0 && context.strict_packet_ids {
                return ValidationOutcome::MissingPacketId;
            }

            ValidationOutcome::Accepted
        }
    };
}

pub(crate) use validate_ack_packet;
