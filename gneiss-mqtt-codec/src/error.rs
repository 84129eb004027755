/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
A module containing the core crate error enumeration, context structures, and conversion
definitions.
 */

use crate::mqtt::PacketType;
use crate::validate::ValidationOutcome;

use std::error::Error;
use std::fmt;

/// Additional details about a MalformedVarint error variant
#[derive(Debug)]
pub struct MalformedVarintContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// What was wrong with a rejected fixed header's first byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixedHeaderFault {

    /// The low nibble did not hold the flag value the packet type requires.
    ReservedFlags,

    /// A publish packet's qos bits held the value 3.
    InvalidQos,
}

/// Additional details about a MalformedFixedHeader error variant
#[derive(Debug)]
pub struct MalformedFixedHeaderContext {

    /// the first byte of the rejected fixed header
    pub first_byte: u8,

    /// which rule the first byte broke
    pub fault: FixedHeaderFault,
}

/// Additional details about a TruncatedPayload error variant
#[derive(Debug)]
pub struct TruncatedPayloadContext {

    /// name of the packet field that ran past the end of the available bytes
    pub field: &'static str,
}

/// Additional details about an UnsupportedPacketType error variant
#[derive(Debug)]
pub struct UnsupportedPacketTypeContext {

    /// the 4-bit packet type code that does not map to a known packet
    pub code: u8,
}

/// Additional details about a DecodingFailure error variant
#[derive(Debug)]
pub struct DecodingFailureContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about an EncodingFailure error variant
#[derive(Debug)]
pub struct EncodingFailureContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about a PacketTooLarge error variant
#[derive(Debug)]
pub struct PacketTooLargeContext {

    /// total size of the packet, fixed header included
    pub packet_size: usize,

    /// configured upper bound that was exceeded
    pub maximum_packet_size: u32,
}

/// Additional details about a StdIoError error variant
#[derive(Debug)]
pub struct StdIoErrorContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about a PacketValidation error variant
#[derive(Debug)]
pub struct PacketValidationContext {

    /// type of packet that failed validation
    pub packet_type: PacketType,

    /// the non-accepting outcome that validation produced
    pub outcome: ValidationOutcome,
}

/// Basic error type for the entire gneiss-mqtt-codec crate.
#[derive(Debug)]
#[non_exhaustive]
pub enum GneissError {

    /// A remaining length (or other variable length integer) continued past four bytes or
    /// the input ended before its final byte.
    MalformedVarint(MalformedVarintContext),

    /// The first byte of a fixed header carried flag bits that are not allowed for its
    /// packet type, or a publish qos of 3.
    MalformedFixedHeader(MalformedFixedHeaderContext),

    /// A packet body ended before a field it structurally requires.  The display text names
    /// the field and is stable.
    TruncatedPayload(TruncatedPayloadContext),

    /// The packet type code was 0, 15, or otherwise outside the known packet kinds.
    UnsupportedPacketType(UnsupportedPacketTypeContext),

    /// Error encountered while attempting to decode an MQTT packet that is not covered by a more
    /// specific variant.  Examples include invalid utf-8, trailing bytes after a fixed-size
    /// body, and reserved bits set in connect flags.
    DecodingFailure(DecodingFailureContext),

    /// Error encountered while attempting to encode an MQTT packet
    EncodingFailure(EncodingFailureContext),

    /// A packet, inbound or outbound, is larger than the configured maximum packet size.
    PacketTooLarge(PacketTooLargeContext),

    /// Generic error wrapping std::io::Error
    StdIoError(StdIoErrorContext),

    /// A packet was structurally valid but validation did not accept it.  Only produced when a
    /// caller explicitly converts a validation outcome into an error.
    PacketValidation(PacketValidationContext),
}

impl GneissError {

    pub(crate) fn new_malformed_varint(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        GneissError::MalformedVarint(
            MalformedVarintContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_malformed_fixed_header(first_byte: u8, fault: FixedHeaderFault) -> Self {
        GneissError::MalformedFixedHeader(
            MalformedFixedHeaderContext {
                first_byte,
                fault
            }
        )
    }

    pub(crate) fn new_truncated_payload(field: &'static str) -> Self {
        GneissError::TruncatedPayload(
            TruncatedPayloadContext {
                field
            }
        )
    }

    pub(crate) fn new_unsupported_packet_type(code: u8) -> Self {
        GneissError::UnsupportedPacketType(
            UnsupportedPacketTypeContext {
                code
            }
        )
    }

    pub(crate) fn new_decoding_failure(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        GneissError::DecodingFailure(
            DecodingFailureContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_encoding_failure(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        GneissError::EncodingFailure(
            EncodingFailureContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_packet_too_large(packet_size: usize, maximum_packet_size: u32) -> Self {
        GneissError::PacketTooLarge(
            PacketTooLargeContext {
                packet_size,
                maximum_packet_size
            }
        )
    }

    /// Constructs a StdIoError variant from an existing error.  Typically this should be a
    /// std::io::Error
    #[doc(hidden)]
    pub fn new_std_io_error(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        GneissError::StdIoError(
            StdIoErrorContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_packet_validation(packet_type: PacketType, outcome: ValidationOutcome) -> Self {
        GneissError::PacketValidation(
            PacketValidationContext {
                packet_type,
                outcome
            }
        )
    }
}

impl Error for GneissError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GneissError::MalformedVarint(context) => {
                Some(context.source.as_ref())
            }
            GneissError::DecodingFailure(context) => {
                Some(context.source.as_ref())
            }
            GneissError::EncodingFailure(context) => {
                Some(context.source.as_ref())
            }
            GneissError::StdIoError(context) => {
                Some(context.source.as_ref())
            }
            _ => { None }
        }
    }
}

impl fmt::Display for GneissError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GneissError::MalformedVarint(_) => {
                write!(f, "malformed variable length integer; source contains further details")
            }
            GneissError::MalformedFixedHeader(context) => {
                match context.fault {
                    FixedHeaderFault::ReservedFlags => {
                        write!(f, "fixed header byte 0x{:02X} has flag bits that are invalid for its packet type", context.first_byte)
                    }
                    FixedHeaderFault::InvalidQos => {
                        write!(f, "fixed header byte 0x{:02X} has a malformed qos value", context.first_byte)
                    }
                }
            }
            GneissError::TruncatedPayload(context) => {
                write!(f, "{}: protocol violation: packet is truncated", context.field)
            }
            GneissError::UnsupportedPacketType(context) => {
                write!(f, "packet type code {} is not a supported MQTT packet type", context.code)
            }
            GneissError::DecodingFailure(_) => {
                write!(f, "failure encountered while decoding an incoming MQTT packet")
            }
            GneissError::EncodingFailure(_) => {
                write!(f, "failure encountered while encoding an outbound MQTT packet")
            }
            GneissError::PacketTooLarge(context) => {
                write!(f, "packet size of {} bytes exceeds the maximum packet size of {} bytes", context.packet_size, context.maximum_packet_size)
            }
            GneissError::StdIoError(_) => {
                write!(f, "generic error wrapper for std::io::Error when no more specialized error is appropriate; source contains further details")
            }
            GneissError::PacketValidation(context) => {
                write!(f, "{} failed validation with outcome {}", context.packet_type, context.outcome)
            }
        }
    }
}

impl From<std::io::Error> for GneissError {
    fn from(error: std::io::Error) -> Self {
        GneissError::new_std_io_error(error)
    }
}

impl From<core::str::Utf8Error> for GneissError {
    fn from(err: core::str::Utf8Error) -> Self {
        GneissError::new_decoding_failure(err)
    }
}

/// Crate-wide result type for functions that can fail
pub type GneissResult<T> = Result<T, GneissError>;
