/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing types for configuring the packet codec.
 */

use crate::encode::utils::MAXIMUM_VARIABLE_LENGTH_INTEGER;
use crate::validate::ValidationContext;

/// Largest possible MQTT packet: one type byte, four remaining length bytes, and the largest
/// remaining length.
pub const MAXIMUM_PACKET_SIZE: u32 = (1 + 4 + MAXIMUM_VARIABLE_LENGTH_INTEGER) as u32;

/// Configuration options that control encoding, decoding, and validation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodecConfig {
    pub(crate) maximum_packet_size: u32,
    pub(crate) strict_packet_ids: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            maximum_packet_size: MAXIMUM_PACKET_SIZE,
            strict_packet_ids: false,
        }
    }
}

impl CodecConfig {

    /// Creates a new builder for codec configuration
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    /// Returns the largest packet, in total bytes, that will be encoded or decoded
    pub fn maximum_packet_size(&self) -> u32 { self.maximum_packet_size }

    /// Returns whether acknowledgement packets with a zero packet id fail validation
    pub fn strict_packet_ids(&self) -> bool { self.strict_packet_ids }

    /// Returns the validation settings implied by this configuration
    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext::new(self.strict_packet_ids)
    }
}

/// Builder type for codec configuration
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig
}

impl CodecConfigBuilder {

    /// Creates a new builder object with default settings
    pub fn new() -> Self {
        CodecConfigBuilder {
            config: CodecConfig::default()
        }
    }

    /// Sets the largest packet size, in total bytes, that will be encoded or decoded.  Packets
    /// above this size fail with a PacketTooLarge error.  Values above the protocol maximum are
    /// clamped to it.
    pub fn with_maximum_packet_size(mut self, maximum_packet_size: u32) -> Self {
        self.config.maximum_packet_size = u32::min(maximum_packet_size, MAXIMUM_PACKET_SIZE);
        self
    }

    /// Sets whether acknowledgement packets (puback, pubrec, pubrel, pubcomp, unsuback) with a
    /// packet id of zero are rejected during validation.
    pub fn with_strict_packet_ids(mut self, strict_packet_ids: bool) -> Self {
        self.config.strict_packet_ids = strict_packet_ids;
        self
    }

    /// Creates a new codec configuration
    pub fn build(self) -> CodecConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CodecConfig::default();
        assert_eq!(268_435_460, config.maximum_packet_size());
        assert!(!config.strict_packet_ids());
        assert!(!config.validation_context().strict_packet_ids());
    }

    #[test]
    fn builder_config() {
        let config = CodecConfig::builder()
            .with_maximum_packet_size(1024)
            .with_strict_packet_ids(true)
            .build();

        assert_eq!(1024, config.maximum_packet_size());
        assert!(config.validation_context().strict_packet_ids());

        let config = CodecConfig::builder().with_maximum_packet_size(u32::MAX).build();
        assert_eq!(MAXIMUM_PACKET_SIZE, config.maximum_packet_size());
    }
}
