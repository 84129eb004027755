/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing [`PacketCodec`], which bundles the encode, decode, and validate operations
with a fixed configuration, and a blocking helper to read one packet from a [`Read`] source.
 */

use crate::config::CodecConfig;
use crate::decode::*;
use crate::encode::*;
use crate::error::{GneissError, GneissResult};
use crate::header::*;
use crate::mqtt::*;
use crate::validate::*;

use log::*;

use std::io;
use std::io::{Read, Write};

/// Packet encoder/decoder with a fixed configuration.  Holds no per-connection state, so a
/// single instance can be shared between connections.
#[derive(Clone, Copy, Debug, Default)]
pub struct PacketCodec {
    config: CodecConfig,
}

impl PacketCodec {

    /// Creates a new codec from a configuration
    pub fn new(config: CodecConfig) -> Self {
        PacketCodec {
            config
        }
    }

    /// Returns the codec's configuration
    pub fn config(&self) -> &CodecConfig { &self.config }

    /// Encodes a packet and writes it to `sink` in a single write
    pub fn encode<W: Write>(&self, packet: &MqttPacket, sink: &mut W) -> GneissResult<()> {
        write_packet_with_config(packet, &self.config, sink)
    }

    /// Encodes a packet into a newly allocated buffer
    pub fn encode_to_vec(&self, packet: &MqttPacket) -> GneissResult<Vec<u8>> {
        encode_packet_with_config(packet, &self.config)
    }

    /// Decodes one complete frame from the front of `bytes`, returning the packet and the
    /// number of bytes consumed
    pub fn decode(&self, bytes: &[u8]) -> GneissResult<(MqttPacket, usize)> {
        decode_packet_from_bytes_with_config(bytes, &self.config)
    }

    /// Decodes a packet body whose fixed header was decoded separately
    pub fn decode_packet(&self, header: &FixedHeader, body: &[u8]) -> GneissResult<MqttPacket> {
        decode_packet(header, body)
    }

    /// Validates a packet against the codec's validation settings
    pub fn validate(&self, packet: &MqttPacket) -> ValidationOutcome {
        validate_packet(packet, &self.config.validation_context())
    }

    /// Reads exactly one packet from `source`, blocking until it is complete
    pub fn read_packet<R: Read>(&self, source: &mut R) -> GneissResult<MqttPacket> {
        read_packet_with_config(source, &self.config)
    }
}

fn read_u8<R: Read>(source: &mut R) -> GneissResult<u8> {
    let mut byte = [0u8; 1];
    source.read_exact(&mut byte)?;

    Ok(byte[0])
}

fn read_packet_with_config<R: Read>(source: &mut R, config: &CodecConfig) -> GneissResult<MqttPacket> {
    let first_byte = read_u8(source)?;

    let mut remaining_length_bytes = Vec::with_capacity(4);
    loop {
        let byte = read_u8(source)?;
        remaining_length_bytes.push(byte);

        if (byte & 0x80) == 0 || remaining_length_bytes.len() >= 4 {
            break;
        }
    }

    let (header, _) = FixedHeader::decode(first_byte, &remaining_length_bytes)?;

    let packet_size = 1 + remaining_length_bytes.len() + header.remaining_length() as usize;
    if packet_size > config.maximum_packet_size() as usize {
        debug!("read_packet - {} size ({}) exceeds the maximum packet size ({})", header.packet_type(), packet_size, config.maximum_packet_size());
        return Err(GneissError::new_packet_too_large(packet_size, config.maximum_packet_size()));
    }

    // the buffer grows with the bytes that actually arrive rather than the announced length
    let body_length = header.remaining_length() as usize;
    let mut body = Vec::new();
    source.by_ref().take(body_length as u64).read_to_end(&mut body)?;

    if body.len() < body_length {
        debug!("read_packet - {} body ended after {} of {} bytes", header.packet_type(), body.len(), body_length);
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }

    decode_packet(&header, &body)
}

/// Reads exactly one packet from `source` using the default configuration.  Reaching the end
/// of input inside a frame is reported as a StdIoError.
pub fn read_packet<R: Read>(source: &mut R) -> GneissResult<MqttPacket> {
    read_packet_with_config(source, &CodecConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    #[test]
    fn read_puback() {
        let mut cursor = Cursor::new(vec![0x40u8, 0x02, 0x30, 0x39]);
        assert_eq!(MqttPacket::Puback(PubackPacket::new(12345)), read_packet(&mut cursor).unwrap());
    }

    #[test]
    fn read_end_of_input_inside_frame() {
        let mut cursor = Cursor::new(vec![0x40u8, 0x02, 0x30]);
        assert_matches!(read_packet(&mut cursor), Err(GneissError::StdIoError(_)));

        let mut cursor = Cursor::new(vec![0x30u8, 0x80]);
        assert_matches!(read_packet(&mut cursor), Err(GneissError::StdIoError(_)));

        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert_matches!(read_packet(&mut cursor), Err(GneissError::StdIoError(_)));
    }

    // hands out the frame bytes it was given, then fails every read
    struct StallingReader {
        bytes: Vec<u8>,
        position: usize,
        largest_read_request: usize,
    }

    impl Read for StallingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.largest_read_request = usize::max(self.largest_read_request, buf.len());

            if self.position >= self.bytes.len() {
                return Err(io::Error::new(io::ErrorKind::TimedOut, "stalled"));
            }

            let count = usize::min(buf.len(), self.bytes.len() - self.position);
            buf[..count].copy_from_slice(&self.bytes[self.position..self.position + count]);
            self.position += count;

            Ok(count)
        }
    }

    #[test]
    fn read_does_not_size_buffer_from_announced_length() {
        let mut reader = StallingReader {
            bytes: vec![0x30u8, 0xFF, 0xFF, 0xFF, 0x7F],
            position: 0,
            largest_read_request: 0,
        };

        assert_matches!(read_packet(&mut reader), Err(GneissError::StdIoError(_)));
        assert_eq!(5, reader.position);
        assert!(reader.largest_read_request <= 64 * 1024);
    }

    #[test]
    fn read_short_body_is_unexpected_eof() {
        let mut cursor = Cursor::new(vec![0x30u8, 0x0A, 0x00, 0x01, 0x61]);
        let error = read_packet(&mut cursor).unwrap_err();
        let kind = std::error::Error::source(&error)
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map(|io_error| io_error.kind());

        assert_matches!(error, GneissError::StdIoError(_));
        assert_eq!(Some(io::ErrorKind::UnexpectedEof), kind);
    }

    #[test]
    fn read_large_publish() {
        let packet = MqttPacket::Publish(PublishPacket::new("big", QualityOfService::AtMostOnce, &vec![3u8; 200 * 1024]));
        let mut cursor = Cursor::new(encode_packet_to_vec(&packet).unwrap());

        assert_eq!(packet, read_packet(&mut cursor).unwrap());
    }

    #[test]
    fn read_malformed_remaining_length() {
        let mut cursor = Cursor::new(vec![0x30u8, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
        assert_matches!(read_packet(&mut cursor), Err(GneissError::MalformedVarint(_)));
    }

    #[test]
    fn read_rejects_oversized_packet_before_body() {
        let codec = PacketCodec::new(CodecConfig::builder().with_maximum_packet_size(8).build());
        let mut cursor = Cursor::new(vec![0x30u8, 0x7F]);
        assert_matches!(codec.read_packet(&mut cursor), Err(GneissError::PacketTooLarge(_)));
    }

    #[test]
    fn codec_round_trip_and_validate() {
        let codec = PacketCodec::new(CodecConfig::builder().with_strict_packet_ids(true).build());

        let packet = MqttPacket::Pubcomp(PubcompPacket::new(0));
        let encoding = codec.encode_to_vec(&packet).unwrap();
        let (decoded, consumed) = codec.decode(&encoding).unwrap();

        assert_eq!(packet, decoded);
        assert_eq!(4, consumed);
        assert_eq!(ValidationOutcome::MissingPacketId, codec.validate(&decoded));
        assert_eq!(ValidationOutcome::Accepted, PacketCodec::default().validate(&decoded));

        let mut sink = Vec::new();
        codec.encode(&packet, &mut sink).unwrap();
        assert_eq!(encoding, sink);

        let (header, header_length) = decode_fixed_header(&sink).unwrap();
        assert_eq!(packet, codec.decode_packet(&header, &sink[header_length..]).unwrap());
    }
}
