/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Functionality for encoding MQTT packets into their wire representation.

The packet body is written to a scratch buffer first.  The fixed header is then derived from
the buffered body length so the remaining length always matches the body exactly, and header
and body are handed to the sink in a single write.
 */

pub(crate) mod utils;

use crate::config::CodecConfig;
use crate::encode::utils::*;
use crate::error::{GneissError, GneissResult};
use crate::header::FixedHeader;
use crate::logging::*;
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

use log::*;

use std::io::Write;

fn write_packet_body(mqtt_packet: &MqttPacket, dest: &mut Vec<u8>) -> GneissResult<()> {
    match mqtt_packet {
        MqttPacket::Connect(packet) => { write_connect_body(packet, dest) }
        MqttPacket::Connack(packet) => { write_connack_body(packet, dest) }
        MqttPacket::Publish(packet) => { write_publish_body(packet, dest) }
        MqttPacket::Puback(packet) => { write_puback_body(packet, dest) }
        MqttPacket::Pubrec(packet) => { write_pubrec_body(packet, dest) }
        MqttPacket::Pubrel(packet) => { write_pubrel_body(packet, dest) }
        MqttPacket::Pubcomp(packet) => { write_pubcomp_body(packet, dest) }
        MqttPacket::Subscribe(packet) => { write_subscribe_body(packet, dest) }
        MqttPacket::Suback(packet) => { write_suback_body(packet, dest) }
        MqttPacket::Unsubscribe(packet) => { write_unsubscribe_body(packet, dest) }
        MqttPacket::Unsuback(packet) => { write_unsuback_body(packet, dest) }
        MqttPacket::Pingreq(packet) => { write_pingreq_body(packet, dest) }
        MqttPacket::Pingresp(packet) => { write_pingresp_body(packet, dest) }
        MqttPacket::Disconnect(packet) => { write_disconnect_body(packet, dest) }
    }
}

fn compute_fixed_header(mqtt_packet: &MqttPacket, remaining_length: u32) -> FixedHeader {
    if let MqttPacket::Publish(publish) = mqtt_packet {
        return FixedHeader::new_publish(publish.duplicate, publish.qos, publish.retain, remaining_length);
    }

    FixedHeader::new(mqtt_packet.packet_type(), remaining_length)
}

fn encode_body(mqtt_packet: &MqttPacket) -> GneissResult<(FixedHeader, Vec<u8>)> {
    let mut body = Vec::new();
    write_packet_body(mqtt_packet, &mut body)?;

    if body.len() > MAXIMUM_VARIABLE_LENGTH_INTEGER {
        let message = format!("encode_body - {} body length ({}) exceeds the protocol maximum (2 ^ 28 - 1)", mqtt_packet.packet_type(), body.len());
        debug!("{}", message);
        return Err(GneissError::new_encoding_failure(message));
    }

    let header = compute_fixed_header(mqtt_packet, body.len() as u32);

    Ok((header, body))
}

pub(crate) fn encode_packet_with_config(mqtt_packet: &MqttPacket, config: &CodecConfig) -> GneissResult<Vec<u8>> {
    log_packet("Encoding packet: ", mqtt_packet);

    let (header, body) = encode_body(mqtt_packet)?;

    let packet_size = header.encoded_length()? + body.len();
    if packet_size > config.maximum_packet_size as usize {
        debug!("encode_packet_with_config - {} size ({}) exceeds the maximum packet size ({})", mqtt_packet.packet_type(), packet_size, config.maximum_packet_size);
        return Err(GneissError::new_packet_too_large(packet_size, config.maximum_packet_size));
    }

    let mut encoding = Vec::with_capacity(packet_size);
    header.encode(&mut encoding)?;
    encoding.extend_from_slice(&body);

    Ok(encoding)
}

pub(crate) fn write_packet_with_config<W: Write>(mqtt_packet: &MqttPacket, config: &CodecConfig, sink: &mut W) -> GneissResult<()> {
    let encoding = encode_packet_with_config(mqtt_packet, config)?;

    if let Err(error) = sink.write_all(&encoding) {
        debug!("write_packet_with_config - sink write failed: {}", error);
        return Err(error.into());
    }

    Ok(())
}

/// Encodes a packet and writes it to `sink` with a single `write_all` call.  Nothing is written
/// if encoding fails.
pub fn encode_packet<W: Write>(packet: &MqttPacket, sink: &mut W) -> GneissResult<()> {
    write_packet_with_config(packet, &CodecConfig::default(), sink)
}

/// Encodes a packet into a newly allocated buffer
pub fn encode_packet_to_vec(packet: &MqttPacket) -> GneissResult<Vec<u8>> {
    encode_packet_with_config(packet, &CodecConfig::default())
}

impl MqttPacket {

    /// Returns the fixed header this packet encodes with.  The remaining length is computed
    /// from the packet's current contents.
    pub fn fixed_header(&self) -> GneissResult<FixedHeader> {
        let (header, _) = encode_body(self)?;

        Ok(header)
    }

    /// Encodes this packet into `sink`
    pub fn encode<W: Write>(&self, sink: &mut W) -> GneissResult<()> {
        encode_packet(self, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct FailingSink {}

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingSink {
        writes: usize,
        bytes: Vec<u8>,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.writes += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn encode_writes_once() {
        let packet = MqttPacket::Publish(PublishPacket::builder("a/b", QualityOfService::AtLeastOnce)
            .with_packet_id(7)
            .with_payload("hello".as_bytes().to_vec())
            .build());

        let mut sink = CountingSink::default();
        encode_packet(&packet, &mut sink).unwrap();

        assert_eq!(1, sink.writes);
        assert_eq!(encode_packet_to_vec(&packet).unwrap(), sink.bytes);
    }

    #[test]
    fn encode_sink_failure_is_io_error() {
        let packet = MqttPacket::Pingreq(PingreqPacket {});
        let mut sink = FailingSink {};

        assert_matches!(encode_packet(&packet, &mut sink), Err(GneissError::StdIoError(_)));
    }

    #[test]
    fn fixed_header_tracks_body_length() {
        let packet = MqttPacket::Publish(PublishPacket::new("topic", QualityOfService::AtMostOnce, &[0u8; 200]));
        let header = packet.fixed_header().unwrap();

        assert_eq!(PacketType::Publish, header.packet_type());
        assert_eq!(2 + 5 + 200, header.remaining_length());

        let encoding = encode_packet_to_vec(&packet).unwrap();
        assert_eq!(header.encoded_length().unwrap() + header.remaining_length() as usize, encoding.len());
    }

    #[test]
    fn encode_exceeds_maximum_packet_size() {
        let packet = MqttPacket::Publish(PublishPacket::new("topic", QualityOfService::AtMostOnce, &[0u8; 64]));
        let config = CodecConfig::builder().with_maximum_packet_size(32).build();

        assert_matches!(encode_packet_with_config(&packet, &config), Err(GneissError::PacketTooLarge(context)) => {
            assert_eq!(32, context.maximum_packet_size);
            assert_eq!(2 + 2 + 5 + 64, context.packet_size);
        });

        let mut sink = CountingSink::default();
        assert!(write_packet_with_config(&packet, &config, &mut sink).is_err());
        assert_eq!(0, sink.writes);
    }
}
