/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
MQTT 3.1.1 packet encoding, decoding, and validation.

The crate converts between the fourteen MQTT 3.1.1 control packets and their wire encoding.  It
performs no network I/O of its own: encoding writes to any `std::io::Write` sink, and decoding
works from a decoded fixed header plus body, a byte slice holding one complete frame, or a
blocking `std::io::Read` source.

Decoding checks structure only.  Protocol-level rules (packet id requirements, topic syntax,
connect identity rules) are checked separately by [`validate_packet`], which reports a
[`ValidationOutcome`] rather than an error.

```
use gneiss_mqtt_codec::*;

let packet = MqttPacket::Puback(PubackPacket::new(12345));
let bytes = encode_packet_to_vec(&packet).unwrap();
assert_eq!(vec![0x40u8, 0x02, 0x30, 0x39], bytes);

let (decoded, consumed) = decode_packet_from_bytes(&bytes).unwrap();
assert_eq!(packet, decoded);
assert_eq!(4, consumed);
assert!(decoded.validate().is_accepted());
```
 */

mod codec;
pub mod config;
mod decode;
mod encode;
pub mod error;
mod header;
mod logging;
pub mod mqtt;
mod registry;
mod validate;

pub use codec::{PacketCodec, read_packet};
pub use config::{CodecConfig, CodecConfigBuilder, MAXIMUM_PACKET_SIZE};
pub use decode::{decode_packet, decode_packet_from_bytes};
pub use decode::utils::decode_vli;
pub use encode::{encode_packet, encode_packet_to_vec};
pub use encode::utils::{compute_variable_length_integer_encode_size, encode_vli, MAXIMUM_VARIABLE_LENGTH_INTEGER};
pub use error::{GneissError, GneissResult};
pub use header::{decode_fixed_header, FixedHeader};
pub use registry::{new_packet, new_packet_from_code};
pub use validate::{is_valid_topic, is_valid_topic_filter, validate_packet, ValidationContext, ValidationOutcome};

/* Re-export all packet types at the root level */
pub use mqtt::{
    ConnackPacket,
    ConnectPacket,
    ConnectPacketBuilder,
    ConnectReturnCode,
    DisconnectPacket,
    MqttPacket,
    PacketType,
    PingreqPacket,
    PingrespPacket,
    PubackPacket,
    PubcompPacket,
    PublishPacket,
    PublishPacketBuilder,
    PubrecPacket,
    PubrelPacket,
    QualityOfService,
    SubackPacket,
    SubackReturnCode,
    SubscribePacket,
    SubscribePacketBuilder,
    Subscription,
    UnsubackPacket,
    UnsubscribePacket,
    UnsubscribePacketBuilder,
    Will,
};
