/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing a set of structured data types that model the MQTT 3.1.1 specification.
 */

use crate::error::GneissError;
use crate::mqtt::utils::*;

use std::fmt;

pub(crate) mod connack;
pub(crate) mod connect;
pub(crate) mod disconnect;
pub(crate) mod pingreq;
pub(crate) mod pingresp;
pub(crate) mod puback;
pub(crate) mod pubcomp;
pub(crate) mod publish;
pub(crate) mod pubrec;
pub(crate) mod pubrel;
pub(crate) mod suback;
pub(crate) mod subscribe;
pub(crate) mod unsuback;
pub(crate) mod unsubscribe;
pub(crate) mod utils;

/// MQTT message delivery quality of service.
///
/// Enum values match [MQTT311 spec](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718099) encoding values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum QualityOfService {

    /// The message is delivered according to the capabilities of the underlying network. No response is sent by the
    /// receiver and no retry is performed by the sender. The message arrives at the receiver either once or not at all.
    #[default]
    AtMostOnce = 0,

    /// A level of service that ensures that the message arrives at the receiver at least once.
    AtLeastOnce = 1,

    /// A level of service that ensures that the message arrives at the receiver exactly once.
    ExactlyOnce = 2,
}

impl TryFrom<u8> for QualityOfService {
    type Error = GneissError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        convert_u8_to_quality_of_service(value)
    }
}

/// Server return code for connection attempts, carried by a CONNACK packet.
///
/// Enum values match [MQTT311 spec](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc385349256) encoding values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConnectReturnCode {

    /// Connection accepted.
    #[default]
    Accepted = 0,

    /// The server does not support the level of the MQTT protocol requested by the client.
    UnacceptableProtocolVersion = 1,

    /// The client identifier is correct UTF-8 but not allowed by the server.
    IdentifierRejected = 2,

    /// The network connection has been made but the MQTT service is unavailable.
    ServerUnavailable = 3,

    /// The data in the user name or password is malformed.
    BadUsernameOrPassword = 4,

    /// The client is not authorized to connect.
    NotAuthorized = 5,
}

impl TryFrom<u8> for ConnectReturnCode {
    type Error = GneissError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        convert_u8_to_connect_return_code(value)
    }
}

/// Per-subscription result code carried by a SUBACK packet.
///
/// Enum values match [MQTT311 spec](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718071) encoding values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubackReturnCode {

    /// Subscription accepted with a maximum qos of 0.
    #[default]
    GrantedQos0 = 0,

    /// Subscription accepted with a maximum qos of 1.
    GrantedQos1 = 1,

    /// Subscription accepted with a maximum qos of 2.
    GrantedQos2 = 2,

    /// Subscription rejected.
    Failure = 128,
}

impl TryFrom<u8> for SubackReturnCode {
    type Error = GneissError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        convert_u8_to_suback_return_code(value)
    }
}

impl From<QualityOfService> for SubackReturnCode {
    fn from(qos: QualityOfService) -> Self {
        match qos {
            QualityOfService::AtMostOnce => { SubackReturnCode::GrantedQos0 }
            QualityOfService::AtLeastOnce => { SubackReturnCode::GrantedQos1 }
            QualityOfService::ExactlyOnce => { SubackReturnCode::GrantedQos2 }
        }
    }
}

/// Last will message that a CONNECT packet asks the server to publish if the connection
/// ends without a DISCONNECT.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Will {
    pub(crate) topic: String,
    pub(crate) payload: Vec<u8>,
    pub(crate) qos: QualityOfService,
    pub(crate) retain: bool,
}

impl Will {

    /// Creates a new will message
    pub fn new(topic: &str, payload: &[u8], qos: QualityOfService, retain: bool) -> Self {
        Will {
            topic: topic.to_string(),
            payload: payload.to_vec(),
            qos,
            retain,
        }
    }

    /// Returns the topic the will message should be published to.
    pub fn topic(&self) -> &str { self.topic.as_str() }

    /// Returns the will message payload.
    pub fn payload(&self) -> &[u8] { self.payload.as_slice() }

    /// Returns the quality of service the will message should be published with.
    pub fn qos(&self) -> QualityOfService { self.qos }

    /// Returns whether the will message should be retained.
    pub fn retain(&self) -> bool { self.retain }
}

/// Data model of an [MQTT311 CONNECT](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718028) packet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectPacket {
    pub(crate) protocol_name: String,
    pub(crate) protocol_version: u8,
    pub(crate) clean_session: bool,
    pub(crate) keep_alive_interval_seconds: u16,
    pub(crate) client_id: String,
    pub(crate) will: Option<Will>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<Vec<u8>>,

    // bit 0 of the connect flags; must be zero but is carried through so validation can reject it
    pub(crate) reserved_flag: bool,
}

impl Default for ConnectPacket {
    fn default() -> Self {
        ConnectPacket {
            protocol_name: MQTT311_PROTOCOL_NAME.to_string(),
            protocol_version: MQTT311_PROTOCOL_VERSION,
            clean_session: true,
            keep_alive_interval_seconds: 0,
            client_id: String::new(),
            will: None,
            username: None,
            password: None,
            reserved_flag: false,
        }
    }
}

impl ConnectPacket {

    /// Creates a new builder for a ConnectPacket.  Protocol name and level default to MQTT 3.1.1.
    pub fn builder() -> ConnectPacketBuilder {
        ConnectPacketBuilder::new()
    }

    /// Returns the protocol name, "MQTT" for 3.1.1 and "MQIsdp" for 3.1
    pub fn protocol_name(&self) -> &str { self.protocol_name.as_str() }

    /// Returns the protocol level, 4 for 3.1.1 and 3 for 3.1
    pub fn protocol_version(&self) -> u8 { self.protocol_version }

    /// Returns whether the client wants a fresh session.
    ///
    /// See [MQTT311 Clean Session](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718030)
    pub fn clean_session(&self) -> bool { self.clean_session }

    /// Returns the keep alive interval in seconds.  Zero disables keep alive.
    pub fn keep_alive_interval_seconds(&self) -> u16 { self.keep_alive_interval_seconds }

    /// Returns the client identifier.  May be empty.
    pub fn client_id(&self) -> &str { self.client_id.as_str() }

    /// Returns the will message, if any.
    pub fn will(&self) -> Option<&Will> { self.will.as_ref() }

    /// Returns the username, if any.
    pub fn username(&self) -> Option<&str> { self.username.as_deref() }

    /// Returns the password, if any.
    pub fn password(&self) -> Option<&[u8]> { self.password.as_deref() }

    /// Returns whether the reserved bit of the connect flags was set.  Always false for
    /// locally built packets.
    pub fn reserved_flag(&self) -> bool { self.reserved_flag }
}

/// Builder type for ConnectPacket instances
pub struct ConnectPacketBuilder {
    packet: ConnectPacket
}

impl ConnectPacketBuilder {
    pub(crate) fn new() -> Self {
        ConnectPacketBuilder {
            packet: ConnectPacket {
                ..Default::default()
            }
        }
    }

    /// Sets the protocol name and level.  Only needed to talk MQTT 3.1 ("MQIsdp", 3).
    pub fn with_protocol(mut self, protocol_name: &str, protocol_version: u8) -> Self {
        self.packet.protocol_name = protocol_name.to_string();
        self.packet.protocol_version = protocol_version;
        self
    }

    /// Sets whether the server should discard any existing session state for this client.
    pub fn with_clean_session(mut self, clean_session: bool) -> Self {
        self.packet.clean_session = clean_session;
        self
    }

    /// Sets the keep alive interval in seconds.
    pub fn with_keep_alive_interval_seconds(mut self, keep_alive_interval_seconds: u16) -> Self {
        self.packet.keep_alive_interval_seconds = keep_alive_interval_seconds;
        self
    }

    /// Sets the client identifier.
    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.packet.client_id = client_id.to_string();
        self
    }

    /// Sets the will message.
    pub fn with_will(mut self, will: Will) -> Self {
        self.packet.will = Some(will);
        self
    }

    /// Sets the username.
    pub fn with_username(mut self, username: &str) -> Self {
        self.packet.username = Some(username.to_string());
        self
    }

    /// Sets the password.
    pub fn with_password(mut self, password: &[u8]) -> Self {
        self.packet.password = Some(password.to_vec());
        self
    }

    /// Creates a new ConnectPacket from the builder's current state
    pub fn build(&self) -> ConnectPacket {
        self.packet.clone()
    }
}

/// Data model of an [MQTT311 CONNACK](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718033) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConnackPacket {
    pub(crate) session_present: bool,
    pub(crate) return_code: ConnectReturnCode,
}

impl ConnackPacket {

    /// Creates a new ConnackPacket
    pub fn new(session_present: bool, return_code: ConnectReturnCode) -> Self {
        ConnackPacket {
            session_present,
            return_code
        }
    }

    /// Returns whether the server resumed an existing session.
    pub fn session_present(&self) -> bool { self.session_present }

    /// Returns the server's verdict on the connection attempt.
    pub fn return_code(&self) -> ConnectReturnCode { self.return_code }
}

/// Data model of an [MQTT311 PUBLISH](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718037) packet
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PublishPacket {
    pub(crate) packet_id: u16,
    pub(crate) topic: String,
    pub(crate) qos: QualityOfService,
    pub(crate) duplicate: bool,
    pub(crate) retain: bool,
    pub(crate) payload: Vec<u8>,
}

impl PublishPacket {

    /// Creates a new builder for a PublishPacket.
    pub fn builder(topic: &str, qos: QualityOfService) -> PublishPacketBuilder {
        PublishPacketBuilder::new(topic, qos)
    }

    /// Common-case constructor for PublishPackets that don't need special configuration
    pub fn new(topic: &str, qos: QualityOfService, payload: &[u8]) -> Self {
        PublishPacket {
            topic: topic.to_string(),
            qos,
            payload: payload.to_vec(),
            ..Default::default()
        }
    }

    /// Returns the packet id.  Zero on qos 0 publishes.
    pub fn packet_id(&self) -> u16 { self.packet_id }

    /// Returns the topic this message is published to.
    pub fn topic(&self) -> &str { self.topic.as_str() }

    /// Returns the quality of service level the message is delivered with.
    pub fn qos(&self) -> QualityOfService { self.qos }

    /// Returns whether this packet is a resend of a previously-sent Publish
    pub fn duplicate(&self) -> bool { self.duplicate }

    /// Returns true if this is a retained message, false otherwise.
    pub fn retain(&self) -> bool { self.retain }

    /// Returns the payload of the publish message.
    pub fn payload(&self) -> &[u8] { self.payload.as_slice() }
}

/// Builder type for PublishPacket instances
pub struct PublishPacketBuilder {
    packet: PublishPacket
}

impl PublishPacketBuilder {
    pub(crate) fn new(topic: &str, qos: QualityOfService) -> Self {
        PublishPacketBuilder {
            packet: PublishPacket {
                topic: topic.to_string(),
                qos,
                ..Default::default()
            }
        }
    }

    /// Sets the packet id.  Must be non-zero for qos 1 and 2, and zero for qos 0.
    pub fn with_packet_id(mut self, packet_id: u16) -> Self {
        self.packet.packet_id = packet_id;
        self
    }

    /// Marks the publish as a redelivery.
    pub fn with_duplicate(mut self, duplicate: bool) -> Self {
        self.packet.duplicate = duplicate;
        self
    }

    /// Sets if this should be a retained message
    pub fn with_retain(mut self, retain: bool) -> Self {
        self.packet.retain = retain;
        self
    }

    /// Sets the payload of the publish message.
    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.packet.payload = payload;
        self
    }

    /// Creates a new PublishPacket from the builder's current state
    pub fn build(&self) -> PublishPacket {
        self.packet.clone()
    }
}

macro_rules! define_ack_packet_struct {
    ($packet_type: ident, $doc_string: expr) => {
        #[doc = $doc_string]
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $packet_type {
            pub(crate) packet_id: u16,
        }

        impl $packet_type {

            /// Creates a new acknowledgement for the given packet id
            pub fn new(packet_id: u16) -> Self {
                $packet_type {
                    packet_id
                }
            }

            /// Returns the id of the packet being acknowledged
            pub fn packet_id(&self) -> u16 { self.packet_id }
        }
    };
}

define_ack_packet_struct!(PubackPacket, "Data model of an [MQTT311 PUBACK](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718043) packet");
define_ack_packet_struct!(PubrecPacket, "Data model of an [MQTT311 PUBREC](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718048) packet");
define_ack_packet_struct!(PubrelPacket, "Data model of an [MQTT311 PUBREL](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718053) packet");
define_ack_packet_struct!(PubcompPacket, "Data model of an [MQTT311 PUBCOMP](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718058) packet");
define_ack_packet_struct!(UnsubackPacket, "Data model of an [MQTT311 UNSUBACK](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718077) packet");

/// Specifies a single subscription within a Subscribe operation
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Subscription {
    pub(crate) topic_filter: String,
    pub(crate) qos: QualityOfService,
}

impl Subscription {

    /// Creates a new subscription
    pub fn new(topic_filter: &str, qos: QualityOfService) -> Self {
        Subscription {
            topic_filter: topic_filter.to_string(),
            qos
        }
    }

    /// Returns the topic filter to subscribe to
    pub fn topic_filter(&self) -> &str { self.topic_filter.as_str() }

    /// Returns the maximum qos requested for messages delivered on this subscription
    pub fn qos(&self) -> QualityOfService { self.qos }
}

/// Data model of an [MQTT311 SUBSCRIBE](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718063) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubscribePacket {
    pub(crate) packet_id: u16,
    pub(crate) subscriptions: Vec<Subscription>,
}

impl SubscribePacket {

    /// Creates a new builder for a SubscribePacket
    pub fn builder() -> SubscribePacketBuilder {
        SubscribePacketBuilder::new()
    }

    /// Returns the packet id
    pub fn packet_id(&self) -> u16 { self.packet_id }

    /// Returns the list of subscriptions requested
    pub fn subscriptions(&self) -> &[Subscription] { self.subscriptions.as_slice() }
}

/// Builder type for SubscribePacket instances
pub struct SubscribePacketBuilder {
    packet: SubscribePacket
}

impl SubscribePacketBuilder {
    pub(crate) fn new() -> Self {
        SubscribePacketBuilder {
            packet: SubscribePacket {
                ..Default::default()
            }
        }
    }

    /// Sets the packet id.  Must be non-zero.
    pub fn with_packet_id(mut self, packet_id: u16) -> Self {
        self.packet.packet_id = packet_id;
        self
    }

    /// Adds a subscription to the packet
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.packet.subscriptions.push(subscription);
        self
    }

    /// Adds a subscription to the packet from its topic filter and qos
    pub fn with_subscription_simple(mut self, topic_filter: &str, qos: QualityOfService) -> Self {
        self.packet.subscriptions.push(Subscription::new(topic_filter, qos));
        self
    }

    /// Creates a new SubscribePacket from the builder's current state
    pub fn build(&self) -> SubscribePacket {
        self.packet.clone()
    }
}

/// Data model of an [MQTT311 SUBACK](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718068) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubackPacket {
    pub(crate) packet_id: u16,
    pub(crate) return_codes: Vec<SubackReturnCode>,
}

impl SubackPacket {

    /// Creates a new SubackPacket
    pub fn new(packet_id: u16, return_codes: Vec<SubackReturnCode>) -> Self {
        SubackPacket {
            packet_id,
            return_codes
        }
    }

    /// Returns the id of the subscribe being acknowledged
    pub fn packet_id(&self) -> u16 { self.packet_id }

    /// Returns one result per subscription, in the order of the subscribe request
    pub fn return_codes(&self) -> &[SubackReturnCode] { self.return_codes.as_slice() }
}

/// Data model of an [MQTT311 UNSUBSCRIBE](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718072) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnsubscribePacket {
    pub(crate) packet_id: u16,
    pub(crate) topic_filters: Vec<String>,
}

impl UnsubscribePacket {

    /// Creates a new builder for an UnsubscribePacket
    pub fn builder() -> UnsubscribePacketBuilder {
        UnsubscribePacketBuilder::new()
    }

    /// Returns the packet id
    pub fn packet_id(&self) -> u16 { self.packet_id }

    /// Returns the topic filters to unsubscribe from
    pub fn topic_filters(&self) -> &[String] { self.topic_filters.as_slice() }
}

/// Builder type for UnsubscribePacket instances
pub struct UnsubscribePacketBuilder {
    packet: UnsubscribePacket
}

impl UnsubscribePacketBuilder {
    pub(crate) fn new() -> Self {
        UnsubscribePacketBuilder {
            packet: UnsubscribePacket {
                ..Default::default()
            }
        }
    }

    /// Sets the packet id.  Must be non-zero.
    pub fn with_packet_id(mut self, packet_id: u16) -> Self {
        self.packet.packet_id = packet_id;
        self
    }

    /// Adds a topic filter to unsubscribe from
    pub fn with_topic_filter(mut self, topic_filter: &str) -> Self {
        self.packet.topic_filters.push(topic_filter.to_string());
        self
    }

    /// Creates a new UnsubscribePacket from the builder's current state
    pub fn build(&self) -> UnsubscribePacket {
        self.packet.clone()
    }
}

/// Data model of an [MQTT311 PINGREQ](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718081) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PingreqPacket {}

/// Data model of an [MQTT311 PINGRESP](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718086) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PingrespPacket {}

/// Data model of an [MQTT311 DISCONNECT](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718090) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisconnectPacket {}

/// Closed union over every packet kind the codec understands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MqttPacket {
    /// A CONNECT packet
    Connect(ConnectPacket),
    /// A CONNACK packet
    Connack(ConnackPacket),
    /// A PUBLISH packet
    Publish(PublishPacket),
    /// A PUBACK packet
    Puback(PubackPacket),
    /// A PUBREC packet
    Pubrec(PubrecPacket),
    /// A PUBREL packet
    Pubrel(PubrelPacket),
    /// A PUBCOMP packet
    Pubcomp(PubcompPacket),
    /// A SUBSCRIBE packet
    Subscribe(SubscribePacket),
    /// A SUBACK packet
    Suback(SubackPacket),
    /// An UNSUBSCRIBE packet
    Unsubscribe(UnsubscribePacket),
    /// An UNSUBACK packet
    Unsuback(UnsubackPacket),
    /// A PINGREQ packet
    Pingreq(PingreqPacket),
    /// A PINGRESP packet
    Pingresp(PingrespPacket),
    /// A DISCONNECT packet
    Disconnect(DisconnectPacket),
}

impl MqttPacket {

    /// Returns the packet type of this packet
    pub fn packet_type(&self) -> PacketType {
        mqtt_packet_to_packet_type(self)
    }
}

/// An enum indicating the kind of MQTT packet.  Discriminants are the 4-bit type codes of
/// the fixed header; codes 0 and 15 are reserved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PacketType {
    /// A [Connect](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718028) packet
    Connect = 1,

    /// A [Connack](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718033) packet
    Connack = 2,

    /// A [Publish](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718037) packet
    Publish = 3,

    /// A [Puback](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718043) packet
    Puback = 4,

    /// A [Pubrec](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718048) packet
    Pubrec = 5,

    /// A [Pubrel](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718053) packet
    Pubrel = 6,

    /// A [Pubcomp](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718058) packet
    Pubcomp = 7,

    /// A [Subscribe](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718063) packet
    Subscribe = 8,

    /// A [Suback](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718068) packet
    Suback = 9,

    /// An [Unsubscribe](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718072) packet
    Unsubscribe = 10,

    /// An [Unsuback](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718077) packet
    Unsuback = 11,

    /// A [Pingreq](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718081) packet
    Pingreq = 12,

    /// A [Pingresp](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718086) packet
    Pingresp = 13,

    /// A [Disconnect](https://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718090) packet
    Disconnect = 14,
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketType::Connect => { write!(f, "ConnectPacket") }
            PacketType::Connack => { write!(f, "ConnackPacket") }
            PacketType::Publish => { write!(f, "PublishPacket") }
            PacketType::Puback => { write!(f, "PubackPacket") }
            PacketType::Pubrec => { write!(f, "PubrecPacket") }
            PacketType::Pubrel => { write!(f, "PubrelPacket") }
            PacketType::Pubcomp => { write!(f, "PubcompPacket") }
            PacketType::Subscribe => { write!(f, "SubscribePacket") }
            PacketType::Suback => { write!(f, "SubackPacket") }
            PacketType::Unsubscribe => { write!(f, "UnsubscribePacket") }
            PacketType::Unsuback => { write!(f, "UnsubackPacket") }
            PacketType::Pingreq => { write!(f, "PingreqPacket") }
            PacketType::Pingresp => { write!(f, "PingrespPacket") }
            PacketType::Disconnect => { write!(f, "DisconnectPacket") }
        }
    }
}
