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

define_empty_packet_encoding_impl!(write_disconnect_body, DisconnectPacket);

define_empty_packet_decode_function!(decode_disconnect_packet, Disconnect, DisconnectPacket, "decode_disconnect_packet");

define_empty_packet_display_trait!(DisconnectPacket, "DisconnectPacket");
