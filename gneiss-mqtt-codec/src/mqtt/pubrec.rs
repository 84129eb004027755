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

define_ack_packet_encoding_impl!(write_pubrec_body, PubrecPacket);

define_ack_packet_decode_function!(decode_pubrec_packet, Pubrec, PubrecPacket, "decode_pubrec_packet");

validate_ack_packet!(validate_pubrec_packet, PubrecPacket);

define_ack_packet_display_trait!(PubrecPacket, "PubrecPacket");
