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

define_ack_packet_encoding_impl!(write_pubcomp_body, PubcompPacket);

define_ack_packet_decode_function!(decode_pubcomp_packet, Pubcomp, PubcompPacket, "decode_pubcomp_packet");

validate_ack_packet!(validate_pubcomp_packet, PubcompPacket);

define_ack_packet_display_trait!(PubcompPacket, "PubcompPacket");
