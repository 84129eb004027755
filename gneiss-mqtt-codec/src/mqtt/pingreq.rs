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

define_empty_packet_encoding_impl!(write_pingreq_body, PingreqPacket);

define_empty_packet_decode_function!(decode_pingreq_packet, Pingreq, PingreqPacket, "decode_pingreq_packet");

define_empty_packet_display_trait!(PingreqPacket, "PingreqPacket");
