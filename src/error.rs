// Copyright 2022 - 2023 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Author: tickbh
// -----
// Created Date: 2023/09/14 10:21:45

use std::{fmt, result};

use crate::huffman::HuffmanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpackError {
    /// 哈夫曼解码出错
    Huffman(HuffmanError),
    /// 5.1. specifies that "excessively large integer decodings" MUST be
    /// considered an error, whether the size is the number of octets or
    /// the value itself. Integers are capped at 2^32 - 1.
    TooLargeInt,
    /// Index 0, or an index past the end of the static plus dynamic tables.
    InvalidIndex,
    /// A single name/value pair exceeded the per-field ceiling.
    FieldTooLarge,
    /// A table size update appeared after the first header of a block, or
    /// more than two appeared in a row.
    SizeUpdateNotAllowed,
    /// A table size update exceeded the ceiling from our settings.
    SizeUpdateTooLarge,
    /// The block ended in the middle of a representation.
    IncompleteBlock,
    /// 压缩上下文已损坏, 本端与对端的动态表无法再保持同步
    BadContext,
}

impl HpackError {
    #[inline]
    pub fn description_str(&self) -> &'static str {
        match self {
            HpackError::Huffman(e) => e.description_str(),
            HpackError::TooLargeInt => "integer overflow",
            HpackError::InvalidIndex => "header index out of range",
            HpackError::FieldTooLarge => "header field too large",
            HpackError::SizeUpdateNotAllowed => "table size update not allowed here",
            HpackError::SizeUpdateTooLarge => "table size update over settings limit",
            HpackError::IncompleteBlock => "header block ended mid representation",
            HpackError::BadContext => "compression context is broken",
        }
    }
}

impl fmt::Display for HpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description_str())
    }
}

impl From<HuffmanError> for HpackError {
    fn from(e: HuffmanError) -> Self {
        HpackError::Huffman(e)
    }
}

pub type HpackResult<T> = result::Result<T, HpackError>;
