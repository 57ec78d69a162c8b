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
// Created Date: 2023/09/18 14:29:03

use crate::huffman;
use crate::table::{
    token_of, MatchResult, Token, TOKEN_AUTHORIZATION, TOKEN_COOKIE, TOKEN_TE,
};
use crate::{
    Binary, BinaryMut, BufMut, Field, HeaderTable, HpackResult,
    DEFAULT_MAX_DEFLATE_TABLE_SIZE,
};

/// 单个头部的表示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexingMode {
    /// 字面量并加入动态表
    WithIndexing,
    /// 字面量, 永不索引, 中间节点转发时也必须保持
    NeverIndexing,
}

impl IndexingMode {
    /// 对应表示方式的前缀标志位与前缀位数
    fn pattern(&self) -> (u8, u8) {
        match self {
            IndexingMode::WithIndexing => (0x40, 6),
            IndexingMode::NeverIndexing => (0x10, 4),
        }
    }
}

/// The representation policy: hop-by-hop and credential carrying headers
/// (and anything the caller marked sensitive) must never be indexed
/// anywhere; everything else enters the dynamic table.
fn decide_indexing(field: &Field, token: Option<Token>) -> IndexingMode {
    if field.flags.is_sensitive() {
        return IndexingMode::NeverIndexing;
    }
    match token {
        Some(TOKEN_AUTHORIZATION) => IndexingMode::NeverIndexing,
        Some(TOKEN_COOKIE) if field.value.len() < 20 => IndexingMode::NeverIndexing,
        Some(t) if t >= TOKEN_TE => IndexingMode::NeverIndexing,
        _ => IndexingMode::WithIndexing,
    }
}

/// Writes an integer under the HPACK rules: `prefix` low bits of the first
/// octet (OR-ed into `pattern`), then a little endian base-128 tail.
/// Returns the number of octets written.
pub(crate) fn encode_integer<B: BufMut>(
    buf: &mut B,
    value: usize,
    prefix: u8,
    pattern: u8,
) -> usize {
    debug_assert!(prefix >= 1 && prefix <= 8);
    let mask: usize = (1 << prefix) - 1;
    if value < mask {
        buf.put_u8(pattern | value as u8);
        return 1;
    }
    buf.put_u8(pattern | mask as u8);
    let mut rest = value - mask;
    let mut total = 2;
    while rest >= 128 {
        buf.put_u8((rest & 0x7f) as u8 | 0x80);
        rest >>= 7;
        total += 1;
    }
    buf.put_u8(rest as u8);
    total
}

/// Writes a string literal, Huffman coded when, and only when, that is
/// strictly shorter than the raw octets.
fn emit_string<B: BufMut>(buf: &mut B, data: &[u8]) -> usize {
    let hlen = huffman::encode_count(data);
    if hlen < data.len() {
        let n = encode_integer(buf, hlen, 7, 0x80);
        n + huffman::encode(buf, data)
    } else {
        let n = encode_integer(buf, data.len(), 7, 0);
        buf.put_slice(data);
        n + data.len()
    }
}

fn emit_indexed<B: BufMut>(buf: &mut B, index: usize) -> usize {
    encode_integer(buf, index, 7, 0x80)
}

fn emit_indname<B: BufMut>(buf: &mut B, index: usize, value: &[u8], mode: IndexingMode) -> usize {
    let (pattern, prefix) = mode.pattern();
    let n = encode_integer(buf, index, prefix, pattern);
    n + emit_string(buf, value)
}

fn emit_newname<B: BufMut>(buf: &mut B, field: &Field, mode: IndexingMode) -> usize {
    let (pattern, prefix) = mode.pattern();
    let n = encode_integer(buf, 0, prefix, pattern);
    n + emit_string(buf, &field.name) + emit_string(buf, &field.value)
}

fn emit_table_size<B: BufMut>(buf: &mut B, size: usize) -> usize {
    log::trace!("HPACK: 编码动态表大小更新; size={}", size);
    encode_integer(buf, size, 5, 0x20)
}

/// Serializes header lists into HPACK blocks, maintaining the dynamic
/// table in lockstep with the peer's decoder.
pub struct Encoder {
    table: HeaderTable,
    /// 动态表内存的硬上限, 对端通告更大的值也不会超过
    deflate_max: usize,
    /// 上次编码以来见到的最小容量, 待通告, usize::MAX表示无
    min_table_size: usize,
    /// 下次编码前需要先发送动态表大小更新
    notify_table_size_change: bool,
}

impl Encoder {
    pub fn new() -> Encoder {
        Encoder::with_max_table_size(DEFAULT_MAX_DEFLATE_TABLE_SIZE)
    }

    /// Builds an encoder that will never devote more than `max` octets of
    /// abstract size to its dynamic table, whatever the peer advertises.
    pub fn with_max_table_size(max: usize) -> Encoder {
        let mut table = HeaderTable::new();
        let notify = max < table.get_max_table_size();
        if notify {
            table.set_max_table_size(max);
        }
        Encoder {
            table,
            deflate_max: max,
            min_table_size: usize::MAX,
            notify_table_size_change: notify,
        }
    }

    pub fn table(&self) -> &HeaderTable {
        &self.table
    }

    /// Records the table capacity from the peer's settings. The change is
    /// applied now but only signalled at the start of the next block, the
    /// smallest intermediate capacity first.
    pub fn change_table_size(&mut self, settings_max: usize) {
        let next = settings_max.min(self.deflate_max);
        self.min_table_size = self.min_table_size.min(next);
        self.notify_table_size_change = true;
        self.table.set_max_table_size(next);
    }

    /// Encodes the whole header list into a freshly allocated buffer.
    pub fn encode(&mut self, fields: &[Field]) -> HpackResult<Binary> {
        let mut buf = BinaryMut::new();
        self.encode_into(fields, &mut buf)?;
        Ok(buf.freeze())
    }

    /// Encodes the whole header list into `buf`, returning the number of
    /// octets written.
    pub fn encode_into<B: BufMut>(&mut self, fields: &[Field], buf: &mut B) -> HpackResult<usize> {
        let mut size = 0;
        if self.notify_table_size_change {
            let min = self.min_table_size;
            self.notify_table_size_change = false;
            self.min_table_size = usize::MAX;
            if min < self.table.get_max_table_size() {
                size += emit_table_size(buf, min);
            }
            size += emit_table_size(buf, self.table.get_max_table_size());
        }
        for field in fields {
            size += self.encode_field(buf, field);
        }
        log::trace!("HPACK: 编码头部列表; fields={} len={}", fields.len(), size);
        Ok(size)
    }

    fn encode_field<B: BufMut>(&mut self, buf: &mut B, field: &Field) -> usize {
        let token = token_of(&field.name);
        let mode = decide_indexing(field, token);
        match self.table.find_header(&field.name, &field.value, token) {
            MatchResult::Full(idx) => emit_indexed(buf, idx),
            MatchResult::Name(idx) => {
                let n = emit_indname(buf, idx, &field.value, mode);
                self.index_field(field, token, mode);
                n
            }
            MatchResult::None => {
                let n = emit_newname(buf, field, mode);
                self.index_field(field, token, mode);
                n
            }
        }
    }

    fn index_field(&mut self, field: &Field, token: Option<Token>, mode: IndexingMode) {
        if mode == IndexingMode::WithIndexing {
            self.table
                .add_header(field.name.clone(), field.value.clone(), token);
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Binary;

    fn field(name: &'static str, value: &'static str) -> Field {
        Field::new(Binary::from(name), Binary::from(value))
    }

    #[test]
    fn integer_prefix_fits() {
        let mut buf = Vec::new();
        assert_eq!(encode_integer(&mut buf, 10, 5, 0), 1);
        assert_eq!(buf, vec![0x0a]);
    }

    #[test]
    fn integer_with_continuation() {
        let mut buf = Vec::new();
        assert_eq!(encode_integer(&mut buf, 1337, 5, 0), 3);
        assert_eq!(buf, vec![0x1f, 0x9a, 0x0a]);
    }

    #[test]
    fn integer_full_octet_prefix() {
        let mut buf = Vec::new();
        assert_eq!(encode_integer(&mut buf, 42, 8, 0), 1);
        assert_eq!(buf, vec![0x2a]);
    }

    #[test]
    fn literal_with_indexing() {
        // C.2.1
        let mut encoder = Encoder::new();
        let f = field("custom-key", "custom-header");
        assert_eq!(f.table_size(), 55);
        let block = encoder.encode(&[f]).unwrap();
        assert_eq!(block[0], 0x40);
        assert_eq!(encoder.table().get_size(), 55);
        assert_eq!(encoder.table().len(), 1);
    }

    #[test]
    fn request_sequence_with_huffman() {
        // C.4.1 .. C.4.3
        let mut encoder = Encoder::new();
        let req1 = [
            field(":method", "GET"),
            field(":scheme", "http"),
            field(":path", "/"),
            field(":authority", "www.example.com"),
        ];
        let block = encoder.encode(&req1).unwrap();
        assert_eq!(
            block.as_slice(),
            &[
                0x82, 0x86, 0x84, 0x41, 0x8c, 0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0,
                0xab, 0x90, 0xf4, 0xff
            ][..]
        );
        assert_eq!(encoder.table().get_size(), 57);

        let req2 = [
            field(":method", "GET"),
            field(":scheme", "http"),
            field(":path", "/"),
            field(":authority", "www.example.com"),
            field("cache-control", "no-cache"),
        ];
        let block = encoder.encode(&req2).unwrap();
        assert_eq!(
            block.as_slice(),
            &[0x82, 0x86, 0x84, 0xbe, 0x58, 0x86, 0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf][..]
        );
        assert_eq!(encoder.table().get_size(), 110);

        let req3 = [
            field(":method", "GET"),
            field(":scheme", "https"),
            field(":path", "/index.html"),
            field(":authority", "www.example.com"),
            field("custom-key", "custom-value"),
        ];
        let block = encoder.encode(&req3).unwrap();
        assert_eq!(
            block.as_slice(),
            &[
                0x82, 0x87, 0x85, 0xbf, 0x40, 0x88, 0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xa9, 0x7d,
                0x7f, 0x89, 0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xb8, 0xe8, 0xb4, 0xbf
            ][..]
        );
        assert_eq!(encoder.table().get_size(), 164);
        assert_eq!(encoder.table().len(), 3);
    }

    #[test]
    fn sensitive_never_indexed() {
        let mut encoder = Encoder::new();
        let f = Field::sensitive(Binary::from("password"), Binary::from("hunter2"));
        let block = encoder.encode(&[f]).unwrap();
        assert_eq!(block[0], 0x10);
        assert_eq!(encoder.table().len(), 0);
    }

    #[test]
    fn credentials_never_indexed() {
        let mut encoder = Encoder::new();
        let block = encoder
            .encode(&[field("authorization", "Basic dXNlcjpwYXNz")])
            .unwrap();
        // authorization在静态表23的位置, 4bit前缀放不下
        assert_eq!(&block.as_slice()[..2], &[0x1f, 0x08]);
        assert_eq!(encoder.table().len(), 0);

        let block = encoder.encode(&[field("cookie", "short=1")]).unwrap();
        assert_eq!(block[0], 0x1f);
        assert_eq!(encoder.table().len(), 0);

        // 长cookie正常进入动态表, cookie在静态表32的位置
        let block = encoder
            .encode(&[field("cookie", "id=a3fWa; Expires=Thu, 31 Oct 2077")])
            .unwrap();
        assert_eq!(block[0], 0x60);
        assert_eq!(encoder.table().len(), 1);
    }

    #[test]
    fn hop_by_hop_never_indexed() {
        let mut encoder = Encoder::new();
        let block = encoder.encode(&[field("connection", "close")]).unwrap();
        // 新名字, 永不索引
        assert_eq!(block[0], 0x10);
        assert_eq!(encoder.table().len(), 0);
    }

    #[test]
    fn deferred_size_update() {
        let mut encoder = Encoder::new();
        encoder.change_table_size(0);
        encoder.change_table_size(4096);
        let block = encoder.encode(&[field(":method", "GET")]).unwrap();
        // 先通告最小值0, 再通告当前值4096, 最后才是头部
        assert_eq!(
            block.as_slice(),
            &[0x20, 0x3f, 0xe1, 0x1f, 0x82][..]
        );
        assert!(!encoder.notify_table_size_change);
    }

    #[test]
    fn size_update_single_when_shrunk() {
        let mut encoder = Encoder::new();
        encoder.change_table_size(100);
        let block = encoder.encode(&[field(":method", "GET")]).unwrap();
        assert_eq!(block.as_slice(), &[0x3f, 0x45, 0x82][..]);
    }

    #[test]
    fn ceiling_caps_peer_advertisement() {
        let mut encoder = Encoder::with_max_table_size(128);
        encoder.change_table_size(4096);
        assert_eq!(encoder.table().get_max_table_size(), 128);
    }

    #[test]
    fn constructor_below_default_notifies() {
        let mut encoder = Encoder::with_max_table_size(256);
        let block = encoder.encode(&[field(":method", "GET")]).unwrap();
        assert_eq!(block.as_slice(), &[0x3f, 0xe1, 0x01, 0x82][..]);
    }
}
