//! Exposes the struct `Decoder` that allows for HPACK-encoded header blocks
//! to be decoded into a header list.
//!
//! The decoder only follows HPACK rules, without performing any additional
//! (semantic) checks on the header name/value pairs, i.e. it considers the
//! headers as opaque octets.
//!
//! The decoder is a resumable state machine driven one octet at a time: it
//! consumes as much of the given input as it can, hands back at most one
//! decoded header per call, and picks up exactly where it stopped once more
//! input arrives. No state survives an error; the compression context is
//! shared with the peer, so any local failure poisons it for good.
//!
//! # Example
//!
//! ```rust
//! use hpackparse::{DecodeEvent, Decoder};
//!
//! let mut decoder = Decoder::new();
//! let mut input = &[0x82u8, 0x84][..];
//! let mut count = 0;
//! loop {
//!     match decoder.decode(&mut input, true).unwrap() {
//!         DecodeEvent::Field { field, .. } => {
//!             count += 1;
//!             match count {
//!                 1 => assert_eq!(field.name, ":method"),
//!                 2 => assert_eq!(field.name, ":path"),
//!                 _ => panic!("did not expect more than two headers!"),
//!             }
//!         }
//!         DecodeEvent::BlockEnd => break,
//!         DecodeEvent::MoreInput => unreachable!(),
//!     }
//! }
//! ```

use std::mem;

use crate::huffman::HuffmanDecoder;
use crate::table::{token_of, Token, STATIC_TABLE_LEN};
use crate::{
    BinaryMut, Buf, BufMut, Field, FieldFlags, HeaderTable, HpackError, HpackResult,
    MAX_HEADER_FIELD_SIZE,
};

/// Different variants of how a particular header field can be represented
/// in an HPACK encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRepresentation {
    Indexed,
    LiteralWithIncrementalIndexing,
    SizeUpdate,
    LiteralNeverIndexed,
    LiteralWithoutIndexing,
}

impl FieldRepresentation {
    /// Based on the given octet, returns the type of the field representation.
    ///
    /// The given octet should be the top-order byte of the header field that
    /// is about to be decoded.
    pub fn new(octet: u8) -> FieldRepresentation {
        if octet & 128 == 128 {
            // High-order bit set
            FieldRepresentation::Indexed
        } else if octet & 64 == 64 {
            // Bit pattern `01`
            FieldRepresentation::LiteralWithIncrementalIndexing
        } else if octet & 32 == 32 {
            // Bit pattern `001`
            FieldRepresentation::SizeUpdate
        } else if octet & 16 == 16 {
            // Bit pattern `0001`
            FieldRepresentation::LiteralNeverIndexed
        } else {
            // None of the top 4 bits is set => bit pattern `0000xxxx`
            FieldRepresentation::LiteralWithoutIndexing
        }
    }
}

/// 正在解析的表示方式大类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
    None,
    Indexed,
    NewName,
    IndName,
}

/// 状态机当前停留的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Opcode,
    ReadTableSize,
    ReadIndex,
    NewNameCheckNameLen,
    NewNameReadNameLen,
    NewNameReadNameHuff,
    NewNameReadName,
    CheckValueLen,
    ReadValueLen,
    ReadValueHuff,
    ReadValue,
}

/// What a single `decode` call produced.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeEvent {
    /// One header was decoded; call again for the next one.
    Field {
        field: Field,
        token: Option<Token>,
    },
    /// The input was final and stopped on a representation boundary.
    BlockEnd,
    /// All given input was consumed without completing a header.
    MoreInput,
}

/// Decodes headers encoded using HPACK, pull style: the caller feeds input
/// slices of any size and takes one header per call.
pub struct Decoder {
    table: HeaderTable,
    /// 出错后置位, 上下文不再可用
    bad: bool,
    /// 接受的动态表容量上限, 即SETTINGS_HEADER_TABLE_SIZE通告的值
    settings_max: usize,
    state: DecodeState,
    opcode: Opcode,
    // 可恢复的整数解码寄存器: 已累积的值与下一次的位移
    left: u32,
    shift: u32,
    index: usize,
    newnamelen: usize,
    huffman_encoded: bool,
    index_required: bool,
    no_index: bool,
    huff: HuffmanDecoder,
    /// 当前字面量的累积缓存, 完成后整体转移给输出与动态表
    nvbufs: BinaryMut,
    /// 本块中是否已出现普通头部, 其后不允许再有大小更新
    header_seen: bool,
    /// 连续出现的大小更新个数, 最多两个
    size_update_run: usize,
}

impl Decoder {
    pub fn new() -> Decoder {
        Decoder::with_max_table_size(crate::DEFAULT_HEADER_TABLE_SIZE)
    }

    /// Builds a decoder that accepts table size updates up to `max` octets.
    pub fn with_max_table_size(max: usize) -> Decoder {
        Decoder {
            table: HeaderTable::with_capacity(max),
            bad: false,
            settings_max: max,
            state: DecodeState::Opcode,
            opcode: Opcode::None,
            left: 0,
            shift: 0,
            index: 0,
            newnamelen: 0,
            huffman_encoded: false,
            index_required: false,
            no_index: false,
            huff: HuffmanDecoder::new(),
            nvbufs: BinaryMut::new(),
            header_seen: false,
            size_update_run: 0,
        }
    }

    pub fn table(&self) -> &HeaderTable {
        &self.table
    }

    /// Applies a new ceiling from our own settings, shrinking the dynamic
    /// table if needed.
    pub fn change_table_size(&mut self, new_max: usize) -> HpackResult<()> {
        if self.bad {
            return Err(HpackError::BadContext);
        }
        self.settings_max = new_max;
        self.table.set_max_table_size(new_max);
        Ok(())
    }

    /// Asserts that the current block stopped on a representation boundary
    /// and resets the per-block state for the next one.
    pub fn end_headers(&mut self) -> HpackResult<()> {
        if self.bad {
            return Err(HpackError::BadContext);
        }
        if self.state != DecodeState::Opcode {
            self.bad = true;
            return Err(HpackError::IncompleteBlock);
        }
        self.header_seen = false;
        self.size_update_run = 0;
        Ok(())
    }

    /// Consumes as much of `buf` as possible. Returns either one decoded
    /// header, a request for more input, or, when `in_final` is set and the
    /// input stops on a representation boundary, the end of the block.
    ///
    /// Any error permanently poisons the decoder: compression state is
    /// shared with the peer and cannot be resynchronized after a failure.
    pub fn decode<B: Buf>(&mut self, buf: &mut B, in_final: bool) -> HpackResult<DecodeEvent> {
        if self.bad {
            return Err(HpackError::BadContext);
        }
        match self.decode_step(buf, in_final) {
            Ok(ev) => Ok(ev),
            Err(e) => {
                self.bad = true;
                Err(e)
            }
        }
    }

    fn decode_step<B: Buf>(&mut self, buf: &mut B, in_final: bool) -> HpackResult<DecodeEvent> {
        loop {
            match self.state {
                DecodeState::Opcode => {
                    let b = match buf.peek() {
                        Some(b) => b,
                        None => return self.finish_input(in_final),
                    };
                    match FieldRepresentation::new(b) {
                        FieldRepresentation::SizeUpdate => {
                            if self.header_seen || self.size_update_run >= 2 {
                                return Err(HpackError::SizeUpdateNotAllowed);
                            }
                            self.size_update_run += 1;
                            buf.advance(1);
                            if self.read_len_first(b, 5) {
                                self.apply_table_size()?;
                            } else {
                                self.state = DecodeState::ReadTableSize;
                            }
                        }
                        FieldRepresentation::Indexed => {
                            self.header_seen = true;
                            self.size_update_run = 0;
                            self.opcode = Opcode::Indexed;
                            buf.advance(1);
                            if self.read_len_first(b, 7) {
                                self.index = self.left as usize;
                                self.check_index()?;
                                return self.finish_indexed();
                            }
                            self.state = DecodeState::ReadIndex;
                        }
                        repr => {
                            self.header_seen = true;
                            self.size_update_run = 0;
                            self.index_required =
                                repr == FieldRepresentation::LiteralWithIncrementalIndexing;
                            self.no_index = repr == FieldRepresentation::LiteralNeverIndexed;
                            self.newnamelen = 0;
                            self.nvbufs.clear();
                            let prefix: u8 = if self.index_required { 6 } else { 4 };
                            buf.advance(1);
                            if b & ((1u8 << prefix) - 1) == 0 {
                                self.opcode = Opcode::NewName;
                                self.state = DecodeState::NewNameCheckNameLen;
                            } else {
                                self.opcode = Opcode::IndName;
                                if self.read_len_first(b, prefix) {
                                    self.index = self.left as usize;
                                    self.check_index()?;
                                    self.state = DecodeState::CheckValueLen;
                                } else {
                                    self.state = DecodeState::ReadIndex;
                                }
                            }
                        }
                    }
                }
                DecodeState::ReadTableSize => {
                    if !self.read_len_next(buf)? {
                        return self.finish_input(in_final);
                    }
                    self.apply_table_size()?;
                }
                DecodeState::ReadIndex => {
                    if !self.read_len_next(buf)? {
                        return self.finish_input(in_final);
                    }
                    self.index = self.left as usize;
                    self.check_index()?;
                    if self.opcode == Opcode::Indexed {
                        return self.finish_indexed();
                    }
                    self.state = DecodeState::CheckValueLen;
                }
                DecodeState::NewNameCheckNameLen => {
                    let b = match buf.get_next() {
                        Some(b) => b,
                        None => return self.finish_input(in_final),
                    };
                    self.huffman_encoded = b & 0x80 == 0x80;
                    if self.read_len_first(b, 7) {
                        self.namelen_done()?;
                    } else {
                        self.state = DecodeState::NewNameReadNameLen;
                    }
                }
                DecodeState::NewNameReadNameLen => {
                    if !self.read_len_next(buf)? {
                        return self.finish_input(in_final);
                    }
                    self.namelen_done()?;
                }
                DecodeState::NewNameReadNameHuff => {
                    if !self.read_huff_body(buf)? {
                        return self.finish_input(in_final);
                    }
                    self.newnamelen = self.nvbufs.len();
                    self.state = DecodeState::CheckValueLen;
                }
                DecodeState::NewNameReadName => {
                    if !self.read_raw_body(buf) {
                        return self.finish_input(in_final);
                    }
                    self.newnamelen = self.nvbufs.len();
                    self.state = DecodeState::CheckValueLen;
                }
                DecodeState::CheckValueLen => {
                    let b = match buf.get_next() {
                        Some(b) => b,
                        None => return self.finish_input(in_final),
                    };
                    self.huffman_encoded = b & 0x80 == 0x80;
                    if self.read_len_first(b, 7) {
                        self.valuelen_done()?;
                    } else {
                        self.state = DecodeState::ReadValueLen;
                    }
                }
                DecodeState::ReadValueLen => {
                    if !self.read_len_next(buf)? {
                        return self.finish_input(in_final);
                    }
                    self.valuelen_done()?;
                }
                DecodeState::ReadValueHuff => {
                    if !self.read_huff_body(buf)? {
                        return self.finish_input(in_final);
                    }
                    return self.finish_literal();
                }
                DecodeState::ReadValue => {
                    if !self.read_raw_body(buf) {
                        return self.finish_input(in_final);
                    }
                    return self.finish_literal();
                }
            }
        }
    }

    /// Loads the prefix octet of an integer. Returns whether the integer
    /// already completed within the prefix bits.
    fn read_len_first(&mut self, b: u8, prefix: u8) -> bool {
        let mask = (1u32 << prefix) - 1;
        self.left = b as u32 & mask;
        self.shift = 0;
        self.left < mask
    }

    /// Accumulates continuation octets of an integer. Returns whether the
    /// integer completed; the registers survive an exhausted buffer.
    fn read_len_next<B: Buf>(&mut self, buf: &mut B) -> HpackResult<bool> {
        while let Some(b) = buf.get_next() {
            if self.shift > 28 {
                return Err(HpackError::TooLargeInt);
            }
            let sum = self.left as u64 + (((b & 0x7f) as u64) << self.shift);
            if sum > u32::MAX as u64 {
                return Err(HpackError::TooLargeInt);
            }
            self.left = sum as u32;
            self.shift += 7;
            if b & 0x80 != 0x80 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn apply_table_size(&mut self) -> HpackResult<()> {
        let size = self.left as usize;
        if size > self.settings_max {
            return Err(HpackError::SizeUpdateTooLarge);
        }
        log::trace!("HPACK: 动态表大小更新; size={}", size);
        self.table.set_max_table_size(size);
        self.state = DecodeState::Opcode;
        Ok(())
    }

    fn check_index(&self) -> HpackResult<()> {
        if self.index < 1 || self.index > STATIC_TABLE_LEN + self.table.len() {
            return Err(HpackError::InvalidIndex);
        }
        Ok(())
    }

    fn namelen_done(&mut self) -> HpackResult<()> {
        if self.left as usize > MAX_HEADER_FIELD_SIZE {
            return Err(HpackError::FieldTooLarge);
        }
        if self.huffman_encoded {
            self.huff.reset();
            self.state = DecodeState::NewNameReadNameHuff;
        } else {
            self.state = DecodeState::NewNameReadName;
        }
        Ok(())
    }

    fn valuelen_done(&mut self) -> HpackResult<()> {
        if self.newnamelen + self.left as usize > MAX_HEADER_FIELD_SIZE {
            return Err(HpackError::FieldTooLarge);
        }
        if self.huffman_encoded {
            self.huff.reset();
            self.state = DecodeState::ReadValueHuff;
        } else {
            self.state = DecodeState::ReadValue;
        }
        Ok(())
    }

    /// 原样拷贝字面量内容, 返回是否已读满
    fn read_raw_body<B: Buf>(&mut self, buf: &mut B) -> bool {
        let n = std::cmp::min(self.left as usize, buf.remaining());
        self.nvbufs.put_slice(&buf.chunk()[..n]);
        buf.advance(n);
        self.left -= n as u32;
        self.left == 0
    }

    /// 边读边做哈夫曼解码, 返回是否已读满
    fn read_huff_body<B: Buf>(&mut self, buf: &mut B) -> HpackResult<bool> {
        let n = std::cmp::min(self.left as usize, buf.remaining());
        let is_final = n == self.left as usize;
        self.huff.decode(&mut self.nvbufs, &buf.chunk()[..n], is_final)?;
        buf.advance(n);
        self.left -= n as u32;
        if self.nvbufs.len() > MAX_HEADER_FIELD_SIZE {
            return Err(HpackError::FieldTooLarge);
        }
        Ok(self.left == 0)
    }

    fn finish_indexed(&mut self) -> HpackResult<DecodeEvent> {
        let (name, value, token) = self
            .table
            .get_from_index(self.index)
            .ok_or(HpackError::InvalidIndex)?;
        self.state = DecodeState::Opcode;
        self.opcode = Opcode::None;
        let field = Field::new(name, value);
        log::trace!("HPACK: 解得索引头部; index={} {:?}", self.index, field);
        Ok(DecodeEvent::Field { field, token })
    }

    fn finish_literal(&mut self) -> HpackResult<DecodeEvent> {
        let (name, value, token) = match self.opcode {
            Opcode::NewName => {
                let data = mem::take(&mut self.nvbufs).freeze();
                let name = data.slice(0..self.newnamelen);
                let value = data.slice(self.newnamelen..data.len());
                let token = token_of(&name);
                (name, value, token)
            }
            Opcode::IndName => {
                let (name, _, token) = self
                    .table
                    .get_from_index(self.index)
                    .ok_or(HpackError::InvalidIndex)?;
                let value = mem::take(&mut self.nvbufs).freeze();
                (name, value, token)
            }
            _ => unreachable!("literal emission without a literal opcode"),
        };
        // 入表在产出之前, 共享存储保证被挤出的记录仍可安全读取
        if self.index_required {
            self.table.add_header(name.clone(), value.clone(), token);
        }
        let mut field = Field::new(name, value);
        if self.no_index {
            field.flags = FieldFlags::SENSITIVE;
        }
        self.state = DecodeState::Opcode;
        self.opcode = Opcode::None;
        log::trace!("HPACK: 解得字面量头部; {:?}", field);
        Ok(DecodeEvent::Field { field, token })
    }

    fn finish_input(&mut self, in_final: bool) -> HpackResult<DecodeEvent> {
        if !in_final {
            return Ok(DecodeEvent::MoreInput);
        }
        if self.state == DecodeState::Opcode {
            self.header_seen = false;
            self.size_update_run = 0;
            Ok(DecodeEvent::BlockEnd)
        } else {
            Err(HpackError::IncompleteBlock)
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Binary;

    /// 一次性解完一个块, 收集所有头部
    fn decode_block(decoder: &mut Decoder, mut input: &[u8]) -> HpackResult<Vec<Field>> {
        let mut fields = Vec::new();
        loop {
            match decoder.decode(&mut input, true)? {
                DecodeEvent::Field { field, .. } => fields.push(field),
                DecodeEvent::BlockEnd => return Ok(fields),
                DecodeEvent::MoreInput => unreachable!(),
            }
        }
    }

    fn pair(name: &'static str, value: &'static str) -> Field {
        Field::new(Binary::from(name), Binary::from(value))
    }

    #[test]
    fn request_sequence_plain() {
        // C.3.1 .. C.3.3
        let mut decoder = Decoder::new();
        let fields = decode_block(
            &mut decoder,
            &[
                0x82, 0x86, 0x84, 0x41, 0x0f, 0x77, 0x77, 0x77, 0x2e, 0x65, 0x78, 0x61, 0x6d,
                0x70, 0x6c, 0x65, 0x2e, 0x63, 0x6f, 0x6d,
            ],
        )
        .unwrap();
        assert_eq!(
            fields,
            vec![
                pair(":method", "GET"),
                pair(":scheme", "http"),
                pair(":path", "/"),
                pair(":authority", "www.example.com"),
            ]
        );
        assert_eq!(decoder.table().get_size(), 57);
        assert_eq!(decoder.table().len(), 1);

        let fields = decode_block(
            &mut decoder,
            &[
                0x82, 0x86, 0x84, 0xbe, 0x58, 0x08, 0x6e, 0x6f, 0x2d, 0x63, 0x61, 0x63, 0x68,
                0x65,
            ],
        )
        .unwrap();
        assert_eq!(fields[4], pair("cache-control", "no-cache"));
        assert_eq!(decoder.table().get_size(), 110);

        let fields = decode_block(
            &mut decoder,
            &[
                0x82, 0x87, 0x85, 0xbf, 0x40, 0x0a, 0x63, 0x75, 0x73, 0x74, 0x6f, 0x6d, 0x2d,
                0x6b, 0x65, 0x79, 0x0c, 0x63, 0x75, 0x73, 0x74, 0x6f, 0x6d, 0x2d, 0x76, 0x61,
                0x6c, 0x75, 0x65,
            ],
        )
        .unwrap();
        assert_eq!(
            fields,
            vec![
                pair(":method", "GET"),
                pair(":scheme", "https"),
                pair(":path", "/index.html"),
                pair(":authority", "www.example.com"),
                pair("custom-key", "custom-value"),
            ]
        );
        assert_eq!(decoder.table().get_size(), 164);
        assert_eq!(decoder.table().len(), 3);
    }

    #[test]
    fn request_sequence_huffman() {
        // C.4.1 .. C.4.2
        let mut decoder = Decoder::new();
        let fields = decode_block(
            &mut decoder,
            &[
                0x82, 0x86, 0x84, 0x41, 0x8c, 0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0,
                0xab, 0x90, 0xf4, 0xff,
            ],
        )
        .unwrap();
        assert_eq!(fields[3], pair(":authority", "www.example.com"));
        assert_eq!(decoder.table().get_size(), 57);

        let fields = decode_block(
            &mut decoder,
            &[0x82, 0x86, 0x84, 0xbe, 0x58, 0x86, 0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf],
        )
        .unwrap();
        assert_eq!(fields[4], pair("cache-control", "no-cache"));
        assert_eq!(decoder.table().get_size(), 110);
    }

    #[test]
    fn fragmented_delivery() {
        // 与一次性输入等价, 每次只喂一个字节
        let input: &[u8] = &[
            0x82, 0x86, 0x84, 0x41, 0x8c, 0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab,
            0x90, 0xf4, 0xff,
        ];
        let mut decoder = Decoder::new();
        let mut fields = Vec::new();
        for (i, chunk) in input.chunks(1).enumerate() {
            let in_final = i == input.len() - 1;
            let mut chunk = chunk;
            loop {
                match decoder.decode(&mut chunk, in_final).unwrap() {
                    DecodeEvent::Field { field, .. } => fields.push(field),
                    DecodeEvent::MoreInput => break,
                    DecodeEvent::BlockEnd => break,
                }
            }
        }
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[3], pair(":authority", "www.example.com"));
        assert_eq!(decoder.table().get_size(), 57);
    }

    #[test]
    fn emitted_token() {
        let mut decoder = Decoder::new();
        let mut input = &[0x82u8][..];
        match decoder.decode(&mut input, true).unwrap() {
            DecodeEvent::Field { field, token } => {
                assert_eq!(field.name, ":method");
                assert_eq!(token, Some(1));
            }
            _ => panic!("expected a field"),
        }
    }

    #[test]
    fn never_indexed_marks_sensitive() {
        // C.2.3的字面量: password永不索引
        let mut decoder = Decoder::new();
        let fields = decode_block(
            &mut decoder,
            &[
                0x10, 0x08, 0x70, 0x61, 0x73, 0x73, 0x77, 0x6f, 0x72, 0x64, 0x06, 0x73, 0x65,
                0x63, 0x72, 0x65, 0x74,
            ],
        )
        .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "password");
        assert_eq!(fields[0].value, "secret");
        assert!(fields[0].flags.is_sensitive());
        assert_eq!(decoder.table().len(), 0);
    }

    #[test]
    fn empty_name_and_value() {
        let mut decoder = Decoder::new();
        let fields = decode_block(&mut decoder, &[0x40, 0x00, 0x00]).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name.len(), 0);
        assert_eq!(fields[0].value.len(), 0);
        assert_eq!(decoder.table().get_size(), 32);
    }

    #[test]
    fn index_zero_fails() {
        let mut decoder = Decoder::new();
        let mut input = &[0x80u8][..];
        assert_eq!(
            decoder.decode(&mut input, true),
            Err(HpackError::InvalidIndex)
        );
        // 之后任何调用都失败
        let mut input = &[0x82u8][..];
        assert_eq!(
            decoder.decode(&mut input, true),
            Err(HpackError::BadContext)
        );
    }

    #[test]
    fn index_past_table_fails() {
        let mut decoder = Decoder::new();
        // 动态表为空, 62越界
        let mut input = &[0xbeu8][..];
        assert_eq!(
            decoder.decode(&mut input, true),
            Err(HpackError::InvalidIndex)
        );
    }

    #[test]
    fn size_update_rules() {
        // 块首连续两个合法
        let mut decoder = Decoder::new();
        let fields = decode_block(&mut decoder, &[0x20, 0x3f, 0x09, 0x82]).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(decoder.table().get_max_table_size(), 40);

        // 三个连续非法
        let mut decoder = Decoder::new();
        let mut input = &[0x20u8, 0x20, 0x20][..];
        assert_eq!(
            decoder.decode(&mut input, true),
            Err(HpackError::SizeUpdateNotAllowed)
        );

        // 出现在头部之后非法
        let mut decoder = Decoder::new();
        let mut input = &[0x82u8, 0x20][..];
        match decoder.decode(&mut input, false).unwrap() {
            DecodeEvent::Field { .. } => {}
            _ => panic!("expected a field"),
        }
        assert_eq!(
            decoder.decode(&mut input, false),
            Err(HpackError::SizeUpdateNotAllowed)
        );

        // 新的一块中又可以出现
        let mut decoder = Decoder::new();
        decode_block(&mut decoder, &[0x82]).unwrap();
        let fields = decode_block(&mut decoder, &[0x3f, 0x09, 0x82]).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(decoder.table().get_max_table_size(), 40);
    }

    #[test]
    fn size_update_over_settings_fails() {
        let mut decoder = Decoder::with_max_table_size(100);
        // 通告4096超过本端接受的100
        let mut input = &[0x3fu8, 0xe1, 0x1f][..];
        assert_eq!(
            decoder.decode(&mut input, true),
            Err(HpackError::SizeUpdateTooLarge)
        );
    }

    #[test]
    fn size_update_to_zero_then_headers() {
        let mut decoder = Decoder::new();
        let fields = decode_block(
            &mut decoder,
            &[0x20, 0x40, 0x01, 0x61, 0x01, 0x62],
        )
        .unwrap();
        assert_eq!(fields[0], pair("a", "b"));
        // 容量为0, 带索引的字面量也无法驻留
        assert_eq!(decoder.table().len(), 0);
        assert_eq!(decoder.table().get_size(), 0);
    }

    #[test]
    fn incomplete_block_fails() {
        let mut decoder = Decoder::new();
        // 字面量的值还没读完就声明结束
        let mut input = &[0x40u8, 0x01, 0x61, 0x03, 0x62][..];
        assert_eq!(
            decoder.decode(&mut input, true),
            Err(HpackError::IncompleteBlock)
        );
    }

    #[test]
    fn end_headers_mid_block_poisons() {
        let mut decoder = Decoder::new();
        let mut input = &[0x40u8, 0x01, 0x61][..];
        match decoder.decode(&mut input, false).unwrap() {
            DecodeEvent::MoreInput => {}
            _ => panic!("expected to starve"),
        }
        assert_eq!(decoder.end_headers(), Err(HpackError::IncompleteBlock));
        assert_eq!(decoder.end_headers(), Err(HpackError::BadContext));
    }

    #[test]
    fn integer_overflow_fails() {
        let mut decoder = Decoder::new();
        // 索引的续字节永远不终止
        let mut input = &[0xffu8, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80][..];
        assert_eq!(
            decoder.decode(&mut input, false),
            Err(HpackError::TooLargeInt)
        );
    }

    #[test]
    fn bad_huffman_value_fails() {
        // 值的哈夫曼编码全为1, 等价于EOS的前缀
        let mut decoder = Decoder::new();
        let mut input = &[0x40u8, 0x01, 0x61, 0x85, 0xff, 0xff, 0xff, 0xff, 0xff][..];
        assert!(decoder.decode(&mut input, true).is_err());
    }

    #[test]
    fn eviction_keeps_emitted_storage() {
        // 被自己的插入挤出的记录, 产出的头部仍要可读
        let mut decoder = Decoder::with_max_table_size(50);
        decode_block(&mut decoder, &[0x40, 0x01, 0x78, 0x04, 0x61, 0x62, 0x63, 0x64]).unwrap();
        assert_eq!(decoder.table().len(), 1);
        // 引用62号记录的名字, 同时插入的新值把它挤出
        let fields = decode_block(&mut decoder, &[0x7e, 0x04, 0x65, 0x66, 0x67, 0x68]).unwrap();
        assert_eq!(fields[0], pair("x", "efgh"));
        assert_eq!(decoder.table().len(), 1);
        let (name, value) = decoder.table().iter().next().map(|(n, v)| (n.clone(), v.clone())).unwrap();
        assert_eq!(name, "x");
        assert_eq!(value, "efgh");
    }
}
