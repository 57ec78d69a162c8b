//! Huffman coding for header strings, using the static code table of
//! HPACK-draft-10, Appendix B.
//!
//! Encoding walks the symbol table and flushes whole octets out of a bit
//! accumulator; the last octet is padded with the most significant bits of
//! the EOS symbol. Decoding runs a precomputed automaton that consumes the
//! input four bits per step, so it can stop and resume at any octet
//! boundary.

mod table;

use table::{HUFF_ACCEPTED, HUFF_DECODE_TABLE, HUFF_FAIL, HUFF_SYM, HUFF_SYM_TABLE};

use crate::BufMut;

/// Represents the error variants that the `HuffmanDecoder` can return.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum HuffmanError {
    /// Any padding that is longer than 7 bits, or that does not correspond
    /// to the most significant bits of EOS, MUST be interpreted as an error.
    InvalidPadding,
    /// If EOS is ever found in the string, it causes an error.
    EosInString,
}

impl HuffmanError {
    #[inline]
    pub fn description_str(&self) -> &'static str {
        match self {
            HuffmanError::InvalidPadding => "invalid huffman padding",
            HuffmanError::EosInString => "eos decoded in huffman string",
        }
    }
}

/// Returns the number of octets `src` occupies once Huffman encoded,
/// including the padding of the final octet.
pub fn encode_count(src: &[u8]) -> usize {
    let mut nbits: u64 = 0;
    for &b in src {
        nbits += HUFF_SYM_TABLE[b as usize].1 as u64;
    }
    ((nbits + 7) / 8) as usize
}

/// Huffman encodes `src` into `buf`, returning the number of octets
/// written. The output length always matches `encode_count(src)`.
pub fn encode<B: BufMut>(buf: &mut B, src: &[u8]) -> usize {
    let mut current: u64 = 0;
    let mut nbits: u32 = 0;
    let mut total = 0;
    for &b in src {
        let (code, len) = HUFF_SYM_TABLE[b as usize];
        current = (current << len) | code as u64;
        nbits += len as u32;
        while nbits >= 8 {
            nbits -= 8;
            buf.put_u8((current >> nbits) as u8);
            total += 1;
        }
    }
    if nbits > 0 {
        // 末尾以EOS的高位比特填充
        buf.put_u8(((current << (8 - nbits)) | (0xffu64 >> nbits)) as u8);
        total += 1;
    }
    total
}

/// A stateful Huffman decoder. The state survives between calls, so the
/// encoded string may arrive in arbitrarily fragmented slices; the caller
/// marks the last slice with `is_final`.
pub struct HuffmanDecoder {
    state: u8,
    accept: bool,
}

impl HuffmanDecoder {
    pub fn new() -> HuffmanDecoder {
        HuffmanDecoder {
            state: 0,
            accept: true,
        }
    }

    /// 重置到初始状态, 复用于下一个字符串
    pub fn reset(&mut self) {
        self.state = 0;
        self.accept = true;
    }

    /// Decodes all of `src` into `dst`, returning the number of octets
    /// consumed. With `is_final`, additionally verifies that the input
    /// stops at a symbol boundary or in valid padding.
    pub fn decode<B: BufMut>(
        &mut self,
        dst: &mut B,
        src: &[u8],
        is_final: bool,
    ) -> Result<usize, HuffmanError> {
        for &b in src {
            for nib in [b >> 4, b & 0x0f] {
                let (next, flags, sym) = HUFF_DECODE_TABLE[self.state as usize][nib as usize];
                if flags & HUFF_FAIL != 0 {
                    return Err(HuffmanError::EosInString);
                }
                if flags & HUFF_SYM != 0 {
                    dst.put_u8(sym);
                }
                self.state = next;
                self.accept = flags & HUFF_ACCEPTED != 0;
            }
        }
        if is_final && !self.accept {
            return Err(HuffmanError::InvalidPadding);
        }
        Ok(src.len())
    }
}

impl Default for HuffmanDecoder {
    fn default() -> Self {
        HuffmanDecoder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_whole(src: &[u8]) -> Result<Vec<u8>, HuffmanError> {
        let mut out = Vec::new();
        HuffmanDecoder::new().decode(&mut out, src, true)?;
        Ok(out)
    }

    #[test]
    fn encode_rfc_vectors() {
        let mut out = Vec::new();
        assert_eq!(encode_count(b"www.example.com"), 12);
        encode(&mut out, b"www.example.com");
        assert_eq!(
            out,
            vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff]
        );

        out.clear();
        encode(&mut out, b"no-cache");
        assert_eq!(out, vec![0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf]);

        out.clear();
        encode(&mut out, b"custom-key");
        assert_eq!(out, vec![0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xa9, 0x7d, 0x7f]);
    }

    #[test]
    fn roundtrip_all_symbols() {
        let src = (0..=255u8).collect::<Vec<u8>>();
        let mut enc = Vec::new();
        let n = encode(&mut enc, &src);
        assert_eq!(n, encode_count(&src));
        assert_eq!(decode_whole(&enc).unwrap(), src);
    }

    #[test]
    fn roundtrip_empty() {
        let mut enc = Vec::new();
        assert_eq!(encode(&mut enc, b""), 0);
        assert_eq!(decode_whole(b"").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn fragmented_decode() {
        let mut enc = Vec::new();
        encode(&mut enc, b"www.example.com");
        let mut out = Vec::new();
        let mut dec = HuffmanDecoder::new();
        for (i, chunk) in enc.chunks(1).enumerate() {
            let is_final = i == enc.len() - 1;
            dec.decode(&mut out, chunk, is_final).unwrap();
        }
        assert_eq!(out, b"www.example.com");
    }

    #[test]
    fn eos_padding_over_seven_bits() {
        // 连续全1超过7bit等同传输了EOS前缀, 必须报错
        let mut out = Vec::new();
        let ret = HuffmanDecoder::new().decode(&mut out, &[0xff, 0xff, 0xff, 0xff, 0xff], true);
        assert!(ret.is_err());
    }

    #[test]
    fn padding_not_all_ones() {
        // '0'的编码是00000, 后随000的填充不是EOS前缀
        assert_eq!(decode_whole(&[0x00]), Err(HuffmanError::InvalidPadding));
    }

    #[test]
    fn valid_three_bit_padding() {
        // '0' is coded 00000, the three remaining bits are all ones
        assert_eq!(decode_whole(&[0x07]).unwrap(), b"0".to_vec());
    }
}
