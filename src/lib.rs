
#[macro_use] extern crate bitflags;

pub mod binary;
mod decoder;
mod encoder;
mod error;
mod field;
pub mod huffman;
mod table;

pub use binary::{Binary, BinaryMut, Buf, BufMut};

pub use decoder::{DecodeEvent, Decoder, FieldRepresentation};
pub use encoder::Encoder;
pub use error::{HpackError, HpackResult};
pub use field::{Field, FieldFlags};
pub use huffman::{HuffmanDecoder, HuffmanError};
pub use table::{
    token_of, HeaderTable, MatchResult, Token, TOKEN_AUTHORIZATION, TOKEN_CONNECTION,
    TOKEN_COOKIE, TOKEN_KEEP_ALIVE, TOKEN_PROXY_CONNECTION, TOKEN_TE, TOKEN_UPGRADE,
};

/// 默认的动态表大小上限值, 与SETTINGS_HEADER_TABLE_SIZE初始值一致
pub const DEFAULT_HEADER_TABLE_SIZE: usize = 4_096;

/// 编码端动态表占用内存的默认上限, 对端通告再大也不会超过该值
pub const DEFAULT_MAX_DEFLATE_TABLE_SIZE: usize = 1 << 12;

/// 动态表中每条记录额外的开销字节数
pub const HEADER_ENTRY_OVERHEAD: usize = 32;

/// 单个头部名值对(名字加值)允许的最大字节数
pub const MAX_HEADER_FIELD_SIZE: usize = 65_536;
