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
// Created Date: 2023/09/15 09:12:51

use std::collections::{HashMap, VecDeque};

use lazy_static::lazy_static;

use crate::{Binary, HEADER_ENTRY_OVERHEAD};

/// 静态表的条目数, 下标1..=61为静态表
pub const STATIC_TABLE_LEN: usize = 61;

/// 常见头部名字对应的小整数, 用于加速查表与索引策略判断
pub type Token = usize;

pub const TOKEN_AUTHORIZATION: Token = 22;
pub const TOKEN_COOKIE: Token = 31;
pub const TOKEN_TE: Token = 61;
pub const TOKEN_CONNECTION: Token = 62;
pub const TOKEN_KEEP_ALIVE: Token = 63;
pub const TOKEN_PROXY_CONNECTION: Token = 64;
pub const TOKEN_UPGRADE: Token = 65;

/// (HPACK, Appendix A) 名字, 值, token三元组
static STATIC_TABLE_RAW: &[(&str, &str, Token)] = &[
    (":authority", "", 0),
    (":method", "GET", 1),
    (":method", "POST", 1),
    (":path", "/", 3),
    (":path", "/index.html", 3),
    (":scheme", "http", 5),
    (":scheme", "https", 5),
    (":status", "200", 7),
    (":status", "204", 7),
    (":status", "206", 7),
    (":status", "304", 7),
    (":status", "400", 7),
    (":status", "404", 7),
    (":status", "500", 7),
    ("accept-charset", "", 14),
    ("accept-encoding", "gzip, deflate", 15),
    ("accept-language", "", 16),
    ("accept-ranges", "", 17),
    ("accept", "", 18),
    ("access-control-allow-origin", "", 19),
    ("age", "", 20),
    ("allow", "", 21),
    ("authorization", "", 22),
    ("cache-control", "", 23),
    ("content-disposition", "", 24),
    ("content-encoding", "", 25),
    ("content-language", "", 26),
    ("content-length", "", 27),
    ("content-location", "", 28),
    ("content-range", "", 29),
    ("content-type", "", 30),
    ("cookie", "", 31),
    ("date", "", 32),
    ("etag", "", 33),
    ("expect", "", 34),
    ("expires", "", 35),
    ("from", "", 36),
    ("host", "", 37),
    ("if-match", "", 38),
    ("if-modified-since", "", 39),
    ("if-none-match", "", 40),
    ("if-range", "", 41),
    ("if-unmodified-since", "", 42),
    ("last-modified", "", 43),
    ("link", "", 44),
    ("location", "", 45),
    ("max-forwards", "", 46),
    ("proxy-authenticate", "", 47),
    ("proxy-authorization", "", 48),
    ("range", "", 49),
    ("referer", "", 50),
    ("refresh", "", 51),
    ("retry-after", "", 52),
    ("server", "", 53),
    ("set-cookie", "", 54),
    ("strict-transport-security", "", 55),
    ("transfer-encoding", "", 56),
    ("user-agent", "", 57),
    ("vary", "", 58),
    ("via", "", 59),
    ("www-authenticate", "", 60),
];

/// 不在静态表中, 但需要token用于索引策略的hop-by-hop头
static EXTRA_TOKEN_RAW: &[(&str, Token)] = &[
    ("te", TOKEN_TE),
    ("connection", TOKEN_CONNECTION),
    ("keep-alive", TOKEN_KEEP_ALIVE),
    ("proxy-connection", TOKEN_PROXY_CONNECTION),
    ("upgrade", TOKEN_UPGRADE),
];

lazy_static! {
    static ref TOKEN_MAP: HashMap<&'static [u8], Token> = {
        let mut h = HashMap::<&'static [u8], Token>::new();
        for &(name, _, token) in STATIC_TABLE_RAW.iter() {
            h.entry(name.as_bytes()).or_insert(token);
        }
        for &(name, token) in EXTRA_TOKEN_RAW.iter() {
            h.insert(name.as_bytes(), token);
        }
        h
    };
    static ref STATIC_HASH: HashMap<&'static [u8], (usize, HashMap<&'static [u8], usize>)> = {
        let mut h = HashMap::<&'static [u8], (usize, HashMap<&'static [u8], usize>)>::new();
        for (idx, &(name, value, _)) in STATIC_TABLE_RAW.iter().enumerate() {
            let ent = h
                .entry(name.as_bytes())
                .or_insert_with(|| (idx + 1, HashMap::new()));
            ent.1.entry(value.as_bytes()).or_insert(idx + 1);
        }
        h
    };
}

/// Looks up the token assigned to a well known header name.
pub fn token_of(name: &[u8]) -> Option<Token> {
    TOKEN_MAP.get(name).copied()
}

/// The outcome of looking a header up in the static plus dynamic tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Both name and value matched at the index.
    Full(usize),
    /// Only the name matched at the index.
    Name(usize),
    None,
}

/// 动态表中的一条记录
#[derive(Debug, Clone)]
struct DynEntry {
    name: Binary,
    value: Binary,
    token: Option<Token>,
}

impl DynEntry {
    fn table_size(&self) -> usize {
        self.name.len() + self.value.len() + HEADER_ENTRY_OVERHEAD
    }
}

/// The compression context shared in lockstep with the peer: the fixed
/// static table plus a bounded FIFO of recently transmitted headers.
///
/// Indices are 1-based on the wire. `1..=61` address the static table,
/// anything above addresses the dynamic table, newest entry first.
#[derive(Debug, Clone)]
pub struct HeaderTable {
    table: VecDeque<DynEntry>,
    bufsize: usize,
    bufsize_max: usize,
}

impl HeaderTable {
    pub fn new() -> HeaderTable {
        HeaderTable::with_capacity(crate::DEFAULT_HEADER_TABLE_SIZE)
    }

    pub fn with_capacity(bufsize_max: usize) -> HeaderTable {
        HeaderTable {
            table: VecDeque::new(),
            bufsize: 0,
            bufsize_max,
        }
    }

    /// Returns the current size of the table in octets, as defined by the
    /// IETF HPACK spec: per entry the name length plus the value length
    /// plus 32 octets of overhead.
    pub fn get_size(&self) -> usize {
        self.bufsize
    }

    /// Returns the maximum size of the table in octets.
    pub fn get_max_table_size(&self) -> usize {
        self.bufsize_max
    }

    /// 动态表当前的条数
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Resolves a wire index to a header. Index 0 is reserved and always
    /// misses, as does anything past the end of the dynamic table.
    pub fn get_from_index(&self, index: usize) -> Option<(Binary, Binary, Option<Token>)> {
        let real_index = if index > 0 { index - 1 } else { return None };

        if real_index < STATIC_TABLE_LEN {
            let (name, value, token) = STATIC_TABLE_RAW[real_index];
            Some((
                Binary::from_static(name.as_bytes()),
                Binary::from_static(value.as_bytes()),
                Some(token),
            ))
        } else {
            let dynamic_index = real_index - STATIC_TABLE_LEN;
            match self.table.get(dynamic_index) {
                Some(ent) => Some((ent.name.clone(), ent.value.clone(), ent.token)),
                None => None,
            }
        }
    }

    /// Prepends a header to the dynamic table, evicting from the oldest
    /// end until it fits. A header too large to ever fit empties the table
    /// and is itself not added.
    pub fn add_header(&mut self, name: Binary, value: Binary, token: Option<Token>) {
        let room = name.len() + value.len() + HEADER_ENTRY_OVERHEAD;
        if room > self.bufsize_max {
            self.table.clear();
            self.bufsize = 0;
            return;
        }
        while self.bufsize + room > self.bufsize_max {
            self.evict_one();
        }
        self.bufsize += room;
        self.table.push_front(DynEntry { name, value, token });
    }

    /// Updates the capacity bound, evicting headers in a FIFO fashion
    /// until the table fits again.
    pub fn set_max_table_size(&mut self, new_max_size: usize) {
        self.bufsize_max = new_max_size;
        while self.bufsize > self.bufsize_max {
            self.evict_one();
        }
    }

    fn evict_one(&mut self) {
        let last = match self.table.pop_back() {
            Some(x) => x,
            None => {
                // Can never happen as the size of the table must reach
                // 0 by the time we've exhausted all elements.
                panic!("size of table != 0, but no headers left!");
            }
        };
        self.bufsize -= last.table_size();
    }

    /// Finds the best index for the header: a full match wins over a name
    /// match, and static entries win over dynamic ones. Name equality is
    /// decided by token when both sides carry one.
    pub fn find_header(&self, name: &[u8], value: &[u8], token: Option<Token>) -> MatchResult {
        let static_entry = STATIC_HASH.get(name);
        if let Some((_, values)) = static_entry {
            if let Some(&idx) = values.get(value) {
                return MatchResult::Full(idx);
            }
        }
        let mut name_idx = static_entry.map(|(idx, _)| *idx);
        for (i, ent) in self.table.iter().enumerate() {
            let name_eq = match (token, ent.token) {
                (Some(a), Some(b)) => a == b,
                _ => ent.name == *name,
            };
            if name_eq {
                if ent.value == *value {
                    return MatchResult::Full(STATIC_TABLE_LEN + 1 + i);
                }
                if name_idx.is_none() {
                    name_idx = Some(STATIC_TABLE_LEN + 1 + i);
                }
            }
        }
        match name_idx {
            Some(idx) => MatchResult::Name(idx),
            None => MatchResult::None,
        }
    }

    /// 遍历动态表, 新的在前
    pub fn iter(&self) -> impl Iterator<Item = (&Binary, &Binary)> {
        self.table.iter().map(|ent| (&ent.name, &ent.value))
    }
}

impl Default for HeaderTable {
    fn default() -> Self {
        HeaderTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(s: &'static str) -> Binary {
        Binary::from_static(s.as_bytes())
    }

    #[test]
    fn static_lookup() {
        let table = HeaderTable::new();
        let (name, value, token) = table.get_from_index(2).unwrap();
        assert_eq!(name, ":method");
        assert_eq!(value, "GET");
        assert_eq!(token, Some(1));
        assert!(table.get_from_index(0).is_none());
        assert!(table.get_from_index(62).is_none());
    }

    #[test]
    fn tokens() {
        assert_eq!(token_of(b":authority"), Some(0));
        assert_eq!(token_of(b"cookie"), Some(TOKEN_COOKIE));
        assert_eq!(token_of(b"connection"), Some(TOKEN_CONNECTION));
        assert_eq!(token_of(b"x-custom"), None);
    }

    #[test]
    fn size_accounting() {
        let mut table = HeaderTable::new();
        table.add_header(bin(":authority"), bin("www.example.com"), Some(0));
        assert_eq!(table.get_size(), 57);
        table.add_header(bin("cache-control"), bin("no-cache"), Some(23));
        assert_eq!(table.get_size(), 110);
        table.add_header(bin("custom-key"), bin("custom-value"), None);
        assert_eq!(table.get_size(), 164);
        assert_eq!(table.len(), 3);
        // 新插入的记录排在62的位置
        let (name, _, _) = table.get_from_index(62).unwrap();
        assert_eq!(name, "custom-key");
    }

    #[test]
    fn eviction_fifo() {
        let mut table = HeaderTable::with_capacity(110);
        table.add_header(bin(":authority"), bin("www.example.com"), Some(0));
        table.add_header(bin("cache-control"), bin("no-cache"), Some(23));
        assert_eq!(table.get_size(), 110);
        table.add_header(bin("custom-key"), bin("custom-value"), None);
        // 54进来, 最老的57被挤出
        assert_eq!(table.get_size(), 107);
        assert_eq!(table.len(), 2);
        let (name, _, _) = table.get_from_index(63).unwrap();
        assert_eq!(name, "cache-control");
    }

    #[test]
    fn exact_fit() {
        let mut table = HeaderTable::with_capacity(57);
        table.add_header(bin(":authority"), bin("www.example.com"), Some(0));
        assert_eq!(table.get_size(), 57);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn oversize_entry_clears_table() {
        let mut table = HeaderTable::with_capacity(57);
        table.add_header(bin(":authority"), bin("www.example.com"), Some(0));
        table.add_header(bin("x-very-long-header-name"), bin("with a value over the cap"), None);
        assert_eq!(table.len(), 0);
        assert_eq!(table.get_size(), 0);
    }

    #[test]
    fn shrink_capacity_evicts() {
        let mut table = HeaderTable::new();
        table.add_header(bin(":authority"), bin("www.example.com"), Some(0));
        table.add_header(bin("cache-control"), bin("no-cache"), Some(23));
        table.set_max_table_size(60);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_size(), 53);
        table.set_max_table_size(0);
        assert!(table.is_empty());
    }

    #[test]
    fn find_prefers_static_and_full() {
        let mut table = HeaderTable::new();
        assert_eq!(
            table.find_header(b":method", b"GET", Some(1)),
            MatchResult::Full(2)
        );
        assert_eq!(
            table.find_header(b":method", b"PATCH", Some(1)),
            MatchResult::Name(2)
        );
        table.add_header(bin(":method"), bin("PATCH"), Some(1));
        // 动态表中的完全匹配优于静态表的名字匹配
        assert_eq!(
            table.find_header(b":method", b"PATCH", Some(1)),
            MatchResult::Full(62)
        );
        // 名字匹配时静态表优先
        assert_eq!(
            table.find_header(b":method", b"PUT", Some(1)),
            MatchResult::Name(2)
        );
        assert_eq!(table.find_header(b"custom-key", b"v", None), MatchResult::None);
        table.add_header(bin("custom-key"), bin("custom-value"), None);
        assert_eq!(
            table.find_header(b"custom-key", b"v", None),
            MatchResult::Name(62)
        );
    }
}
