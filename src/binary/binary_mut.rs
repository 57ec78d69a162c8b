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
// Created Date: 2023/09/14 11:02:36

use std::fmt::{self, Debug};
use std::ops::Deref;

use super::{Binary, Buf, BufMut};

/// 二进制的封装, 可写可读
pub struct BinaryMut {
    vec: Vec<u8>,
    // 游标值, 可以得出当前指向的位置
    cursor: usize,
}

impl BinaryMut {
    #[inline]
    pub fn with_capacity(n: usize) -> BinaryMut {
        BinaryMut::from_vec(Vec::with_capacity(n))
    }

    /// 新建对象
    ///
    /// # Examples
    ///
    /// ```
    /// use hpackparse::{BinaryMut, BufMut};
    ///
    /// let mut bytes = BinaryMut::new();
    /// assert_eq!(0, bytes.len());
    /// bytes.put_slice(b"xy");
    /// assert_eq!(&b"xy"[..], &bytes[..]);
    /// ```
    #[inline]
    pub fn new() -> BinaryMut {
        BinaryMut::with_capacity(0)
    }

    #[inline]
    pub(crate) fn from_vec(vec: Vec<u8>) -> BinaryMut {
        BinaryMut { vec, cursor: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len() - self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.vec[self.cursor..]
    }

    /// 清空重新复用已申请的内存
    #[inline]
    pub fn clear(&mut self) {
        self.vec.clear();
        self.cursor = 0;
    }

    /// 冻结成只读的共享对象, 已累积的数据不做拷贝直接转移
    #[inline]
    pub fn freeze(self) -> Binary {
        let cursor = self.cursor;
        let len = self.vec.len();
        Binary::from(self.vec).slice(cursor..len)
    }
}

impl Buf for BinaryMut {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn chunk(&self) -> &[u8] {
        self.as_slice()
    }

    fn advance(&mut self, n: usize) {
        assert!(n <= self.len());
        self.cursor += n;
    }
}

impl BufMut for BinaryMut {
    #[inline]
    fn put_slice(&mut self, src: &[u8]) -> usize {
        self.vec.extend_from_slice(src);
        src.len()
    }

    #[inline]
    fn put_u8(&mut self, n: u8) {
        self.vec.push(n);
    }
}

impl Deref for BinaryMut {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for BinaryMut {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Debug for BinaryMut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryMut")
            .field("cursor", &self.cursor)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl Default for BinaryMut {
    #[inline]
    fn default() -> BinaryMut {
        BinaryMut::new()
    }
}

impl From<Vec<u8>> for BinaryMut {
    fn from(value: Vec<u8>) -> Self {
        BinaryMut::from_vec(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryMut, Buf, BufMut};

    #[test]
    fn binary_mut_rw() {
        let mut buf = BinaryMut::new();
        buf.put_u8(0x82);
        buf.put_slice(b"abc");
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.get_u8(), 0x82);
        assert_eq!(buf.chunk(), b"abc");
    }

    #[test]
    fn binary_mut_freeze() {
        let mut buf = BinaryMut::new();
        buf.put_slice(b"name");
        buf.put_slice(b"value");
        buf.advance(4);
        let bin = buf.freeze();
        assert_eq!(bin, "value");
    }
}
